use crate::error::AppError;
use crate::models::{Photo, PhotoStatus, ReviewOutcome, Submission, SubmissionStatus};
use crate::services::api::{Ack, ApiClient};
use serde_json::json;

/// Buckets of the admin list. Filtering happens on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    /// Every photo that is not in the trash
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
    Trash,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::Approved,
        StatusFilter::Rejected,
        StatusFilter::Trash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Approved => "approved",
            StatusFilter::Rejected => "rejected",
            StatusFilter::Trash => "trash",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(StatusFilter::All),
            "pending" => Some(StatusFilter::Pending),
            "approved" => Some(StatusFilter::Approved),
            "rejected" => Some(StatusFilter::Rejected),
            "trash" | "deleted" => Some(StatusFilter::Trash),
            _ => None,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            StatusFilter::All => "filter-all",
            StatusFilter::Pending => "filter-pending",
            StatusFilter::Approved => "filter-approved",
            StatusFilter::Rejected => "filter-rejected",
            StatusFilter::Trash => "filter-trash",
        }
    }
}

pub fn photo_matches(photo: &Photo, filter: StatusFilter) -> bool {
    if photo.is_deleted() {
        return filter == StatusFilter::Trash;
    }
    match filter {
        StatusFilter::All => true,
        StatusFilter::Pending => photo.status == PhotoStatus::Pending,
        StatusFilter::Approved => photo.status == PhotoStatus::Approved,
        StatusFilter::Rejected => photo.status == PhotoStatus::Rejected,
        StatusFilter::Trash => false,
    }
}

/// Keeps the photos of the bucket; submissions left without photos are dropped
pub fn filter_submissions(submissions: &[Submission], filter: StatusFilter) -> Vec<Submission> {
    submissions
        .iter()
        .filter_map(|submission| {
            let photos: Vec<Photo> = submission
                .photos
                .iter()
                .filter(|photo| photo_matches(photo, filter))
                .cloned()
                .collect();
            if photos.is_empty() {
                None
            } else {
                Some(Submission {
                    photos,
                    ..submission.clone()
                })
            }
        })
        .collect()
}

/// Number of photos per bucket, for the filter buttons
pub fn count_photos(submissions: &[Submission], filter: StatusFilter) -> usize {
    submissions
        .iter()
        .flat_map(|s| s.photos.iter())
        .filter(|photo| photo_matches(photo, filter))
        .count()
}

/// Buttons offered for one photo in the admin list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoAction {
    Approve,
    Reject,
    SaveComment,
    Delete,
    Purge,
}

pub fn available_actions(photo: &Photo) -> Vec<PhotoAction> {
    if photo.is_deleted() {
        return vec![PhotoAction::Purge];
    }
    let mut actions = Vec::with_capacity(4);
    if photo.status != PhotoStatus::Approved {
        actions.push(PhotoAction::Approve);
    }
    if photo.status != PhotoStatus::Rejected {
        actions.push(PhotoAction::Reject);
    }
    actions.push(PhotoAction::SaveComment);
    actions.push(PhotoAction::Delete);
    actions
}

/// Every submission, regardless of status
pub async fn list_submissions(api: &ApiClient) -> Result<Vec<Submission>, AppError> {
    let submissions: Vec<Submission> = api.get("/api/admin/submissions?status=all").await?;
    log::debug!("Loaded {} submission(s)", submissions.len());
    Ok(submissions)
}

/// Approves or rejects a photo together with the reviewer's comment
pub async fn review_photo(
    api: &ApiClient,
    photo_id: i64,
    status: PhotoStatus,
    comment: &str,
) -> Result<Option<SubmissionStatus>, AppError> {
    if !matches!(status, PhotoStatus::Approved | PhotoStatus::Rejected) {
        return Err(AppError::Validation("Некорректный статус фото".to_string()));
    }
    let outcome: ReviewOutcome = api
        .post_json(
            &format!("/api/admin/photos/{}/review", photo_id),
            json!({ "status": status.as_str(), "comment": comment.trim() }),
        )
        .await?;
    log::info!("Photo {} marked {}", photo_id, status.as_str());
    Ok(outcome.submission_status)
}

pub async fn save_photo_comment(api: &ApiClient, photo_id: i64, comment: &str) -> Result<(), AppError> {
    let _: Ack = api
        .post_json(
            &format!("/api/admin/photos/{}/comment", photo_id),
            json!({ "comment": comment.trim() }),
        )
        .await?;
    log::info!("Comment saved for photo {}", photo_id);
    Ok(())
}

/// Overrides the status of a whole submission
pub async fn set_submission_status(
    api: &ApiClient,
    submission_id: i64,
    status: SubmissionStatus,
) -> Result<(), AppError> {
    let _: Ack = api
        .post_json(
            &format!("/api/admin/submissions/{}/status", submission_id),
            json!({ "status": status.as_str() }),
        )
        .await?;
    log::info!("Submission {} set to {}", submission_id, status.as_str());
    Ok(())
}

pub async fn save_submission_comment(
    api: &ApiClient,
    submission_id: i64,
    comment: &str,
) -> Result<(), AppError> {
    let _: Ack = api
        .post_json(
            &format!("/api/admin/submissions/{}/comment", submission_id),
            json!({ "comment": comment.trim() }),
        )
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: i64, status: PhotoStatus, deleted: bool) -> Photo {
        Photo {
            id,
            name: format!("{}.jpg", id),
            url: format!("/uploads/{}.jpg", id),
            thumb_url: None,
            size: 300_000,
            status,
            comment: String::new(),
            deleted_at: deleted.then(|| "2025-03-01T10:00:00+03:00".to_string()),
            parent_photo_id: None,
            originals: Vec::new(),
        }
    }

    fn submissions() -> Vec<Submission> {
        vec![
            Submission {
                id: 1,
                photos: vec![
                    photo(10, PhotoStatus::Pending, false),
                    photo(11, PhotoStatus::Approved, false),
                    photo(12, PhotoStatus::Rejected, true),
                ],
                ..Default::default()
            },
            Submission {
                id: 2,
                photos: vec![photo(20, PhotoStatus::Deleted, false)],
                ..Default::default()
            },
            Submission {
                id: 3,
                photos: Vec::new(),
                ..Default::default()
            },
        ]
    }

    fn ids(subs: &[Submission]) -> Vec<i64> {
        subs.iter()
            .flat_map(|s| s.photos.iter().map(|p| p.id))
            .collect()
    }

    #[test]
    fn test_all_excludes_trash() {
        let filtered = filter_submissions(&submissions(), StatusFilter::All);
        assert_eq!(filtered.len(), 1);
        assert_eq!(ids(&filtered), vec![10, 11]);
    }

    #[test]
    fn test_trash_bucket() {
        let filtered = filter_submissions(&submissions(), StatusFilter::Trash);
        assert_eq!(filtered.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(ids(&filtered), vec![12, 20]);
    }

    #[test]
    fn test_status_buckets_partition_all() {
        let subs = submissions();
        let mut union: Vec<i64> = [
            StatusFilter::Pending,
            StatusFilter::Approved,
            StatusFilter::Rejected,
        ]
        .into_iter()
        .flat_map(|f| ids(&filter_submissions(&subs, f)))
        .collect();
        union.sort();
        assert_eq!(union, ids(&filter_submissions(&subs, StatusFilter::All)));
        assert_eq!(count_photos(&subs, StatusFilter::Rejected), 0);
        assert_eq!(count_photos(&subs, StatusFilter::Trash), 2);
    }

    #[test]
    fn test_actions_hide_current_status() {
        assert_eq!(
            available_actions(&photo(1, PhotoStatus::Approved, false)),
            vec![PhotoAction::Reject, PhotoAction::SaveComment, PhotoAction::Delete]
        );
        assert_eq!(
            available_actions(&photo(1, PhotoStatus::Pending, false)),
            vec![
                PhotoAction::Approve,
                PhotoAction::Reject,
                PhotoAction::SaveComment,
                PhotoAction::Delete
            ]
        );
        assert_eq!(
            available_actions(&photo(1, PhotoStatus::Approved, true)),
            vec![PhotoAction::Purge]
        );
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(StatusFilter::from_str("Trash"), Some(StatusFilter::Trash));
        assert_eq!(StatusFilter::from_str("bogus"), None);
        for filter in StatusFilter::ALL {
            assert_eq!(StatusFilter::from_str(filter.as_str()), Some(filter));
        }
    }
}
