use serde::{Deserialize, Deserializer, Serialize};

/// Review status of a single photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PhotoStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    /// Soft-deleted, waiting in the trash
    Deleted,
}

impl PhotoStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PhotoStatus::Pending => "pending",
            PhotoStatus::Approved => "approved",
            PhotoStatus::Rejected => "rejected",
            PhotoStatus::Deleted => "deleted",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "approved" => PhotoStatus::Approved,
            "rejected" => PhotoStatus::Rejected,
            "deleted" | "trash" => PhotoStatus::Deleted,
            _ => PhotoStatus::Pending, // unknown values are treated as not yet reviewed
        }
    }

    /// Fluent key of the human-readable label
    pub fn label_key(&self) -> &'static str {
        match self {
            PhotoStatus::Pending => "photo-status-pending",
            PhotoStatus::Approved => "photo-status-approved",
            PhotoStatus::Rejected => "photo-status-rejected",
            PhotoStatus::Deleted => "photo-status-deleted",
        }
    }
}

impl From<String> for PhotoStatus {
    fn from(s: String) -> Self {
        PhotoStatus::from_str(&s)
    }
}

impl From<PhotoStatus> for String {
    fn from(status: PhotoStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Aggregate status of a submission, derived by the server from its photos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "approved" => SubmissionStatus::Approved,
            "rejected" => SubmissionStatus::Rejected,
            _ => SubmissionStatus::Pending,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "submission-status-pending",
            SubmissionStatus::Approved => "submission-status-approved",
            SubmissionStatus::Rejected => "submission-status-rejected",
        }
    }
}

impl From<String> for SubmissionStatus {
    fn from(s: String) -> Self {
        SubmissionStatus::from_str(&s)
    }
}

impl From<SubmissionStatus> for String {
    fn from(status: SubmissionStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Raw/high-resolution file attached after approval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Original {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub thumb_url: Option<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub status: PhotoStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comment: String,
    #[serde(default)]
    pub deleted_at: Option<String>,
    #[serde(default)]
    pub parent_photo_id: Option<i64>,
    #[serde(default)]
    pub originals: Vec<Original>,
}

impl Photo {
    /// In the trash, either by status or by deletion timestamp
    pub fn is_deleted(&self) -> bool {
        self.status == PhotoStatus::Deleted
            || self.deleted_at.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Thumbnail if the server made one, otherwise the full image
    pub fn display_url(&self) -> &str {
        match self.thumb_url.as_deref() {
            Some(thumb) if !thumb.is_empty() => thumb,
            _ => &self.url,
        }
    }

    /// Originals may only be added to approved, live photos
    pub fn accepts_originals(&self) -> bool {
        self.status == PhotoStatus::Approved && !self.is_deleted()
    }

    pub fn has_originals(&self) -> bool {
        !self.originals.is_empty()
    }

    /// Approved photo still waiting for its originals
    pub fn awaits_originals(&self) -> bool {
        self.accepts_originals() && !self.has_originals()
    }
}

/// One user's review request: profile fields plus photos
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub district: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comment: String,
    #[serde(default)]
    pub status: SubmissionStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub admin_comment: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub updated_at: String,
    #[serde(default)]
    pub photos: Vec<Photo>,
    /// Originals not tied to one photo (older uploads)
    #[serde(default)]
    pub originals: Vec<Original>,
}

impl Submission {
    /// Photos not in the trash
    pub fn live_photos(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter().filter(|p| !p.is_deleted())
    }

    /// Submission-wide originals upload is offered once, after approval,
    /// and only while no photo has received originals of its own
    pub fn awaits_submission_originals(&self) -> bool {
        self.status == SubmissionStatus::Approved
            && self.originals.is_empty()
            && !self.live_photos().any(Photo::has_originals)
    }

    /// Cabinet link for this submission's owner
    pub fn cabinet_path(&self) -> String {
        format!("/user/{}", urlencoding::encode(&self.email))
    }
}

/// Answer to a new submission
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionCreated {
    #[serde(deserialize_with = "string_or_number")]
    pub submission_id: String,
}

/// `{ "submission": ... }` answers of photo/original mutations
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmissionEnvelope {
    pub submission: Submission,
}

/// Answer to a photo review
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOutcome {
    #[serde(default)]
    pub submission_status: Option<SubmissionStatus>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "id": 7,
            "name": "Анна",
            "district": "Центральный",
            "email": "anna@example.com",
            "phone": null,
            "comment": "",
            "status": "approved",
            "adminComment": "",
            "createdAt": "01.02.2025, 10:00:00",
            "updatedAt": "",
            "photos": [
                {
                    "id": 11, "name": "a.jpg", "size": 300000,
                    "url": "/uploads/a.jpg", "thumbUrl": "/uploads/thumbs/a.webp",
                    "status": "approved", "comment": "", "parentPhotoId": null,
                    "originals": [{"id": 21, "name": "a.psd", "size": 9000000, "url": "/uploads/a.psd"}]
                },
                {
                    "id": 12, "name": "b.jpg", "size": 300000,
                    "url": "/uploads/b.jpg", "status": "whatever"
                }
            ],
            "originals": []
        })
    }

    #[test]
    fn test_decode_submission() {
        let sub: Submission = serde_json::from_value(sample()).unwrap();
        assert_eq!(sub.id, 7);
        assert_eq!(sub.phone, "");
        assert_eq!(sub.status, SubmissionStatus::Approved);
        assert_eq!(sub.photos.len(), 2);
        assert_eq!(sub.photos[0].originals[0].name, "a.psd");
        assert_eq!(sub.photos[1].status, PhotoStatus::Pending);
        assert_eq!(sub.photos[1].display_url(), "/uploads/b.jpg");
        assert_eq!(sub.photos[0].display_url(), "/uploads/thumbs/a.webp");
    }

    #[test]
    fn test_status_round_trip_strings() {
        assert_eq!(PhotoStatus::from_str("Approved"), PhotoStatus::Approved);
        assert_eq!(PhotoStatus::from_str("trash"), PhotoStatus::Deleted);
        assert_eq!(PhotoStatus::from_str(""), PhotoStatus::Pending);
        assert_eq!(
            serde_json::to_value(PhotoStatus::Rejected).unwrap(),
            json!("rejected")
        );
    }

    #[test]
    fn test_originals_only_for_approved_live_photos() {
        let sub: Submission = serde_json::from_value(sample()).unwrap();
        let mut photo = sub.photos[0].clone();
        assert!(photo.accepts_originals());
        assert!(!photo.awaits_originals());

        photo.originals.clear();
        assert!(photo.awaits_originals());

        photo.deleted_at = Some("2025-02-01T10:00:00+03:00".to_string());
        assert!(photo.is_deleted());
        assert!(!photo.accepts_originals());

        assert!(!sub.photos[1].accepts_originals());
    }

    #[test]
    fn test_submission_id_string_or_number() {
        let created: SubmissionCreated =
            serde_json::from_value(json!({"ok": true, "submissionId": 42})).unwrap();
        assert_eq!(created.submission_id, "42");
        let created: SubmissionCreated =
            serde_json::from_value(json!({"submissionId": "X"})).unwrap();
        assert_eq!(created.submission_id, "X");
    }

    #[test]
    fn test_submission_originals_only_without_per_photo_originals() {
        let mut sub: Submission = serde_json::from_value(sample()).unwrap();
        // photo 11 already carries its own originals
        assert!(!sub.awaits_submission_originals());

        sub.photos[0].originals.clear();
        assert!(sub.awaits_submission_originals());

        sub.status = SubmissionStatus::Pending;
        assert!(!sub.awaits_submission_originals());
    }

    #[test]
    fn test_cabinet_path_is_encoded() {
        let sub = Submission {
            email: "a+b@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(sub.cabinet_path(), "/user/a%2Bb%40example.com");
    }
}
