use crate::error::AppError;
use crate::models::{Submission, SubmissionCreated};
use crate::routing::normalize_email;
use crate::services::api::{append_files, ApiClient, UploadFile};
use reqwest::multipart::Form;

/// Fields of the public submission form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSubmission {
    pub name: String,
    pub district: String,
    pub email: String,
    pub phone: String,
    pub comment: String,
}

impl NewSubmission {
    pub fn new(name: &str, district: &str, email: &str, phone: &str, comment: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            district: district.trim().to_string(),
            email: normalize_email(email),
            phone: phone.trim().to_string(),
            comment: comment.trim().to_string(),
        }
    }

    /// Fluent key of the first problem, if any
    pub fn problem(&self, photo_count: usize) -> Option<&'static str> {
        if self.name.is_empty() || self.district.is_empty() || self.email.is_empty() {
            Some("error-required-fields")
        } else if !self.email.contains('@') {
            Some("error-email-invalid")
        } else if photo_count == 0 {
            Some("error-photos-required")
        } else {
            None
        }
    }

    fn into_form(self, photos: Vec<UploadFile>) -> Form {
        let form = Form::new()
            .text("name", self.name)
            .text("district", self.district)
            .text("email", self.email)
            .text("phone", self.phone)
            .text("comment", self.comment);
        append_files(form, "photos", photos)
    }
}

/// Sends a new submission; returns the id the server assigned
pub async fn submit(
    api: &ApiClient,
    submission: NewSubmission,
    photos: Vec<UploadFile>,
) -> Result<String, AppError> {
    let photo_count = photos.len();
    let created: SubmissionCreated = api
        .post_form("/api/submissions", submission.into_form(photos))
        .await?;
    log::info!(
        "Submission {} created with {} photo(s)",
        created.submission_id,
        photo_count
    );
    Ok(created.submission_id)
}

/// All submissions of an e-mail address, newest first as the server sends them
pub async fn find_by_email(api: &ApiClient, email: &str) -> Result<Vec<Submission>, AppError> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(AppError::Validation("Введите email".to_string()));
    }
    let path = format!("/api/submissions?email={}", urlencoding::encode(&email));
    api.get(&path).await
}

/// Originals for a whole submission (older flow, before per-photo originals)
pub async fn upload_submission_originals(
    api: &ApiClient,
    submission_id: i64,
    files: Vec<UploadFile>,
) -> Result<(), AppError> {
    let count = files.len();
    let form = append_files(Form::new(), "originals", files);
    let _: serde_json::Value = api
        .post_form(&format!("/api/submissions/{}/originals", submission_id), form)
        .await?;
    log::info!(
        "Uploaded {} original(s) for submission {}",
        count,
        submission_id
    );
    Ok(())
}
