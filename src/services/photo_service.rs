use crate::error::AppError;
use crate::models::{Submission, SubmissionEnvelope};
use crate::services::api::{append_files, ApiClient, UploadFile};
use reqwest::multipart::Form;

// Every call here answers with the full submission snapshot, which replaces
// whatever the caller shows.

/// One-click photo mutations shared by the cabinet and the admin list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoOp {
    Delete(i64),
    Purge(i64),
    DeleteOriginals(i64),
    DeleteOriginal(i64),
}

impl PhotoOp {
    pub async fn run(self, api: &ApiClient) -> Result<Submission, AppError> {
        match self {
            PhotoOp::Delete(id) => delete_photo(api, id).await,
            PhotoOp::Purge(id) => purge_photo(api, id).await,
            PhotoOp::DeleteOriginals(id) => delete_photo_originals(api, id).await,
            PhotoOp::DeleteOriginal(id) => delete_original(api, id).await,
        }
    }
}

/// Moves a photo to the trash (or deletes it, depending on the server)
pub async fn delete_photo(api: &ApiClient, photo_id: i64) -> Result<Submission, AppError> {
    let envelope: SubmissionEnvelope = api.delete(&format!("/api/photos/{}", photo_id)).await?;
    log::info!("Photo {} deleted", photo_id);
    Ok(envelope.submission)
}

/// Removes a trashed photo for good
pub async fn purge_photo(api: &ApiClient, photo_id: i64) -> Result<Submission, AppError> {
    let envelope: SubmissionEnvelope = api
        .post_json(&format!("/api/photos/{}/purge", photo_id), serde_json::json!({}))
        .await?;
    log::info!("Photo {} purged", photo_id);
    Ok(envelope.submission)
}

pub async fn upload_photo_originals(
    api: &ApiClient,
    photo_id: i64,
    files: Vec<UploadFile>,
) -> Result<Submission, AppError> {
    if files.is_empty() {
        return Err(AppError::Validation("Файлы не выбраны".to_string()));
    }
    let count = files.len();
    let form = append_files(Form::new(), "originals", files);
    let envelope: SubmissionEnvelope = api
        .post_form(&format!("/api/photos/{}/originals", photo_id), form)
        .await?;
    log::info!("Uploaded {} original(s) for photo {}", count, photo_id);
    Ok(envelope.submission)
}

pub async fn delete_photo_originals(api: &ApiClient, photo_id: i64) -> Result<Submission, AppError> {
    let envelope: SubmissionEnvelope = api
        .delete(&format!("/api/photos/{}/originals", photo_id))
        .await?;
    log::info!("Originals of photo {} deleted", photo_id);
    Ok(envelope.submission)
}

pub async fn delete_original(api: &ApiClient, original_id: i64) -> Result<Submission, AppError> {
    let envelope: SubmissionEnvelope = api
        .delete(&format!("/api/originals/{}", original_id))
        .await?;
    log::info!("Original {} deleted", original_id);
    Ok(envelope.submission)
}
