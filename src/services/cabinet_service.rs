use crate::error::AppError;
use crate::models::{ProfileUpdate, UserAnswer, UserProfile};
use crate::routing::normalize_email;
use crate::services::api::{append_files, email_segment, ApiClient, RequestBody, UploadFile};
use reqwest::multipart::Form;

fn user_path(email: &str, suffix: &str) -> String {
    format!("/api/users/{}{}", email_segment(&normalize_email(email)), suffix)
}

/// Loads the cabinet snapshot; unknown users get an empty profile
pub async fn load_profile(api: &ApiClient, email: &str) -> Result<UserProfile, AppError> {
    match api.get::<UserAnswer>(&user_path(email, "")).await {
        Ok(answer) => Ok(answer.into_profile()),
        Err(e) if e.is_not_found() => {
            log::info!("No profile yet for {}", email);
            Ok(UserProfile::empty_profile(&normalize_email(email)))
        }
        Err(e) => Err(e),
    }
}

pub async fn save_profile(
    api: &ApiClient,
    email: &str,
    update: &ProfileUpdate,
) -> Result<UserProfile, AppError> {
    if update.missing_field().is_some() {
        return Err(AppError::Validation(
            "Email, имя и район обязательны".to_string(),
        ));
    }
    let body = serde_json::to_value(update).map_err(|e| AppError::Other(e.to_string()))?;
    let answer: UserAnswer = api
        .request_json(
            reqwest::Method::PUT,
            &user_path(email, "/profile"),
            RequestBody::Json(body),
        )
        .await?;
    log::info!("Profile of {} saved", email);
    Ok(answer.into_profile())
}

/// Adds photos to the user's submission
pub async fn upload_photos(
    api: &ApiClient,
    email: &str,
    photos: Vec<UploadFile>,
) -> Result<UserProfile, AppError> {
    if photos.is_empty() {
        return Err(AppError::Validation("Добавьте хотя бы одно фото".to_string()));
    }
    let count = photos.len();
    let form = append_files(Form::new(), "photos", photos);
    let answer: UserAnswer = api.post_form(&user_path(email, "/photos"), form).await?;
    log::info!("Uploaded {} photo(s) for {}", count, email);
    Ok(answer.into_profile())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_paths() {
        assert_eq!(user_path(" A@B.ru ", ""), "/api/users/a%40b.ru");
        assert_eq!(
            user_path("a@b.ru", "/profile"),
            "/api/users/a%40b.ru/profile"
        );
    }
}
