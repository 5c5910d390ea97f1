use crate::error::{AppError, GENERIC_ERROR};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Request payload variants the backend understands
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Form),
}

/// Generic `{ "ok": true }` answer whose content is not needed
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub ok: bool,
}

/// A file read from the browser, ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl From<photo_intake::CandidateFile> for UploadFile {
    fn from(file: photo_intake::CandidateFile) -> Self {
        Self {
            name: file.name,
            bytes: file.bytes,
        }
    }
}

/// Thin wrapper around `reqwest` that knows the API origin and the error format
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Absolute URL for a file path the server returned (`/uploads/...`)
    pub fn asset_url(&self, path: &str) -> String {
        if path.is_empty() || path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            self.url(path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Sends one request and decodes the JSON answer into `T`
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<T, AppError> {
        log::debug!("{} {}", method, path);

        let mut request = self
            .http
            .request(method.clone(), self.url(path))
            .header("Accept", "application/json");
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        let response = request.send().await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, path, e);
            AppError::from(e)
        })?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        let result = decode_response(status, &bytes);
        if let Err(e) = &result {
            log::warn!("{} {} -> {}", method, path, e);
        }
        result
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request_json(Method::GET, path, RequestBody::Empty).await
    }

    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, AppError> {
        self.request_json(Method::POST, path, RequestBody::Json(body))
            .await
    }

    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T, AppError> {
        self.request_json(Method::POST, path, RequestBody::Multipart(form))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request_json(Method::DELETE, path, RequestBody::Empty)
            .await
    }
}

/// Turns status and body into the decoded payload or an [`AppError`].
///
/// Bodies that are not JSON count as `{}`. Failing statuses carry the body's
/// `error` text, or the generic message when there is none.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, AppError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).unwrap_or_else(|_| serde_json::json!({}));

    if !(200..300).contains(&status) {
        let message = value
            .get("error")
            .and_then(|e| e.as_str())
            .filter(|e| !e.trim().is_empty())
            .unwrap_or(GENERIC_ERROR)
            .to_string();
        return Err(AppError::Server { status, message });
    }

    serde_json::from_value(value).map_err(|e| AppError::Decode(e.to_string()))
}

/// Percent-encoded e-mail for use as a path segment
pub fn email_segment(email: &str) -> String {
    urlencoding::encode(email).into_owned()
}

/// Adds every file as a part named `field`; the bytes move into the form
pub fn append_files(mut form: Form, field: &str, files: Vec<UploadFile>) -> Form {
    for file in files {
        let part = Part::bytes(file.bytes).file_name(file.name);
        form = form.part(field.to_string(), part);
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubmissionEnvelope;

    #[test]
    fn test_error_text_from_body() {
        let err = decode_response::<Ack>(400, r#"{"error": "Добавьте хотя бы одно фото"}"#.as_bytes())
            .unwrap_err();
        assert_eq!(
            err,
            AppError::Server {
                status: 400,
                message: "Добавьте хотя бы одно фото".to_string()
            }
        );
    }

    #[test]
    fn test_non_json_error_body_uses_fallback() {
        let err = decode_response::<Ack>(502, b"<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.user_message(), GENERIC_ERROR);

        let err = decode_response::<Ack>(500, br#"{"error": ""}"#).unwrap_err();
        assert_eq!(err.user_message(), GENERIC_ERROR);
    }

    #[test]
    fn test_success_without_body() {
        let ack: Ack = decode_response(204, b"").unwrap();
        assert!(!ack.ok);
        let ack: Ack = decode_response(200, br#"{"ok": true}"#).unwrap();
        assert!(ack.ok);
    }

    #[test]
    fn test_unexpected_success_shape() {
        let err = decode_response::<SubmissionEnvelope>(200, br#"{"ok": true}"#).unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn test_append_files_moves_the_batch() {
        let files = vec![
            UploadFile {
                name: "a.jpg".to_string(),
                bytes: vec![0xFF; 1024],
            },
            UploadFile {
                name: "b.jpg".to_string(),
                bytes: vec![0xD8; 2048],
            },
        ];
        let form = append_files(Form::new(), "photos", files);
        assert!(!form.boundary().is_empty());
    }

    #[test]
    fn test_url_building() {
        let api = ApiClient::new("http://localhost:5000/");
        assert_eq!(api.url("/api/admin/session"), "http://localhost:5000/api/admin/session");
        assert_eq!(email_segment("a+b@x.ru"), "a%2Bb%40x.ru");
        assert_eq!(api.asset_url("/uploads/a.jpg"), "http://localhost:5000/uploads/a.jpg");
        assert_eq!(api.asset_url("uploads/a.jpg"), "http://localhost:5000/uploads/a.jpg");
        assert_eq!(api.asset_url("https://cdn.example.org/a.jpg"), "https://cdn.example.org/a.jpg");
    }
}
