use crate::models::{AdminCredentials, SessionInfo};

/// Fallback message when the server gives no reason
pub const GENERIC_ERROR: &str = "Ошибка запроса";

/// Error type for authentication operations
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    NetworkError(String),
    JsonError(String),
    /// Non-2xx response; carries the server's `error` text
    ServerError { status: u16, message: String },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            AuthError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            AuthError::ServerError { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for AuthError {}

impl AuthError {
    /// Text suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            AuthError::ServerError { message, .. } => message.clone(),
            AuthError::NetworkError(msg) | AuthError::JsonError(msg) => msg.clone(),
        }
    }
}

/// Turns a status code and raw body into a result, reading `error` from JSON bodies
fn check_response(status: u16, body: &str) -> Result<serde_json::Value, AuthError> {
    let value: serde_json::Value =
        serde_json::from_str(body).unwrap_or_else(|_| serde_json::json!({}));

    if !(200..300).contains(&status) {
        let message = value
            .get("error")
            .and_then(|e| e.as_str())
            .filter(|e| !e.is_empty())
            .unwrap_or(GENERIC_ERROR)
            .to_string();
        return Err(AuthError::ServerError { status, message });
    }

    Ok(value)
}

/// Admin authentication service
#[derive(Clone)]
pub struct AdminAuthService {
    base_url: String,
    client: reqwest::Client,
}

impl AdminAuthService {
    /// Create a new authentication service for the given API origin
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<serde_json::Value, AuthError> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AuthError::NetworkError(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::NetworkError(format!("Reading response failed: {}", e)))?;

        check_response(status, &body)
    }

    /// Whether the current browser session already is an admin session
    pub async fn check_session(&self) -> Result<SessionInfo, AuthError> {
        let value = self
            .send(self.client.get(self.url("/api/admin/session")))
            .await?;
        let session = serde_json::from_value::<SessionInfo>(value)
            .map_err(|e| AuthError::JsonError(format!("Failed to parse session: {}", e)))?;
        log::debug!("Admin session active: {}", session.is_admin);
        Ok(session)
    }

    /// Logs in; any 2xx answer counts as success
    pub async fn login(&self, credentials: &AdminCredentials) -> Result<(), AuthError> {
        self.send(
            self.client
                .post(self.url("/api/admin/login"))
                .json(credentials),
        )
        .await?;
        log::info!("Admin login accepted for {}", credentials.username);
        Ok(())
    }

    /// Ends the admin session
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.send(self.client.post(self.url("/api/admin/logout")))
            .await?;
        log::info!("Admin logged out");
        Ok(())
    }
}
