use std::fmt;

/// Fallback text when the server does not explain a failure
pub const GENERIC_ERROR: &str = "Ошибка запроса";

/// Central error types for the photo review frontend
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Request never got an answer (offline, CORS, aborted)
    Network(String),
    /// Server answered with a non-2xx status
    Server { status: u16, message: String },
    /// A 2xx body did not have the expected shape
    Decode(String),
    /// Input rejected before any request was made
    Validation(String),
    /// Resource not found
    NotFound(String),
    /// General error
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            AppError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

impl From<admin_auth::AuthError> for AppError {
    fn from(e: admin_auth::AuthError) -> Self {
        match e {
            admin_auth::AuthError::ServerError { status, message } => {
                AppError::Server { status, message }
            }
            admin_auth::AuthError::NetworkError(msg) => AppError::Network(msg),
            admin_auth::AuthError::JsonError(msg) => AppError::Decode(msg),
        }
    }
}

/// User-facing error messages for the UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => "Нет связи с сервером. Попробуйте ещё раз.".to_string(),
            AppError::Server { message, .. } => message.clone(),
            AppError::Decode(_) => GENERIC_ERROR.to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(msg) => format!("{} не найден(о)", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_) | AppError::Server { status: 404, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_passes_through() {
        let err = AppError::Server {
            status: 400,
            message: "Email обязателен".to_string(),
        };
        assert_eq!(err.user_message(), "Email обязателен");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_detection() {
        let err = AppError::Server {
            status: 404,
            message: "Пользователь не найден".to_string(),
        };
        assert!(err.is_not_found());
        assert!(AppError::NotFound("Фото".to_string()).is_not_found());
    }

    #[test]
    fn test_auth_error_conversion() {
        let err: AppError = admin_auth::AuthError::ServerError {
            status: 401,
            message: "Неверный логин или пароль".to_string(),
        }
        .into();
        assert_eq!(err.user_message(), "Неверный логин или пароль");
    }
}
