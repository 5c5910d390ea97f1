use serde::{Deserialize, Serialize};

/// Response of the session endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    #[serde(default)]
    pub is_admin: bool,
}

/// Username and password sent to the login endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields filled in; incomplete credentials are never sent
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// State of the login dialog
#[derive(Debug, Clone, PartialEq)]
pub enum LoginState {
    /// Waiting for input
    Idle,
    /// Request in flight
    Submitting,
    /// Login accepted
    Success,
    /// Login failed with error message
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_flag() {
        let session: SessionInfo = serde_json::from_str(r#"{"isAdmin": true}"#).unwrap();
        assert!(session.is_admin);

        let session: SessionInfo = serde_json::from_str("{}").unwrap();
        assert!(!session.is_admin);
    }

    #[test]
    fn test_credentials_payload() {
        let creds = AdminCredentials::new("admin", "pw");
        let value = serde_json::to_value(&creds).unwrap();
        assert_eq!(value, serde_json::json!({"username": "admin", "password": "pw"}));
    }

    #[test]
    fn test_incomplete_credentials() {
        assert!(!AdminCredentials::new("", "pw").is_complete());
        assert!(!AdminCredentials::new("admin", "").is_complete());
        assert!(AdminCredentials::new("admin", "pw").is_complete());
    }
}
