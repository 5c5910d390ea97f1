use super::submission::Submission;
use serde::{Deserialize, Serialize};

/// The cabinet works on the same payload the status lookup returns
pub type UserProfile = Submission;

impl Submission {
    /// Snapshot shown for an e-mail the server does not know yet
    pub fn empty_profile(email: &str) -> Self {
        Submission {
            email: email.to_string(),
            ..Default::default()
        }
    }

    /// Whether the server knows anything about this user
    pub fn is_registered(&self) -> bool {
        self.id != 0 || !self.name.is_empty() || !self.photos.is_empty()
    }
}

/// `{ "user": ... }` answers of the cabinet endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserEnvelope {
    pub user: UserProfile,
}

/// The lookup endpoint answers with the bare profile, mutations wrap it
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UserAnswer {
    Wrapped(UserEnvelope),
    Bare(UserProfile),
}

impl UserAnswer {
    pub fn into_profile(self) -> UserProfile {
        match self {
            UserAnswer::Wrapped(envelope) => envelope.user,
            UserAnswer::Bare(profile) => profile,
        }
    }
}

/// Body of the profile update
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub district: String,
    pub phone: String,
    pub comment: String,
}

impl ProfileUpdate {
    /// Collects the form fields, trimmed
    pub fn new(name: &str, district: &str, phone: &str, comment: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            district: district.trim().to_string(),
            phone: phone.trim().to_string(),
            comment: comment.trim().to_string(),
        }
    }

    /// Prefills the form from a loaded profile
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self::new(
            &profile.name,
            &profile.district,
            &profile.phone,
            &profile.comment,
        )
    }

    /// Fluent key of the first missing required field, if any
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.is_empty() {
            Some("error-name-required")
        } else if self.district.is_empty() {
            Some("error-district-required")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_is_trimmed() {
        let update = ProfileUpdate::new("  Анна ", "Центральный\n", "", "  ");
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"name": "Анна", "district": "Центральный", "phone": "", "comment": ""})
        );
        assert_eq!(update.missing_field(), None);
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            ProfileUpdate::new(" ", "x", "", "").missing_field(),
            Some("error-name-required")
        );
        assert_eq!(
            ProfileUpdate::new("Анна", "", "", "").missing_field(),
            Some("error-district-required")
        );
    }

    #[test]
    fn test_empty_profile() {
        let profile = UserProfile::empty_profile("new@example.com");
        assert_eq!(profile.email, "new@example.com");
        assert!(profile.photos.is_empty());
        assert!(!profile.is_registered());
    }

    #[test]
    fn test_user_envelope() {
        let envelope: UserEnvelope = serde_json::from_value(json!({
            "ok": true,
            "user": {"id": 3, "name": "Анна", "email": "a@b.ru", "photos": []}
        }))
        .unwrap();
        assert!(envelope.user.is_registered());
        assert_eq!(envelope.user.district, "");
    }

    #[test]
    fn test_bare_and_wrapped_answers() {
        let wrapped: UserAnswer = serde_json::from_value(json!({
            "ok": true,
            "user": {"id": 3, "email": "a@b.ru"}
        }))
        .unwrap();
        assert_eq!(wrapped.into_profile().id, 3);

        let bare: UserAnswer =
            serde_json::from_value(json!({"id": 4, "email": "c@d.ru", "photos": []})).unwrap();
        let profile = bare.into_profile();
        assert_eq!(profile.id, 4);
        assert_eq!(profile.email, "c@d.ru");
    }
}
