use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// What a logged action was about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionType {
    SubmissionCreated,
    SubmissionUpdated,
    ProfileCreated,
    ProfileUpdated,
    PhotosUploaded,
    PhotoOriginalUploaded,
    PhotoOriginalDeleted,
    PhotoDeleted,
    PhotoPurged,
    /// Tag this client does not know; shown as-is
    Other(String),
}

impl ActionType {
    pub fn as_str(&self) -> &str {
        match self {
            ActionType::SubmissionCreated => "submission_created",
            ActionType::SubmissionUpdated => "submission_updated",
            ActionType::ProfileCreated => "profile_created",
            ActionType::ProfileUpdated => "profile_updated",
            ActionType::PhotosUploaded => "photos_uploaded",
            ActionType::PhotoOriginalUploaded => "photo_original_uploaded",
            ActionType::PhotoOriginalDeleted => "photo_original_deleted",
            ActionType::PhotoDeleted => "photo_deleted",
            ActionType::PhotoPurged => "photo_purged",
            ActionType::Other(tag) => tag,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "submission_created" => ActionType::SubmissionCreated,
            "submission_updated" => ActionType::SubmissionUpdated,
            "profile_created" => ActionType::ProfileCreated,
            "profile_updated" => ActionType::ProfileUpdated,
            "photos_uploaded" => ActionType::PhotosUploaded,
            "photo_original_uploaded" => ActionType::PhotoOriginalUploaded,
            "photo_original_deleted" => ActionType::PhotoOriginalDeleted,
            "photo_deleted" => ActionType::PhotoDeleted,
            "photo_purged" => ActionType::PhotoPurged,
            other => ActionType::Other(other.to_string()),
        }
    }

    /// Fluent key of the label; `None` for unknown tags
    pub fn label_key(&self) -> Option<&'static str> {
        match self {
            ActionType::SubmissionCreated => Some("action-submission-created"),
            ActionType::SubmissionUpdated => Some("action-submission-updated"),
            ActionType::ProfileCreated => Some("action-profile-created"),
            ActionType::ProfileUpdated => Some("action-profile-updated"),
            ActionType::PhotosUploaded => Some("action-photos-uploaded"),
            ActionType::PhotoOriginalUploaded => Some("action-photo-original-uploaded"),
            ActionType::PhotoOriginalDeleted => Some("action-photo-original-deleted"),
            ActionType::PhotoDeleted => Some("action-photo-deleted"),
            ActionType::PhotoPurged => Some("action-photo-purged"),
            ActionType::Other(_) => None,
        }
    }
}

impl From<String> for ActionType {
    fn from(s: String) -> Self {
        ActionType::from_str(&s)
    }
}

impl From<ActionType> for String {
    fn from(action: ActionType) -> Self {
        action.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub district: String,
    pub action_type: ActionType,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl ActivityItem {
    /// Name if known, otherwise the e-mail
    pub fn actor(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Time in the server's offset, `dd.mm.yyyy hh:mm`; unparsable values as-is
    pub fn display_time(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Answer of the activity endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActivityFeed {
    #[serde(default)]
    pub items: Vec<ActivityItem>,
    #[serde(default)]
    pub districts: Vec<String>,
}

/// Filters of the activity log; empty means "any"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityQuery {
    /// `YYYY-MM-DD`
    pub day: String,
    pub district: String,
}

impl ActivityQuery {
    /// Query string including the leading `?`, or empty when nothing is set
    pub fn to_query_string(&self) -> String {
        let params: Vec<String> = [("day", &self.day), ("district", &self.district)]
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value.trim())))
            .collect();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Dropdown options for the district filter.
///
/// The current selection stays selectable even when the server no longer
/// lists it.
pub fn merge_district_options(districts: &[String], selected: &str) -> Vec<String> {
    let mut options: Vec<String> = Vec::with_capacity(districts.len() + 1);
    for district in districts {
        if !district.is_empty() && !options.contains(district) {
            options.push(district.clone());
        }
    }
    if !selected.is_empty() && !options.iter().any(|d| d == selected) {
        options.push(selected.to_string());
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_feed() {
        let feed: ActivityFeed = serde_json::from_value(json!({
            "items": [{
                "id": 5,
                "email": "a@b.ru",
                "name": "",
                "district": "Северный",
                "actionType": "photo_deleted",
                "details": "Фото #12",
                "createdAt": "2025-03-04T09:05:00+03:00",
                "profileUrl": "/user/a%40b.ru",
                "photoUrl": null
            }, {
                "id": 4,
                "email": "c@d.ru",
                "actionType": "something_new",
                "createdAt": "yesterday"
            }],
            "districts": ["Северный"]
        }))
        .unwrap();

        assert_eq!(feed.items.len(), 2);
        let first = &feed.items[0];
        assert_eq!(first.action_type, ActionType::PhotoDeleted);
        assert_eq!(first.actor(), "a@b.ru");
        assert_eq!(first.display_time(), "04.03.2025 09:05");
        assert_eq!(first.photo_url, None);

        let second = &feed.items[1];
        assert_eq!(second.action_type, ActionType::Other("something_new".to_string()));
        assert_eq!(second.action_type.label_key(), None);
        assert_eq!(second.display_time(), "yesterday");
    }

    #[test]
    fn test_known_action_labels() {
        for tag in [
            "submission_created",
            "submission_updated",
            "profile_created",
            "profile_updated",
            "photos_uploaded",
            "photo_original_uploaded",
            "photo_original_deleted",
            "photo_deleted",
            "photo_purged",
        ] {
            let action = ActionType::from_str(tag);
            assert!(action.label_key().is_some(), "{} has no label", tag);
            assert_eq!(action.as_str(), tag);
        }
    }

    #[test]
    fn test_query_string() {
        assert_eq!(ActivityQuery::default().to_query_string(), "");
        let query = ActivityQuery {
            day: "2025-03-04".to_string(),
            district: String::new(),
        };
        assert_eq!(query.to_query_string(), "?day=2025-03-04");
        let query = ActivityQuery {
            day: "2025-03-04".to_string(),
            district: "Юг & Запад".to_string(),
        };
        assert_eq!(
            query.to_query_string(),
            "?day=2025-03-04&district=%D0%AE%D0%B3%20%26%20%D0%97%D0%B0%D0%BF%D0%B0%D0%B4"
        );
    }

    #[test]
    fn test_selected_district_is_kept() {
        let districts = vec!["Север".to_string(), "Юг".to_string()];
        assert_eq!(merge_district_options(&districts, "Юг"), districts);
        assert_eq!(
            merge_district_options(&districts, "Восток"),
            vec!["Север", "Юг", "Восток"]
        );
        assert_eq!(merge_district_options(&[], ""), Vec::<String>::new());
    }
}
