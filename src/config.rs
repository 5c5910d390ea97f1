use crate::services::admin_service::StatusFilter;
use photo_intake::IntakeRules;

/// Used when neither a build-time override nor a page origin is available
pub const FALLBACK_API_BASE: &str = "http://localhost:5000";

/// Runtime settings shared with all screens through the Dioxus context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin the `/api/...` paths are appended to, without trailing slash
    pub api_base: String,
    /// Bucket the admin list opens with
    pub default_filter: StatusFilter,
    /// Thresholds for the client-side photo checks
    pub intake: IntakeRules,
}

impl AppConfig {
    /// Builds the configuration from build-time variables and the current page
    pub fn load() -> Self {
        let api_base = resolve_api_base(option_env!("PHOTO_REVIEW_API_BASE"), page_origin());
        let default_filter = option_env!("PHOTO_REVIEW_ADMIN_FILTER")
            .and_then(StatusFilter::from_str)
            .unwrap_or_default();

        log::info!(
            "API base: {}, admin filter: {}",
            api_base,
            default_filter.as_str()
        );

        Self {
            api_base,
            default_filter,
            intake: IntakeRules::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: FALLBACK_API_BASE.to_string(),
            default_filter: StatusFilter::default(),
            intake: IntakeRules::default(),
        }
    }
}

/// Picks the API base: explicit override, then page origin, then the local dev server
pub fn resolve_api_base(configured: Option<&str>, origin: Option<String>) -> String {
    let chosen = configured
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| origin.filter(|o| o.starts_with("http")))
        .unwrap_or_else(|| FALLBACK_API_BASE.to_string());

    chosen.trim_end_matches('/').to_string()
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let base = resolve_api_base(
            Some("https://review.example.org/"),
            Some("http://localhost:8080".to_string()),
        );
        assert_eq!(base, "https://review.example.org");
    }

    #[test]
    fn test_page_origin_used_without_override() {
        let base = resolve_api_base(Some("  "), Some("http://127.0.0.1:8080".to_string()));
        assert_eq!(base, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(resolve_api_base(None, None), FALLBACK_API_BASE);
        // file:// pages have an opaque "null" origin
        assert_eq!(
            resolve_api_base(None, Some("null".to_string())),
            FALLBACK_API_BASE
        );
    }
}
