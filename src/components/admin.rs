use crate::components::activity_log::ActivityLog;
use crate::components::admin_list::AdminList;
use crate::config::AppConfig;
use crate::Screen;
use admin_auth::{AdminAuthService, AdminLoginDialog, AuthError, LoginLabels, SessionInfo};
use dioxus::prelude::*;
use dioxus_i18n::t;

/// Access to the admin screen for this page load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminGate {
    /// Session check still running
    Checking,
    Locked,
    Unlocked,
}

impl AdminGate {
    /// Gate once the start-up session check answered.
    ///
    /// Only a gate that is still `Checking` takes the answer, so a login
    /// that finished first keeps the gate open.
    pub fn after_session_check(self, result: Result<SessionInfo, AuthError>) -> Self {
        if self != AdminGate::Checking {
            return self;
        }
        match result {
            Ok(session) if session.is_admin => AdminGate::Unlocked,
            Ok(_) => AdminGate::Locked,
            Err(e) => {
                log::warn!("Admin session check failed: {}", e);
                AdminGate::Locked
            }
        }
    }

    pub fn after_login(self) -> Self {
        AdminGate::Unlocked
    }

    pub fn after_logout(self) -> Self {
        AdminGate::Locked
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Submissions,
    Activity,
}

fn login_labels() -> LoginLabels {
    LoginLabels {
        title: t!("login-title"),
        username: t!("login-username"),
        password: t!("login-password"),
        submit: t!("login-submit"),
        submitting: t!("login-submitting"),
        cancel: t!("action-cancel"),
        missing_fields: t!("login-missing-fields"),
        success: t!("login-success"),
    }
}

#[component]
pub fn AdminScreen(mut gate: Signal<AdminGate>, on_navigate: EventHandler<Screen>) -> Element {
    let config = use_context::<AppConfig>();

    match gate() {
        AdminGate::Checking => rsx! {
            div { class: "card muted", {t!("admin-checking")} }
        },
        AdminGate::Locked => rsx! {
            AdminLoginDialog {
                base_url: config.api_base.clone(),
                labels: login_labels(),
                on_success: move |_| {
                    let next = gate.peek().after_login();
                    gate.set(next);
                },
                on_cancel: move |_| on_navigate.call(Screen::Submit),
            }
        },
        AdminGate::Unlocked => rsx! {
            AdminPanel { gate, on_navigate }
        },
    }
}

#[component]
fn AdminPanel(mut gate: Signal<AdminGate>, on_navigate: EventHandler<Screen>) -> Element {
    let config = use_context::<AppConfig>();
    let mut tab = use_signal(|| AdminTab::Submissions);
    let mut error = use_signal(|| None::<String>);

    let api_base = config.api_base.clone();
    let logout = move |_| {
        let service = AdminAuthService::new(api_base.clone());
        spawn(async move {
            match service.logout().await {
                Ok(()) => {
                    let next = gate.peek().after_logout();
                    gate.set(next);
                    on_navigate.call(Screen::Submit);
                }
                Err(e) => {
                    log::warn!("Admin logout failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let tab_class = move |t: AdminTab| {
        if tab() == t {
            "tab-btn active"
        } else {
            "tab-btn"
        }
    };

    rsx! {
        div { class: "admin-panel",
            div { class: "admin-toolbar",
                button {
                    class: tab_class(AdminTab::Submissions),
                    onclick: move |_| tab.set(AdminTab::Submissions),
                    {t!("admin-tab-submissions")}
                }
                button {
                    class: tab_class(AdminTab::Activity),
                    onclick: move |_| tab.set(AdminTab::Activity),
                    {t!("admin-tab-activity")}
                }
                div { style: "flex: 1;" }
                button { class: "btn-secondary", onclick: logout, {t!("admin-logout")} }
            }
            if let Some(message) = error() {
                div { class: "error-banner", "❌ {message}" }
            }

            match tab() {
                AdminTab::Submissions => rsx! {
                    AdminList { default_filter: config.default_filter }
                },
                AdminTab::Activity => rsx! {
                    ActivityLog {}
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(is_admin: bool) -> Result<SessionInfo, AuthError> {
        Ok(SessionInfo { is_admin })
    }

    #[test]
    fn test_session_check_outcomes() {
        assert_eq!(
            AdminGate::Checking.after_session_check(session(true)),
            AdminGate::Unlocked
        );
        assert_eq!(
            AdminGate::Checking.after_session_check(session(false)),
            AdminGate::Locked
        );
        let offline = Err(AuthError::NetworkError("offline".to_string()));
        assert_eq!(AdminGate::Checking.after_session_check(offline), AdminGate::Locked);
    }

    #[test]
    fn test_login_after_locked_session_opens_once() {
        let gate = AdminGate::Checking.after_session_check(session(false));
        assert_eq!(gate, AdminGate::Locked);

        let gate = gate.after_login();
        assert_eq!(gate, AdminGate::Unlocked);

        // a late or repeated session answer never re-locks an open gate
        assert_eq!(gate.after_session_check(session(false)), AdminGate::Unlocked);
    }

    #[test]
    fn test_login_finishing_before_session_check_wins() {
        let gate = AdminGate::Checking.after_login();
        let gate = gate.after_session_check(session(false));
        assert_eq!(gate, AdminGate::Unlocked);
    }

    #[test]
    fn test_logout_locks() {
        assert_eq!(AdminGate::Unlocked.after_logout(), AdminGate::Locked);
    }
}
