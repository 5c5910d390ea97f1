use crate::models::{AdminCredentials, LoginState};
use crate::service::AdminAuthService;
use dioxus::prelude::*;

/// Custom labels for the login dialog
#[derive(Clone, PartialEq)]
pub struct LoginLabels {
    pub title: String,
    pub username: String,
    pub password: String,
    pub submit: String,
    pub submitting: String,
    pub cancel: String,
    pub missing_fields: String,
    pub success: String,
}

impl Default for LoginLabels {
    fn default() -> Self {
        Self {
            title: "🔐 Вход администратора".to_string(),
            username: "Логин".to_string(),
            password: "Пароль".to_string(),
            submit: "Войти".to_string(),
            submitting: "⏳ Вход...".to_string(),
            cancel: "Отмена".to_string(),
            missing_fields: "Введите логин и пароль".to_string(),
            success: "✅ Вход выполнен".to_string(),
        }
    }
}

/// Admin login dialog
///
/// Collects username and password in a form instead of browser prompts and
/// posts them to the login endpoint. `on_success` fires once per accepted
/// login; the dialog never re-prompts on its own.
///
/// # Example
/// ```rust,ignore
/// AdminLoginDialog {
///     base_url: config.api_base.clone(),
///     on_success: move |_| admin_gate.set(true),
///     on_cancel: move |_| on_navigate.call(Screen::Submit),
/// }
/// ```
#[component]
pub fn AdminLoginDialog(
    /// API origin the login request goes to
    base_url: String,
    /// Called after the server accepted the credentials
    on_success: EventHandler<()>,
    /// Called when the user dismisses the dialog
    #[props(default)]
    on_cancel: Option<EventHandler<()>>,
    /// Custom labels (optional)
    #[props(default)]
    labels: Option<LoginLabels>,
) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut login_state = use_signal(|| LoginState::Idle);

    let labels = labels.unwrap_or_default();
    let missing_fields = labels.missing_fields.clone();

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if login_state() == LoginState::Submitting {
            return;
        }

        let credentials = AdminCredentials::new(username(), password());
        if !credentials.is_complete() {
            login_state.set(LoginState::Error(missing_fields.clone()));
            return;
        }

        login_state.set(LoginState::Submitting);
        let service = AdminAuthService::new(base_url.clone());
        spawn(async move {
            match service.login(&credentials).await {
                Ok(()) => {
                    password.set(String::new());
                    login_state.set(LoginState::Success);
                    on_success.call(());
                }
                Err(e) => {
                    log::warn!("Admin login failed: {}", e);
                    login_state.set(LoginState::Error(e.user_message()));
                }
            }
        });
    };

    let submitting = login_state() == LoginState::Submitting;

    rsx! {
        div { class: "card admin-login",
            style: "max-width: 360px; margin: 32px auto;",
            h3 { style: "margin: 0 0 16px 0;", "{labels.title}" }

            form { onsubmit: submit,
                div { class: "form-group",
                    label { r#for: "admin-username", "{labels.username}" }
                    input {
                        id: "admin-username",
                        r#type: "text",
                        autocomplete: "username",
                        value: "{username}",
                        disabled: submitting,
                        oninput: move |e| username.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { r#for: "admin-password", "{labels.password}" }
                    input {
                        id: "admin-password",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: "{password}",
                        disabled: submitting,
                        oninput: move |e| password.set(e.value()),
                    }
                }

                match login_state() {
                    LoginState::Error(error) => rsx! {
                        div { class: "error-banner", "❌ {error}" }
                    },
                    LoginState::Success => rsx! {
                        div { class: "success-banner", "{labels.success}" }
                    },
                    _ => rsx! {},
                }

                div { style: "display: flex; gap: 8px; margin-top: 12px;",
                    button {
                        class: "btn-primary",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting {
                            "{labels.submitting}"
                        } else {
                            "{labels.submit}"
                        }
                    }
                    if let Some(handler) = on_cancel {
                        button {
                            class: "btn-secondary",
                            r#type: "button",
                            onclick: move |_| handler.call(()),
                            "{labels.cancel}"
                        }
                    }
                }
            }
        }
    }
}
