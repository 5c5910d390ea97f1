use crate::components::file_picker::{FilePicker, PickedPhotos};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::services::submission_service::{self, NewSubmission};
use crate::services::ApiClient;
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

/// Result of sending the form: the new id for the success panel, or the error banner text
#[derive(Debug, Clone, PartialEq)]
enum SendOutcome {
    Created(String),
    Failed(String),
}

impl SendOutcome {
    fn from_result(result: Result<String, AppError>) -> Self {
        match result {
            Ok(id) => SendOutcome::Created(id),
            Err(e) => SendOutcome::Failed(e.user_message()),
        }
    }
}

#[component]
pub fn SubmitFormScreen(on_navigate: EventHandler<Screen>) -> Element {
    let api = use_context::<ApiClient>();
    let config = use_context::<AppConfig>();

    let mut name = use_signal(String::new);
    let mut district = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut comment = use_signal(String::new);
    let mut picked = use_signal(PickedPhotos::default);
    let mut picker_key = use_signal(|| 0u32);

    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut created_id = use_signal(|| None::<String>);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        if submitting() {
            return;
        }

        let submission = NewSubmission::new(&name(), &district(), &email(), &phone(), &comment());
        if let Some(key) = submission.problem(picked.read().files.len()) {
            log::debug!("Submission form incomplete: {}", key);
            error.set(Some(t!(key)));
            return;
        }

        // the picked files stay in place so a failed send can be retried
        let photos = picked.read().files.clone();
        let api = api.clone();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            let result = submission_service::submit(&api, submission, photos).await;
            match SendOutcome::from_result(result) {
                SendOutcome::Created(id) => created_id.set(Some(id)),
                SendOutcome::Failed(message) => error.set(Some(message)),
            }
            submitting.set(false);
        });
    };

    let reset_form = move |_| {
        name.set(String::new());
        district.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        comment.set(String::new());
        picked.set(PickedPhotos::default());
        picker_key.with_mut(|k| *k += 1);
        error.set(None);
        created_id.set(None);
    };

    if let Some(id) = created_id() {
        return rsx! {
            div { class: "card success-panel",
                h2 { {t!("submit-success-title")} }
                p { {t!("submit-success-id", id: id)} }
                p { class: "muted", {t!("submit-success-hint")} }
                div { style: "display: flex; gap: 8px;",
                    button { class: "btn-primary", onclick: reset_form, {t!("submit-another")} }
                    button {
                        class: "btn-secondary",
                        onclick: move |_| on_navigate.call(Screen::Status),
                        {t!("nav-status")}
                    }
                }
            }
        };
    }

    rsx! {
        div { class: "card",
            h2 { {t!("submit-title")} }
            form { onsubmit: handle_submit,
                div { class: "form-group",
                    label { {t!("field-name")} }
                    input {
                        r#type: "text",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { {t!("field-district")} }
                    input {
                        r#type: "text",
                        value: "{district}",
                        oninput: move |e| district.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { {t!("field-email")} }
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { {t!("field-phone")} }
                    input {
                        r#type: "tel",
                        value: "{phone}",
                        oninput: move |e| phone.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { {t!("field-comment")} }
                    textarea {
                        rows: 3,
                        value: "{comment}",
                        oninput: move |e| comment.set(e.value()),
                    }
                }

                div { class: "form-group",
                    label { {t!("field-photos")} }
                    // re-keyed after "submit another" so the picker starts empty
                    {std::iter::once(picker_key()).map(|k| rsx! {
                        FilePicker {
                            key: "{k}",
                            rules: config.intake,
                            disabled: submitting(),
                            on_change: move |p: PickedPhotos| picked.set(p),
                        }
                    })}
                }

                if let Some(message) = error() {
                    div { class: "error-banner", "❌ {message}" }
                }

                button {
                    class: "btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() {
                        {t!("submit-sending")}
                    } else {
                        {t!("submit-button")}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubmissionCreated;
    use crate::services::api::decode_response;

    fn send(status: u16, body: &str) -> SendOutcome {
        let result = decode_response::<SubmissionCreated>(status, body.as_bytes())
            .map(|created| created.submission_id);
        SendOutcome::from_result(result)
    }

    #[test]
    fn test_created_submission_shows_its_id() {
        assert_eq!(
            send(200, r#"{"ok": true, "submissionId": 17}"#),
            SendOutcome::Created("17".to_string())
        );
    }

    #[test]
    fn test_rejected_submission_shows_server_text() {
        assert_eq!(
            send(400, r#"{"ok": false, "error": "Добавьте хотя бы одно фото"}"#),
            SendOutcome::Failed("Добавьте хотя бы одно фото".to_string())
        );
    }
}
