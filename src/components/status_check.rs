use crate::components::badges::{PhotoStatusBadge, SubmissionStatusBadge};
use crate::components::originals::{OriginalsList, OriginalsTarget, OriginalsUpload};
use crate::error::AppError;
use crate::markup::multiline_html;
use crate::models::{Photo, Submission};
use crate::services::{submission_service, ApiClient, RequestSequence};
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;
use photo_viewer::{use_photo_viewer, PhotoModal, ViewerState};

/// What the result area shows after a lookup
#[derive(Debug, Clone, PartialEq, Default)]
enum LookupOutcome {
    #[default]
    NotSearched,
    /// The address has no submissions
    Empty,
    Found(Vec<Submission>),
    Failed(String),
}

impl LookupOutcome {
    fn from_result(result: Result<Vec<Submission>, AppError>) -> Self {
        match result {
            Ok(list) if list.is_empty() => LookupOutcome::Empty,
            Ok(list) => LookupOutcome::Found(list),
            Err(e) => LookupOutcome::Failed(e.user_message()),
        }
    }
}

#[component]
pub fn StatusCheckScreen(on_navigate: EventHandler<Screen>) -> Element {
    let api = use_context::<ApiClient>();
    let viewer = use_photo_viewer();

    let mut email_input = use_signal(String::new);
    let mut searched = use_signal(String::new);
    let mut outcome = use_signal(LookupOutcome::default);
    let mut loading = use_signal(|| false);
    let mut sequence = use_signal(RequestSequence::new);

    let lookup = use_callback(move |email: String| {
        let api = api.clone();
        let ticket = sequence.write().begin();
        loading.set(true);
        spawn(async move {
            let result = submission_service::find_by_email(&api, &email).await;
            if !sequence.peek().is_current(ticket) {
                return;
            }
            if result.is_ok() {
                searched.set(email);
            }
            outcome.set(LookupOutcome::from_result(result));
            loading.set(false);
        });
    });

    rsx! {
        div { class: "card",
            h2 { {t!("status-title")} }
            form {
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    lookup.call(email_input());
                },
                div { class: "form-group",
                    label { {t!("field-email")} }
                    input {
                        r#type: "email",
                        value: "{email_input}",
                        oninput: move |e| email_input.set(e.value()),
                    }
                }
                button {
                    class: "btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() {
                        {t!("status-searching")}
                    } else {
                        {t!("status-search")}
                    }
                }
            }

            match outcome() {
                LookupOutcome::NotSearched => rsx! {},
                LookupOutcome::Failed(message) => rsx! {
                    div { class: "error-banner", "❌ {message}" }
                },
                LookupOutcome::Empty => rsx! {
                    div { class: "empty-state", {t!("status-empty")} }
                },
                LookupOutcome::Found(list) => rsx! {
                    for submission in list {
                        SubmissionCard {
                            key: "{submission.id}",
                            submission: submission.clone(),
                            viewer,
                            on_navigate,
                            on_changed: move |_| lookup.call(searched()),
                        }
                    }
                },
            }
        }

        PhotoModal { viewer }
    }
}

#[component]
fn SubmissionCard(
    submission: Submission,
    viewer: Signal<ViewerState>,
    on_navigate: EventHandler<Screen>,
    on_changed: EventHandler<()>,
) -> Element {
    let email = submission.email.clone();
    let live: Vec<Photo> = submission.live_photos().cloned().collect();

    rsx! {
        div { class: "submission-card",
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                div {
                    strong { {t!("submission-id", id: submission.id.to_string())} }
                    span { class: "muted", " · {submission.created_at}" }
                }
                SubmissionStatusBadge { status: submission.status }
            }

            if !submission.admin_comment.is_empty() {
                div { class: "review-comment",
                    strong { {t!("review-comment")} }
                    div { dangerous_inner_html: multiline_html(&submission.admin_comment) }
                }
            }

            div { class: "photo-grid",
                for photo in live {
                    StatusPhoto {
                        key: "{photo.id}",
                        photo: photo.clone(),
                        viewer,
                        on_changed,
                    }
                }
            }

            if submission.awaits_submission_originals() {
                div { class: "originals-block",
                    p { class: "muted", {t!("originals-submission-hint")} }
                    OriginalsUpload {
                        target: OriginalsTarget::Submission(submission.id),
                        on_done: move |_| on_changed.call(()),
                    }
                }
            }
            OriginalsList { originals: submission.originals.clone() }

            button {
                class: "btn-link",
                onclick: move |_| on_navigate.call(Screen::Cabinet(Some(email.clone()))),
                {t!("status-open-cabinet")}
            }
        }
    }
}

#[component]
fn StatusPhoto(photo: Photo, mut viewer: Signal<ViewerState>, on_changed: EventHandler<()>) -> Element {
    let api = use_context::<ApiClient>();
    let full_url = api.asset_url(&photo.url);
    let thumb_url = api.asset_url(photo.display_url());

    rsx! {
        div { class: "photo-card",
            img {
                src: "{thumb_url}",
                alt: "{photo.name}",
                onclick: move |_| viewer.write().open(&full_url),
            }
            PhotoStatusBadge { status: photo.status }
            if !photo.comment.is_empty() {
                div { class: "photo-comment", dangerous_inner_html: multiline_html(&photo.comment) }
            }
            if photo.awaits_originals() {
                OriginalsUpload {
                    target: OriginalsTarget::Photo(photo.id),
                    on_done: move |_| on_changed.call(()),
                }
            }
            OriginalsList { originals: photo.originals.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::decode_response;

    #[test]
    fn test_empty_answer_shows_empty_state() {
        let result = decode_response::<Vec<Submission>>(200, b"[]");
        assert_eq!(LookupOutcome::from_result(result), LookupOutcome::Empty);
    }

    #[test]
    fn test_found_submissions_are_listed() {
        let body = br#"[{"id": 3, "email": "a@b.ru", "status": "pending", "photos": []}]"#;
        match LookupOutcome::from_result(decode_response(200, body)) {
            LookupOutcome::Found(list) => {
                assert_eq!(list.len(), 1);
                assert_eq!(list[0].id, 3);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_failed_lookup_keeps_server_message() {
        let result = decode_response::<Vec<Submission>>(400, r#"{"error": "Введите email"}"#.as_bytes());
        assert_eq!(
            LookupOutcome::from_result(result),
            LookupOutcome::Failed("Введите email".to_string())
        );
    }
}
