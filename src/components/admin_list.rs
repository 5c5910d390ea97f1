use crate::components::badges::{PhotoStatusBadge, SubmissionStatusBadge};
use crate::components::confirm_button::ConfirmButton;
use crate::components::originals::OriginalsList;
use crate::error::AppError;
use crate::markup::multiline_html;
use crate::models::{Photo, PhotoStatus, Submission, SubmissionStatus};
use crate::services::admin_service::{
    self, available_actions, count_photos, filter_submissions, PhotoAction, StatusFilter,
};
use crate::services::photo_service::PhotoOp;
use crate::services::{ApiClient, RequestSequence};
use dioxus::prelude::*;
use dioxus_i18n::t;
use photo_viewer::{use_photo_viewer, PhotoModal, ViewerState};

/// What a row asked the list to do; every variant ends with a refetch
#[derive(Debug, Clone, PartialEq)]
enum AdminCommand {
    Review {
        photo_id: i64,
        status: PhotoStatus,
        comment: String,
    },
    SavePhotoComment { photo_id: i64, comment: String },
    Photo(PhotoOp),
    SetSubmissionStatus { submission_id: i64, status: SubmissionStatus },
    SaveSubmissionComment { submission_id: i64, comment: String },
}

impl AdminCommand {
    async fn run(self, api: &ApiClient) -> Result<(), AppError> {
        match self {
            AdminCommand::Review {
                photo_id,
                status,
                comment,
            } => admin_service::review_photo(api, photo_id, status, &comment)
                .await
                .map(|_| ()),
            AdminCommand::SavePhotoComment { photo_id, comment } => {
                admin_service::save_photo_comment(api, photo_id, &comment).await
            }
            AdminCommand::Photo(op) => op.run(api).await.map(|_| ()),
            AdminCommand::SetSubmissionStatus {
                submission_id,
                status,
            } => admin_service::set_submission_status(api, submission_id, status).await,
            AdminCommand::SaveSubmissionComment {
                submission_id,
                comment,
            } => admin_service::save_submission_comment(api, submission_id, &comment).await,
        }
    }
}

/// Error banners of the admin list.
///
/// A refetch clears only its own message; a failed command stays visible
/// until the next command starts.
#[derive(Debug, Clone, Default, PartialEq)]
struct ListErrors {
    fetch: Option<String>,
    command: Option<String>,
}

impl ListErrors {
    fn command_started(&mut self) {
        self.command = None;
    }

    fn command_failed(&mut self, message: String) {
        self.command = Some(message);
    }

    fn fetch_finished(&mut self, result: Result<(), String>) {
        self.fetch = result.err();
    }

    fn messages(&self) -> Vec<String> {
        self.command.iter().chain(self.fetch.iter()).cloned().collect()
    }
}

#[component]
pub fn AdminList(default_filter: StatusFilter) -> Element {
    let api = use_context::<ApiClient>();
    let viewer = use_photo_viewer();

    let mut submissions = use_signal(Vec::<Submission>::new);
    let mut filter = use_signal(|| default_filter);
    let mut loading = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let mut errors = use_signal(ListErrors::default);
    let mut sequence = use_signal(RequestSequence::new);

    let reload = {
        let api = api.clone();
        use_callback(move |_: ()| {
            let api = api.clone();
            let ticket = sequence.write().begin();
            loading.set(true);
            spawn(async move {
                let result = admin_service::list_submissions(&api).await;
                // a newer fetch already owns the screen
                if !sequence.peek().is_current(ticket) {
                    return;
                }
                let fetched = match result {
                    Ok(list) => {
                        submissions.set(list);
                        Ok(())
                    }
                    Err(e) => Err(e.user_message()),
                };
                errors.write().fetch_finished(fetched);
                loading.set(false);
            });
        })
    };

    use_hook(move || reload.call(()));

    let run_command = use_callback(move |command: AdminCommand| {
        if busy() {
            return;
        }
        let api = api.clone();
        busy.set(true);
        errors.write().command_started();
        spawn(async move {
            log::debug!("Admin command {:?}", command);
            if let Err(e) = command.run(&api).await {
                errors.write().command_failed(e.user_message());
            }
            busy.set(false);
            reload.call(());
        });
    });

    let banners = errors.read().messages();
    let all = submissions();
    let visible = filter_submissions(&all, filter());

    rsx! {
        div { class: "admin-list",
            div { class: "filter-bar",
                for f in StatusFilter::ALL {
                    button {
                        key: "{f.as_str()}",
                        class: if filter() == f { "filter-btn active" } else { "filter-btn" },
                        onclick: move |_| {
                            filter.set(f);
                            reload.call(());
                        },
                        {t!(f.label_key())}
                        {format!(" ({})", count_photos(&all, f))}
                    }
                }
                button {
                    class: "btn-secondary",
                    disabled: loading(),
                    onclick: move |_| reload.call(()),
                    {t!("admin-refresh")}
                }
            }

            for (i, message) in banners.into_iter().enumerate() {
                div { key: "{i}", class: "error-banner", "❌ {message}" }
            }
            if loading() && all.is_empty() {
                div { class: "muted", {t!("loading")} }
            } else if visible.is_empty() {
                div { class: "empty-state", {t!("admin-empty")} }
            }

            for submission in visible {
                AdminSubmissionCard {
                    key: "{submission.id}",
                    submission: submission.clone(),
                    viewer,
                    busy: busy(),
                    on_command: run_command,
                }
            }
        }

        PhotoModal { viewer }
    }
}

#[component]
fn AdminSubmissionCard(
    submission: Submission,
    viewer: Signal<ViewerState>,
    busy: bool,
    on_command: Callback<AdminCommand>,
) -> Element {
    let mut admin_comment = use_signal(|| submission.admin_comment.clone());
    let submission_id = submission.id;

    rsx! {
        div { class: "submission-card",
            div { style: "display: flex; justify-content: space-between; align-items: flex-start; gap: 12px;",
                div {
                    div { strong { "{submission.name}" } " · {submission.district}" }
                    div { class: "muted",
                        a { href: submission.cabinet_path(), "{submission.email}" }
                        if !submission.phone.is_empty() {
                            " · {submission.phone}"
                        }
                    }
                    div { class: "muted",
                        {t!("submission-id", id: submission.id.to_string())}
                        " · {submission.created_at}"
                    }
                }
                SubmissionStatusBadge { status: submission.status }
            }

            if !submission.comment.is_empty() {
                div { class: "user-comment", dangerous_inner_html: multiline_html(&submission.comment) }
            }

            div { class: "submission-controls",
                select {
                    disabled: busy,
                    value: "{submission.status.as_str()}",
                    onchange: move |e| {
                        on_command.call(AdminCommand::SetSubmissionStatus {
                            submission_id,
                            status: SubmissionStatus::from_str(&e.value()),
                        })
                    },
                    for status in [SubmissionStatus::Pending, SubmissionStatus::Approved, SubmissionStatus::Rejected] {
                        option { key: "{status.as_str()}", value: "{status.as_str()}", {t!(status.label_key())} }
                    }
                }
                textarea {
                    rows: 2,
                    placeholder: t!("admin-submission-comment"),
                    value: "{admin_comment}",
                    oninput: move |e| admin_comment.set(e.value()),
                }
                button {
                    class: "btn-secondary",
                    disabled: busy,
                    onclick: move |_| {
                        on_command.call(AdminCommand::SaveSubmissionComment {
                            submission_id,
                            comment: admin_comment(),
                        })
                    },
                    {t!("admin-save-comment")}
                }
            }

            div { class: "photo-grid",
                for photo in submission.photos.iter().cloned() {
                    AdminPhotoCard {
                        key: "{photo.id}",
                        photo,
                        viewer,
                        busy,
                        on_command,
                    }
                }
            }
            OriginalsList { originals: submission.originals.clone() }
        }
    }
}

#[component]
fn AdminPhotoCard(
    photo: Photo,
    mut viewer: Signal<ViewerState>,
    busy: bool,
    on_command: Callback<AdminCommand>,
) -> Element {
    let api = use_context::<ApiClient>();
    let mut comment = use_signal(|| photo.comment.clone());
    let full_url = api.asset_url(&photo.url);
    let thumb_url = api.asset_url(photo.display_url());
    let photo_id = photo.id;

    let review = move |status: PhotoStatus| {
        on_command.call(AdminCommand::Review {
            photo_id,
            status,
            comment: comment(),
        })
    };

    rsx! {
        div { class: if photo.is_deleted() { "photo-card trashed" } else { "photo-card" },
            img {
                src: "{thumb_url}",
                alt: "{photo.name}",
                onclick: move |_| viewer.write().open(&full_url),
            }
            div { class: "photo-name", "{photo.name}" }
            if photo.is_deleted() {
                span { class: "badge badge-deleted", {t!("photo-status-deleted")} }
            } else {
                PhotoStatusBadge { status: photo.status }
                textarea {
                    rows: 2,
                    placeholder: t!("admin-photo-comment"),
                    value: "{comment}",
                    oninput: move |e| comment.set(e.value()),
                }
            }

            div { class: "photo-actions",
                for action in available_actions(&photo) {
                    match action {
                        PhotoAction::Approve => rsx! {
                            button {
                                class: "btn-approve",
                                disabled: busy,
                                onclick: move |_| review(PhotoStatus::Approved),
                                {t!("action-approve")}
                            }
                        },
                        PhotoAction::Reject => rsx! {
                            button {
                                class: "btn-reject",
                                disabled: busy,
                                onclick: move |_| review(PhotoStatus::Rejected),
                                {t!("action-reject")}
                            }
                        },
                        PhotoAction::SaveComment => rsx! {
                            button {
                                class: "btn-secondary",
                                disabled: busy,
                                onclick: move |_| {
                                    on_command.call(AdminCommand::SavePhotoComment {
                                        photo_id,
                                        comment: comment(),
                                    })
                                },
                                {t!("admin-save-comment")}
                            }
                        },
                        PhotoAction::Delete => rsx! {
                            ConfirmButton {
                                label: t!("action-delete"),
                                confirm_label: t!("action-delete-confirm"),
                                disabled: busy,
                                on_confirm: move |_| on_command.call(AdminCommand::Photo(PhotoOp::Delete(photo_id))),
                            }
                        },
                        PhotoAction::Purge => rsx! {
                            ConfirmButton {
                                label: t!("action-purge"),
                                confirm_label: t!("action-purge-confirm"),
                                disabled: busy,
                                on_confirm: move |_| on_command.call(AdminCommand::Photo(PhotoOp::Purge(photo_id))),
                            }
                        },
                    }
                }
            }

            OriginalsList { originals: photo.originals.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_command_survives_refetch() {
        let mut errors = ListErrors::default();
        errors.command_started();
        errors.command_failed("Нельзя модерировать оригиналы".to_string());
        errors.fetch_finished(Ok(()));
        assert_eq!(errors.messages(), vec!["Нельзя модерировать оригиналы".to_string()]);
    }

    #[test]
    fn test_next_command_clears_old_failure() {
        let mut errors = ListErrors::default();
        errors.command_failed("Фото не найдено".to_string());
        errors.command_started();
        assert!(errors.messages().is_empty());
    }

    #[test]
    fn test_fetch_error_replaced_by_next_fetch() {
        let mut errors = ListErrors::default();
        errors.fetch_finished(Err("Ошибка запроса".to_string()));
        errors.command_failed("Требуется вход".to_string());
        assert_eq!(errors.messages().len(), 2);

        errors.fetch_finished(Ok(()));
        assert_eq!(errors.messages(), vec!["Требуется вход".to_string()]);
    }
}
