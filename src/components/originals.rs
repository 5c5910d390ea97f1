use crate::components::file_picker::RawFileInput;
use crate::models::{Original, Submission};
use crate::services::{photo_service, submission_service, ApiClient, UploadFile};
use dioxus::prelude::*;
use dioxus_i18n::t;
use photo_intake::format_megabytes;

/// Where uploaded originals belong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginalsTarget {
    Photo(i64),
    /// Whole submission, the older flow
    Submission(i64),
}

/// Listing of uploaded originals with download links
#[component]
pub fn OriginalsList(
    originals: Vec<Original>,
    #[props(default)] on_delete: Option<EventHandler<i64>>,
) -> Element {
    let api = use_context::<ApiClient>();
    if originals.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "originals",
            div { class: "originals-title", {t!("originals-uploaded")} }
            ul { style: "margin: 4px 0; padding-left: 18px;",
                for original in originals {
                    li { key: "{original.id}",
                        a {
                            href: api.asset_url(&original.url),
                            target: "_blank",
                            download: "{original.name}",
                            "{original.name}"
                        }
                        {format!(" ({} МБ)", format_megabytes(original.size))}
                        if let Some(handler) = on_delete {
                            button {
                                class: "btn-link",
                                onclick: move |_| handler.call(original.id),
                                {t!("action-delete")}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Upload control for originals.
///
/// `on_done` gets the fresh snapshot when the endpoint returns one.
#[component]
pub fn OriginalsUpload(target: OriginalsTarget, on_done: EventHandler<Option<Submission>>) -> Element {
    let api = use_context::<ApiClient>();
    let mut uploading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let upload = move |files: Vec<UploadFile>| {
        let api = api.clone();
        uploading.set(true);
        error.set(None);
        spawn(async move {
            let result = match target {
                OriginalsTarget::Photo(id) => photo_service::upload_photo_originals(&api, id, files)
                    .await
                    .map(Some),
                OriginalsTarget::Submission(id) => {
                    submission_service::upload_submission_originals(&api, id, files)
                        .await
                        .map(|_| None)
                }
            };
            match result {
                Ok(snapshot) => on_done.call(snapshot),
                Err(e) => error.set(Some(e.user_message())),
            }
            uploading.set(false);
        });
    };

    rsx! {
        div { class: "originals-upload",
            if uploading() {
                span { class: "muted", {t!("originals-uploading")} }
            } else {
                RawFileInput { label: t!("originals-upload"), on_files: upload }
            }
            if let Some(message) = error() {
                div { class: "error-banner", "{message}" }
            }
        }
    }
}
