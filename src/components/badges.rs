use crate::models::{PhotoStatus, SubmissionStatus};
use dioxus::prelude::*;
use dioxus_i18n::t;

fn status_colors(class: &str) -> &'static str {
    match class {
        "approved" => "background: #e6f4ea; color: #1e7b34;",
        "rejected" => "background: #fdecea; color: #b3261e;",
        "deleted" => "background: #eeeeee; color: #666;",
        _ => "background: #fff4e5; color: #8a5300;",
    }
}

#[component]
pub fn PhotoStatusBadge(status: PhotoStatus) -> Element {
    let colors = status_colors(status.as_str());
    rsx! {
        span {
            class: "badge badge-{status.as_str()}",
            style: "{colors} padding: 2px 8px; border-radius: 10px; font-size: 12px;",
            {t!(status.label_key())}
        }
    }
}

#[component]
pub fn SubmissionStatusBadge(status: SubmissionStatus) -> Element {
    let colors = status_colors(status.as_str());
    rsx! {
        span {
            class: "badge badge-{status.as_str()}",
            style: "{colors} padding: 4px 10px; border-radius: 12px; font-size: 13px; font-weight: 600;",
            {t!(status.label_key())}
        }
    }
}
