use crate::markup::multiline_html;
use crate::models::{merge_district_options, ActivityItem, ActivityQuery};
use crate::services::{activity_service, ApiClient, RequestSequence};
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn ActivityLog() -> Element {
    let api = use_context::<ApiClient>();

    let mut day = use_signal(String::new);
    let mut district = use_signal(String::new);
    let mut items = use_signal(Vec::<ActivityItem>::new);
    let mut districts = use_signal(Vec::<String>::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut sequence = use_signal(RequestSequence::new);

    let load = use_callback(move |_: ()| {
        let api = api.clone();
        let query = ActivityQuery {
            day: day.peek().to_string(),
            district: district.peek().to_string(),
        };
        let ticket = sequence.write().begin();
        loading.set(true);
        spawn(async move {
            let result = activity_service::load_activities(&api, &query).await;
            if !sequence.peek().is_current(ticket) {
                return;
            }
            match result {
                Ok(feed) => {
                    items.set(feed.items);
                    districts.set(feed.districts);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    });

    use_hook(move || load.call(()));

    let options = merge_district_options(&districts.read(), &district.read());

    rsx! {
        div { class: "activity-log",
            div { class: "filter-bar",
                label { {t!("activity-day")} }
                input {
                    r#type: "date",
                    value: "{day}",
                    oninput: move |e| {
                        day.set(e.value());
                        load.call(());
                    },
                }
                label { {t!("activity-district")} }
                select {
                    value: "{district}",
                    onchange: move |e| {
                        district.set(e.value());
                        load.call(());
                    },
                    option { value: "", {t!("activity-all-districts")} }
                    for option_value in options {
                        option {
                            key: "{option_value}",
                            value: "{option_value}",
                            selected: *district.read() == option_value,
                            "{option_value}"
                        }
                    }
                }
                button {
                    class: "btn-secondary",
                    onclick: move |_| {
                        day.set(String::new());
                        district.set(String::new());
                        load.call(());
                    },
                    {t!("activity-reset")}
                }
            }

            if let Some(message) = error() {
                div { class: "error-banner", "❌ {message}" }
            }

            if items.read().is_empty() {
                div { class: "empty-state",
                    if loading() {
                        {t!("loading")}
                    } else {
                        {t!("activity-empty")}
                    }
                }
            } else {
                table { class: "activity-table",
                    thead {
                        tr {
                            th { {t!("activity-col-time")} }
                            th { {t!("activity-col-user")} }
                            th { {t!("activity-col-district")} }
                            th { {t!("activity-col-action")} }
                            th { {t!("activity-col-details")} }
                            th { {t!("activity-col-photo")} }
                        }
                    }
                    tbody {
                        for item in items.read().iter().cloned() {
                            ActivityRow { key: "{item.id}", item }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ActivityRow(item: ActivityItem) -> Element {
    let api = use_context::<ApiClient>();
    let action = match item.action_type.label_key() {
        Some(key) => t!(key),
        None => item.action_type.as_str().to_string(),
    };

    rsx! {
        tr {
            td { "{item.display_time()}" }
            td {
                match item.profile_url.as_deref().filter(|u| !u.is_empty()) {
                    Some(url) => rsx! {
                        a { href: "{url}", "{item.actor()}" }
                    },
                    None => rsx! { "{item.actor()}" },
                }
            }
            td { "{item.district}" }
            td { "{action}" }
            td { dangerous_inner_html: multiline_html(&item.details) }
            td {
                if let Some(url) = item.photo_url.as_deref().filter(|u| !u.is_empty()) {
                    a { href: api.asset_url(url), target: "_blank", {t!("activity-open-photo")} }
                }
            }
        }
    }
}
