use crate::components::badges::{PhotoStatusBadge, SubmissionStatusBadge};
use crate::components::confirm_button::ConfirmButton;
use crate::components::file_picker::{FilePicker, PickedPhotos};
use crate::components::originals::{OriginalsList, OriginalsTarget, OriginalsUpload};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::markup::multiline_html;
use crate::models::{Photo, ProfileUpdate, UserProfile};
use crate::routing::normalize_email;
use crate::services::photo_service::PhotoOp;
use crate::services::{cabinet_service, ApiClient};
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;
use photo_viewer::{use_photo_viewer, PhotoModal, ViewerState};

/// `/user` and `/user/{email}`
#[component]
pub fn CabinetScreen(email: Option<String>, on_navigate: EventHandler<Screen>) -> Element {
    match email {
        Some(email) => rsx! {
            Cabinet { email, on_navigate }
        },
        None => rsx! {
            CabinetLogin { on_navigate }
        },
    }
}

#[component]
fn CabinetLogin(on_navigate: EventHandler<Screen>) -> Element {
    let mut email_input = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    rsx! {
        div { class: "card",
            h2 { {t!("cabinet-title")} }
            p { class: "muted", {t!("cabinet-login-hint")} }
            form {
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    let email = normalize_email(&email_input());
                    if email.is_empty() {
                        error.set(Some(t!("error-email-required")));
                        return;
                    }
                    on_navigate.call(Screen::Cabinet(Some(email)));
                },
                div { class: "form-group",
                    label { {t!("field-email")} }
                    input {
                        r#type: "email",
                        value: "{email_input}",
                        oninput: move |e| email_input.set(e.value()),
                    }
                }
                if let Some(message) = error() {
                    div { class: "error-banner", "{message}" }
                }
                button { class: "btn-primary", r#type: "submit", {t!("cabinet-open")} }
            }
        }
    }
}

#[component]
fn Cabinet(email: String, on_navigate: EventHandler<Screen>) -> Element {
    let api = use_context::<ApiClient>();
    let config = use_context::<AppConfig>();
    let mut viewer = use_photo_viewer();

    let mut profile = use_signal(|| None::<UserProfile>);
    let mut loading = use_signal(|| true);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);

    let mut name = use_signal(String::new);
    let mut district = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut comment = use_signal(String::new);
    let mut picked = use_signal(PickedPhotos::default);
    let mut picker_key = use_signal(|| 0u32);

    // Replaces the snapshot and refills the form from it
    let mut apply_snapshot = move |snapshot: UserProfile| {
        let form = ProfileUpdate::from_profile(&snapshot);
        name.set(form.name);
        district.set(form.district);
        phone.set(form.phone);
        comment.set(form.comment);
        profile.set(Some(snapshot));
    };

    let finish = use_callback(move |result: Result<UserProfile, AppError>| {
        match result {
            Ok(snapshot) => apply_snapshot(snapshot),
            Err(e) => error.set(Some(e.user_message())),
        }
        busy.set(false);
    });

    let load_email = email.clone();
    let load_api = api.clone();
    use_hook(move || {
        spawn(async move {
            let result = cabinet_service::load_profile(&load_api, &load_email).await;
            loading.set(false);
            finish.call(result);
        });
    });

    let run_op = {
        let api = api.clone();
        use_callback(move |op: PhotoOp| {
            if busy() {
                return;
            }
            let api = api.clone();
            busy.set(true);
            error.set(None);
            notice.set(None);
            spawn(async move {
                finish.call(op.run(&api).await);
            });
        })
    };

    let save_email = email.clone();
    let save_api = api.clone();
    let save_profile = move |e: FormEvent| {
        e.prevent_default();
        let update = ProfileUpdate::new(&name(), &district(), &phone(), &comment());
        if let Some(key) = update.missing_field() {
            error.set(Some(t!(key)));
            return;
        }
        let api = save_api.clone();
        let email = save_email.clone();
        busy.set(true);
        error.set(None);
        notice.set(None);
        spawn(async move {
            let result = cabinet_service::save_profile(&api, &email, &update).await;
            if result.is_ok() {
                notice.set(Some(t!("cabinet-saved")));
            }
            finish.call(result);
        });
    };

    let upload_email = email.clone();
    let upload_photos = move |_| {
        let photos = picked.read().files.clone();
        if photos.is_empty() {
            error.set(Some(t!("error-photos-required")));
            return;
        }
        let api = api.clone();
        let email = upload_email.clone();
        busy.set(true);
        error.set(None);
        notice.set(None);
        spawn(async move {
            let result = cabinet_service::upload_photos(&api, &email, photos).await;
            if result.is_ok() {
                notice.set(Some(t!("cabinet-photos-uploaded")));
                picked.set(PickedPhotos::default());
                picker_key.with_mut(|k| *k += 1);
            }
            finish.call(result);
        });
    };

    let logout = move |_| {
        viewer.write().close();
        profile.set(None);
        on_navigate.call(Screen::Cabinet(None));
    };

    if loading() {
        return rsx! {
            div { class: "card", {t!("loading")} }
        };
    }

    let snapshot = profile().unwrap_or_else(|| UserProfile::empty_profile(&email));
    let photos: Vec<Photo> = snapshot.photos.clone();

    rsx! {
        div { class: "card",
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                h2 { style: "margin: 0;", {t!("cabinet-title")} }
                button { class: "btn-secondary", onclick: logout, {t!("cabinet-logout")} }
            }
            p { class: "muted", "{snapshot.email}" }
            if snapshot.is_registered() {
                SubmissionStatusBadge { status: snapshot.status }
            } else {
                p { class: "muted", {t!("cabinet-new-user")} }
            }

            if let Some(message) = error() {
                div { class: "error-banner", "❌ {message}" }
            }
            if let Some(message) = notice() {
                div { class: "success-banner", "{message}" }
            }

            h3 { {t!("cabinet-profile")} }
            form { onsubmit: save_profile,
                div { class: "form-group",
                    label { {t!("field-name")} }
                    input { value: "{name}", oninput: move |e| name.set(e.value()) }
                }
                div { class: "form-group",
                    label { {t!("field-district")} }
                    input { value: "{district}", oninput: move |e| district.set(e.value()) }
                }
                div { class: "form-group",
                    label { {t!("field-phone")} }
                    input { r#type: "tel", value: "{phone}", oninput: move |e| phone.set(e.value()) }
                }
                div { class: "form-group",
                    label { {t!("field-comment")} }
                    textarea { rows: 3, value: "{comment}", oninput: move |e| comment.set(e.value()) }
                }
                button { class: "btn-primary", r#type: "submit", disabled: busy(), {t!("cabinet-save")} }
            }

            h3 { {t!("cabinet-upload")} }
            {std::iter::once(picker_key()).map(|k| rsx! {
                FilePicker {
                    key: "{k}",
                    rules: config.intake,
                    disabled: busy(),
                    on_change: move |p: PickedPhotos| picked.set(p),
                }
            })}
            button {
                class: "btn-primary",
                disabled: busy() || picked.read().is_empty(),
                onclick: upload_photos,
                {t!("cabinet-upload-button")}
            }

            h3 { {t!("cabinet-photos")} }
            if photos.is_empty() {
                div { class: "empty-state", {t!("cabinet-no-photos")} }
            } else {
                div { class: "photo-grid",
                    for photo in photos {
                        CabinetPhoto {
                            key: "{photo.id}",
                            photo: photo.clone(),
                            viewer,
                            busy: busy(),
                            on_op: run_op,
                            on_snapshot: move |snapshot: Option<UserProfile>| {
                                if let Some(snapshot) = snapshot {
                                    apply_snapshot(snapshot);
                                }
                            },
                        }
                    }
                }
            }
        }

        PhotoModal { viewer }
    }
}

#[component]
fn CabinetPhoto(
    photo: Photo,
    mut viewer: Signal<ViewerState>,
    busy: bool,
    on_op: Callback<PhotoOp>,
    on_snapshot: EventHandler<Option<UserProfile>>,
) -> Element {
    let api = use_context::<ApiClient>();
    let full_url = api.asset_url(&photo.url);
    let thumb_url = api.asset_url(photo.display_url());
    let photo_id = photo.id;

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
                ConfirmButton {
                    label: t!("action-purge"),
                    confirm_label: t!("action-purge-confirm"),
                    disabled: busy,
                    on_confirm: move |_| on_op.call(PhotoOp::Purge(photo_id)),
                }
            } else {
                PhotoStatusBadge { status: photo.status }
                if !photo.comment.is_empty() {
                    div { class: "photo-comment", dangerous_inner_html: multiline_html(&photo.comment) }
                }
                ConfirmButton {
                    label: t!("action-delete"),
                    confirm_label: t!("action-delete-confirm"),
                    disabled: busy,
                    on_confirm: move |_| on_op.call(PhotoOp::Delete(photo_id)),
                }
                if photo.accepts_originals() {
                    OriginalsUpload {
                        target: OriginalsTarget::Photo(photo_id),
                        on_done: move |snapshot| on_snapshot.call(snapshot),
                    }
                }
            }

            OriginalsList {
                originals: photo.originals.clone(),
                on_delete: move |original_id| on_op.call(PhotoOp::DeleteOriginal(original_id)),
            }
            if photo.has_originals() {
                ConfirmButton {
                    label: t!("originals-delete-all"),
                    confirm_label: t!("action-delete-confirm"),
                    disabled: busy,
                    on_confirm: move |_| on_op.call(PhotoOp::DeleteOriginals(photo_id)),
                }
            }
        }
    }
}
