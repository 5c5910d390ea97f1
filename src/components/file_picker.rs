use crate::services::UploadFile;
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_i18n::t;
use photo_intake::{validate_batch, CandidateFile, FilePreview, IntakeError, IntakeRules};

/// Files that passed the intake checks, in selection order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickedPhotos {
    pub files: Vec<UploadFile>,
    pub previews: Vec<FilePreview>,
}

impl PickedPhotos {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Localised text for an intake rejection
pub fn intake_message(error: &IntakeError, rules: &IntakeRules) -> String {
    match error {
        IntakeError::Empty => t!("intake-empty"),
        IntakeError::TooSmall { name, .. } => {
            t!("intake-too-small", name: name.clone(), min: rules.min_kib().to_string())
        }
        IntakeError::TooNarrow {
            name,
            width,
            min_width,
        } => t!(
            "intake-too-narrow",
            name: name.clone(),
            min: min_width.to_string(),
            width: width.to_string()
        ),
        IntakeError::Undecodable { name, .. } => t!("intake-undecodable", name: name.clone()),
    }
}

/// Reads browser files into memory, one after another
pub async fn read_files(files: Vec<FileData>) -> Result<Vec<UploadFile>, String> {
    let mut out = Vec::with_capacity(files.len());
    for file in files {
        let name = file.name();
        let bytes = file
            .read_bytes()
            .await
            .map_err(|e| format!("{}: {}", name, e))?;
        out.push(UploadFile {
            name,
            bytes: bytes.to_vec(),
        });
    }
    Ok(out)
}

/// Photo selector with drag and drop, checks and previews.
///
/// Files are read one after another and checked in order; the first
/// rejected file clears the whole selection. The parent receives the
/// accepted files through `on_change` and can clear the picker by changing
/// its `key`.
#[component]
pub fn FilePicker(
    rules: IntakeRules,
    on_change: EventHandler<PickedPhotos>,
    #[props(default)] disabled: bool,
) -> Element {
    let mut previews = use_signal(Vec::<FilePreview>::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);
    let mut drag_over = use_signal(|| false);
    // bumping the key recreates the <input>, which empties it
    let mut input_key = use_signal(|| 0u32);

    let handle_files = use_callback(move |files: Vec<FileData>| {
        if files.is_empty() {
            return;
        }
        busy.set(true);
        error.set(None);
        spawn(async move {
            let mut picked = PickedPhotos::default();
            let mut failure = None;

            let mut candidates = Vec::with_capacity(files.len());
            for file in files {
                let name = file.name();
                match file.read_bytes().await {
                    Ok(bytes) => candidates.push(CandidateFile::new(name, bytes.to_vec())),
                    Err(e) => {
                        log::warn!("Could not read {}: {}", name, e);
                        failure = Some(t!("intake-read-failed", name: name));
                        break;
                    }
                }
            }

            if failure.is_none() {
                match validate_batch(&rules, &candidates) {
                    Ok(previews) => {
                        picked.previews = previews;
                        picked.files = candidates.into_iter().map(UploadFile::from).collect();
                    }
                    Err(e) => failure = Some(intake_message(&e, &rules)),
                }
            }

            if let Some(message) = failure {
                picked = PickedPhotos::default();
                error.set(Some(message));
                input_key.with_mut(|k| *k += 1);
            }
            previews.set(picked.previews.clone());
            on_change.call(picked);
            busy.set(false);
        });
    });

    let zone_style = if drag_over() {
        "border: 2px dashed #0066cc; background: #e8f1fb;"
    } else {
        "border: 2px dashed #bbb; background: #fafafa;"
    };

    rsx! {
        div {
            class: "file-picker",
            style: "{zone_style} border-radius: 12px; padding: 16px; text-align: center;",
            ondragover: move |e| {
                e.prevent_default();
                drag_over.set(true);
            },
            ondragleave: move |_| drag_over.set(false),
            ondrop: move |e| {
                e.prevent_default();
                drag_over.set(false);
                if !disabled && !busy() {
                    handle_files.call(e.files());
                }
            },

            p { style: "margin: 0 0 8px 0; color: #555;", {t!("picker-hint")} }
            {std::iter::once(input_key()).map(|k| rsx! {
                input {
                    key: "{k}",
                    r#type: "file",
                    multiple: true,
                    accept: "image/*",
                    disabled: disabled || busy(),
                    onchange: move |e| handle_files.call(e.files()),
                }
            })}
            p { style: "margin: 8px 0 0 0; font-size: 12px; color: #888;",
                {t!("picker-rules", min: rules.min_kib().to_string(), width: rules.min_width.to_string())}
            }

            if busy() {
                div { class: "muted", {t!("picker-checking")} }
            }
            if let Some(message) = error() {
                div { class: "error-banner", "{message}" }
            }

            if !previews.read().is_empty() {
                div { class: "preview-grid",
                    for preview in previews.read().iter() {
                        div { class: "preview-item", key: "{preview.name}",
                            img { src: "{preview.data_url}", alt: "{preview.name}" }
                            div { class: "preview-caption",
                                {t!(
                                    "preview-caption",
                                    name: preview.name.clone(),
                                    size: preview.megabytes(),
                                    dims: preview.dimensions()
                                )}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Plain multi-file input without checks, used for originals
#[component]
pub fn RawFileInput(
    label: String,
    on_files: EventHandler<Vec<UploadFile>>,
    #[props(default)] disabled: bool,
) -> Element {
    let mut error = use_signal(|| None::<String>);

    rsx! {
        label { class: "btn-secondary raw-file-input",
            "{label}"
            input {
                r#type: "file",
                multiple: true,
                style: "display: none;",
                disabled: disabled,
                onchange: move |e| {
                    let files = e.files();
                    if files.is_empty() {
                        return;
                    }
                    error.set(None);
                    spawn(async move {
                        match read_files(files).await {
                            Ok(files) => on_files.call(files),
                            Err(e) => {
                                log::warn!("Reading originals failed: {}", e);
                                error.set(Some(t!("intake-read-failed", name: e)));
                            }
                        }
                    });
                },
            }
        }
        if let Some(message) = error() {
            div { class: "error-banner", "{message}" }
        }
    }
}
