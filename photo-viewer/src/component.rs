use crate::state::{ViewerState, STEP_ZOOM};
use dioxus::prelude::*;

/// Custom labels for the viewer controls
#[derive(Clone, PartialEq)]
pub struct ViewerLabels {
    pub zoom_in: String,
    pub zoom_out: String,
    pub reset: String,
    pub close: String,
    pub open_in_tab: String,
    pub save: String,
}

impl Default for ViewerLabels {
    fn default() -> Self {
        Self {
            zoom_in: "Увеличить".to_string(),
            zoom_out: "Уменьшить".to_string(),
            reset: "Сбросить масштаб".to_string(),
            close: "Закрыть".to_string(),
            open_in_tab: "↗ Открыть".to_string(),
            save: "⬇ Сохранить".to_string(),
        }
    }
}

/// Creates the viewer state owned by a screen
pub fn use_photo_viewer() -> Signal<ViewerState> {
    use_signal(ViewerState::new)
}

fn set_body_scroll_locked(locked: bool) {
    let overflow = if locked { "hidden" } else { "" };
    let _ = document::eval(&format!("document.body.style.overflow = '{}';", overflow));
}

/// Fullscreen photo modal with zoom (buttons, keys, wheel) and drag-to-pan
///
/// The caller owns the [`ViewerState`] signal and opens the modal with
/// `viewer.write().open(url)`. Clicking the dark backdrop closes it, clicks on
/// the image or toolbar do not.
///
/// # Example
/// ```rust,ignore
/// let mut viewer = use_photo_viewer();
///
/// rsx! {
///     img { src: "{url}", onclick: move |_| viewer.write().open(&url) }
///     PhotoModal { viewer, show_actions: true }
/// }
/// ```
#[component]
pub fn PhotoModal(
    /// Viewer state owned by the parent screen
    mut viewer: Signal<ViewerState>,
    /// Whether to show "open in new tab" and "save" links
    #[props(default = true)]
    show_actions: bool,
    /// Custom labels (optional)
    #[props(default)]
    labels: Option<ViewerLabels>,
) -> Element {
    let is_open = use_memo(move || viewer.read().is_open());

    use_effect(move || {
        set_body_scroll_locked(is_open());
    });

    use_drop(move || {
        set_body_scroll_locked(false);
    });

    let state = viewer.read().clone();
    let Some(url) = state.url().map(str::to_string) else {
        return rsx! {};
    };

    let labels = labels.unwrap_or_default();
    let transform = state.transform();
    let scale_label = state.scale_label();
    let cursor = if state.is_dragging() {
        "grabbing"
    } else if state.can_drag() {
        "grab"
    } else {
        "zoom-in"
    };
    let transition = if state.is_dragging() {
        "none"
    } else {
        "transform 0.12s ease-out"
    };

    rsx! {
        div {
            class: "photo-modal open",
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.92); z-index: 1000; display: flex; flex-direction: column; outline: none;",
            tabindex: "0",
            onmounted: move |e| async move {
                let _ = e.set_focus(true).await;
            },
            onclick: move |_| viewer.write().close(),
            onkeydown: move |e: KeyboardEvent| {
                let key = e.key().to_string();
                if viewer.write().handle_key(&key) {
                    e.prevent_default();
                }
            },
            onwheel: move |e: WheelEvent| {
                e.prevent_default();
                viewer.write().handle_wheel(e.delta().strip_units().y);
            },
            onmousemove: move |e: MouseEvent| {
                if viewer.read().is_dragging() {
                    let point = e.client_coordinates();
                    viewer.write().drag_to(point.x, point.y);
                }
            },
            onmouseup: move |_| viewer.write().end_drag(),
            onmouseleave: move |_| viewer.write().end_drag(),
            ontouchmove: move |e: TouchEvent| {
                if !viewer.read().is_dragging() {
                    return;
                }
                if let [touch] = e.touches().as_slice() {
                    e.prevent_default();
                    let point = touch.client_coordinates();
                    viewer.write().drag_to(point.x, point.y);
                }
            },
            ontouchend: move |_| viewer.write().end_drag(),
            ontouchcancel: move |_| viewer.write().end_drag(),

            // Toolbar
            div {
                class: "photo-modal-toolbar",
                style: "display: flex; justify-content: flex-end; align-items: center; gap: 8px; padding: 12px 16px; background: rgba(0, 0, 0, 0.6);",
                onclick: move |e| e.stop_propagation(),
                if show_actions {
                    a {
                        class: "photo-modal-link",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener",
                        "{labels.open_in_tab}"
                    }
                    a {
                        class: "photo-modal-link",
                        href: "{url}",
                        download: "",
                        "{labels.save}"
                    }
                }
                button {
                    class: "photo-modal-btn",
                    title: "{labels.zoom_out}",
                    onclick: move |_| viewer.write().zoom_by(-STEP_ZOOM),
                    "−"
                }
                button {
                    class: "photo-modal-btn",
                    title: "{labels.reset}",
                    onclick: move |_| viewer.write().reset_zoom(),
                    "{scale_label}"
                }
                button {
                    class: "photo-modal-btn",
                    title: "{labels.zoom_in}",
                    onclick: move |_| viewer.write().zoom_by(STEP_ZOOM),
                    "+"
                }
                button {
                    class: "photo-modal-btn",
                    title: "{labels.close}",
                    onclick: move |_| viewer.write().close(),
                    "✕"
                }
            }

            // Stage: clicks that reach it bubble up to the backdrop and close
            div {
                class: "photo-modal-stage",
                style: "flex: 1; display: flex; align-items: center; justify-content: center; overflow: hidden;",
                img {
                    src: "{url}",
                    alt: "Photo",
                    draggable: "false",
                    style: "max-width: 100%; max-height: 100%; object-fit: contain; user-select: none; transform: {transform}; transition: {transition}; cursor: {cursor};",
                    onclick: move |e| e.stop_propagation(),
                    onmousedown: move |e: MouseEvent| {
                        e.prevent_default();
                        let point = e.client_coordinates();
                        viewer.write().begin_drag(point.x, point.y);
                    },
                    ontouchstart: move |e: TouchEvent| {
                        if let [touch] = e.touches().as_slice() {
                            let point = touch.client_coordinates();
                            viewer.write().begin_drag(point.x, point.y);
                        }
                    },
                }
            }
        }
    }
}
