//! # Photo Viewer
//!
//! A fullscreen photo modal for Dioxus with zoom and drag-to-pan.
//!
//! This crate provides:
//! - [`ViewerState`], a small state machine (`Closed`, `Idle`, `Dragging`)
//!   that owns zoom, pan offset and the open image
//! - [`PhotoModal`], the Dioxus component driving it from mouse, touch,
//!   wheel and keyboard input
//!
//! The state machine has no Dioxus dependency in its logic and is tested
//! natively.

pub mod component;
pub mod state;

pub use component::{use_photo_viewer, PhotoModal, PhotoModalProps, ViewerLabels};
pub use state::{Offset, Phase, ViewerState, MAX_SCALE, MIN_SCALE, STEP_ZOOM, WHEEL_ZOOM};
