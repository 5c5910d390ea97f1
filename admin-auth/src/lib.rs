//! # Admin Auth
//!
//! Admin session handling for the photo review frontend.
//!
//! This crate provides:
//! - Session check against `GET /api/admin/session`
//! - Credential login (`POST /api/admin/login`) and logout
//! - A Dioxus login dialog that replaces blocking browser prompts
//!
//! ## Separation of Concerns
//!
//! This crate does **not** decide which screens are protected. It reports
//! whether the browser session is an admin session and the application gates
//! its routes on that.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use admin_auth::{AdminAuthService, AdminCredentials, AdminLoginDialog};
//!
//! let service = AdminAuthService::new(base_url.clone());
//! if !service.check_session().await?.is_admin {
//!     service.login(&AdminCredentials::new("admin", "secret")).await?;
//! }
//!
//! AdminLoginDialog {
//!     base_url,
//!     on_success: move |_| gate.set(true),
//! }
//! ```

pub mod component;
pub mod models;
pub mod service;

pub use component::{AdminLoginDialog, AdminLoginDialogProps, LoginLabels};
pub use models::{AdminCredentials, LoginState, SessionInfo};
pub use service::{AdminAuthService, AuthError};
