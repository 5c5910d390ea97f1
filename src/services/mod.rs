pub mod activity_service;
pub mod admin_service;
pub mod api;
pub mod cabinet_service;
pub mod photo_service;
pub mod request_guard;
pub mod submission_service;

pub use api::{ApiClient, UploadFile};
pub use request_guard::RequestSequence;
