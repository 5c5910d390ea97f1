pub mod activity_log;
pub mod admin;
pub mod admin_list;
pub mod badges;
pub mod cabinet;
pub mod confirm_button;
pub mod file_picker;
pub mod navigation;
pub mod originals;
pub mod status_check;
pub mod submit_form;

pub use admin::{AdminGate, AdminScreen};
pub use cabinet::CabinetScreen;
pub use navigation::NavigationBar;
pub use status_check::StatusCheckScreen;
pub use submit_form::SubmitFormScreen;
