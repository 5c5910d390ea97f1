//! # Photo Intake
//!
//! Client-side checks for photos before they are sent to the review server.
//!
//! This crate provides:
//! - Minimum byte size and minimum pixel width checks
//! - Dimension probing from the image header (no full decode needed)
//! - Small WebP preview thumbnails as data URLs
//!
//! ## Advisory Only
//!
//! Nothing in here talks to the network. Passing the checks does not mean the
//! server will accept a file; it only keeps obviously unusable files out of
//! the upload request.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use photo_intake::{validate_batch, CandidateFile, IntakeRules};
//!
//! let rules = IntakeRules::default();
//! let previews = validate_batch(&rules, &files)?;
//! for preview in previews {
//!     println!("{} ({} MB) - {}px", preview.name, preview.megabytes(), preview.dimensions());
//! }
//! ```

pub mod preview;
pub mod rules;
pub mod validate;

pub use preview::{format_megabytes, FilePreview};
pub use rules::IntakeRules;
pub use validate::{inspect, validate_batch, CandidateFile, IntakeError};
