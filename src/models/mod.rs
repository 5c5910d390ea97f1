pub mod activity;
pub mod profile;
pub mod submission;

pub use activity::{merge_district_options, ActionType, ActivityFeed, ActivityItem, ActivityQuery};
pub use profile::{ProfileUpdate, UserAnswer, UserEnvelope, UserProfile};
pub use submission::{
    Original, Photo, PhotoStatus, ReviewOutcome, Submission, SubmissionCreated,
    SubmissionEnvelope, SubmissionStatus,
};
