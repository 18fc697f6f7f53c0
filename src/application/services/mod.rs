//! Business logic services for the application layer.

pub mod history_store;
pub mod submission;

pub use history_store::{HISTORY_CAPACITY, HistoryStore};
pub use submission::{PreparedRequest, SubmissionController, SubmissionState};
