//! Application layer: services and the session that ties them together.
//!
//! # Available Services
//!
//! - [`services::submission::SubmissionController`] - Request lifecycle and error mapping
//! - [`services::history_store::HistoryStore`] - Capped, persisted history
//! - [`session::ShortifierSession`] - Per-client context handling user events

pub mod services;
pub mod session;

pub use session::ShortifierSession;
