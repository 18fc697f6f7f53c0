//! # Shortifier
//!
//! Client for the Shortifier URL shortening service.
//!
//! It validates a URL (with an optional expiration), submits it to the
//! backend's `POST /api/shorten` endpoint, displays the short URL and keeps a
//! local, capped history of recent shortenings.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Data model, URL validation, gateway and storage traits
//! - **Application Layer** ([`application`]) - Submission controller, history store, session
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest gateway, file and memory storage
//! - **Presentation Layer** ([`presentation`]) - Display projections, `View` trait, terminal UI
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORTIFIER_API_URL="http://localhost:8080"
//!
//! cargo run -- shorten https://example.com/some/long/path
//! cargo run -- history list
//! ```
//!
//! ## Configuration
//!
//! See [`config`] for the environment variables.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

pub use application::ShortifierSession;
pub use error::{SubmitError, ValidationError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::ShortifierSession;
    pub use crate::application::services::{
        HISTORY_CAPACITY, HistoryStore, PreparedRequest, SubmissionController, SubmissionState,
    };
    pub use crate::domain::entities::{HistoryItem, ShortenForm, ShortenRequest, ShortenResult};
    pub use crate::domain::gateway::ShortenerGateway;
    pub use crate::domain::repositories::HistoryStorage;
    pub use crate::error::{HistoryError, SubmitError, ValidationError};
    pub use crate::infrastructure::http::HttpShortenerGateway;
    pub use crate::infrastructure::storage::{FileHistoryStorage, MemoryHistoryStorage};
    pub use crate::presentation::{Clipboard, View};
}
