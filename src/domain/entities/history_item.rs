//! History entry owned by the history store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ShortenResult;
use crate::domain::timestamp::format_capture_time;

/// A completed shortening plus the time the client recorded it.
///
/// Serialized with camelCase keys; this is the on-disk history format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    pub timestamp: String,
}

impl HistoryItem {
    /// Builds an item from a backend result captured at `captured_at`.
    pub fn from_result(result: ShortenResult, captured_at: DateTime<Utc>) -> Self {
        Self {
            short_code: result.short_code,
            short_url: result.short_url,
            original_url: result.original_url,
            created_at: result.created_at,
            expires_at: result.expires_at,
            timestamp: format_capture_time(captured_at),
        }
    }
}
