//! Request and result of a single shortening.

use serde::{Deserialize, Serialize};

/// Raw form input as entered by the user.
///
/// Nothing here is validated yet; see [`crate::domain::validation::validate_url`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortenForm {
    pub url: String,
    pub expires_at: Option<String>,
}

impl ShortenForm {
    /// Creates a form with only a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            expires_at: None,
        }
    }

    /// Sets the optional expiration.
    pub fn with_expires_at(mut self, expires_at: impl Into<String>) -> Self {
        self.expires_at = Some(expires_at.into());
        self
    }

    /// URL with surrounding whitespace removed.
    pub fn trimmed_url(&self) -> &str {
        self.url.trim()
    }

    /// Expiration, or `None` when it was left blank.
    pub fn normalized_expires_at(&self) -> Option<&str> {
        self.expires_at
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Body of `POST /api/shorten`.
///
/// `expiresAt` is omitted from the JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl ShortenRequest {
    pub fn new(url: impl Into<String>, expires_at: Option<String>) -> Self {
        Self {
            url: url.into(),
            expires_at,
        }
    }
}

/// Successful response of the shortening backend.
///
/// Only ever produced by deserializing a backend response. Timestamps are kept
/// exactly as sent; see [`crate::domain::timestamp::parse_timestamp`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResult {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}
