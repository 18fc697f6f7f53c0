//! Display projections computed from results and history items.
//!
//! These are plain functions of their inputs (plus an explicit `now`), so a
//! front end only has to lay the strings out.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

use crate::domain::entities::{HistoryItem, ShortenResult};
use crate::domain::timestamp::parse_timestamp;

/// Original URL width in the result panel.
pub const RESULT_URL_WIDTH: usize = 50;

/// Original URL width in a history row.
pub const HISTORY_URL_WIDTH: usize = 60;

/// Contents of the result panel after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub short_url: String,
    pub original_url: String,
    pub created_at: String,
    /// `None` hides the expiration row.
    pub expires_at: Option<String>,
}

impl ResultPanel {
    pub fn from_result(result: &ShortenResult) -> Self {
        Self {
            short_url: result.short_url.clone(),
            original_url: truncate_url(&result.original_url, RESULT_URL_WIDTH),
            created_at: format_date_time(&result.created_at),
            expires_at: result.expires_at.as_deref().map(format_date_time),
        }
    }
}

/// Expiration label of a history row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryLabel {
    Expired,
    /// Relative time until expiry, e.g. `in 3h`.
    Expires(String),
}

impl Display for ExpiryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpiryLabel::Expired => f.write_str("Expired"),
            ExpiryLabel::Expires(when) => write!(f, "Expires {when}"),
        }
    }
}

/// One line of the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub index: usize,
    pub short_url: String,
    pub original_url: String,
    pub created: String,
    pub expiry: Option<ExpiryLabel>,
    pub is_expired: bool,
}

impl HistoryRow {
    pub fn project(index: usize, item: &HistoryItem, now: DateTime<Utc>) -> Self {
        let is_expired = is_expired(item.expires_at.as_deref(), now);
        let expiry = item.expires_at.as_deref().map(|raw| {
            if is_expired {
                ExpiryLabel::Expired
            } else {
                ExpiryLabel::Expires(format_relative_time(raw, now))
            }
        });

        Self {
            index,
            short_url: item.short_url.clone(),
            original_url: truncate_url(&item.original_url, HISTORY_URL_WIDTH),
            created: format_relative_time(&item.created_at, now),
            expiry,
            is_expired,
        }
    }
}

/// Projects the whole history list.
pub fn project_history(items: &[HistoryItem], now: DateTime<Utc>) -> Vec<HistoryRow> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| HistoryRow::project(index, item, now))
        .collect()
}

/// Returns true if `expires_at` is present and strictly earlier than `now`.
pub fn is_expired(expires_at: Option<&str>, now: DateTime<Utc>) -> bool {
    expires_at
        .and_then(parse_timestamp)
        .is_some_and(|expires| expires < now)
}

/// Formats a backend timestamp as `Jan 1, 2024, 12:00 AM` in local time.
///
/// Unparseable input is returned unchanged.
pub fn format_date_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => format_in(&dt.with_timezone(&Local)),
        None => raw.to_string(),
    }
}

/// Formats an instant as `Jan 1, 2024, 12:00 AM` in its own time zone.
pub fn format_in<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Human-friendly distance between `raw` and `now`.
///
/// Past: `Just now`, `5m ago`, `3h ago`, `2d ago`; 30 days or more falls back
/// to [`format_date_time`]. Future instants use `in 5m`, `in 3h`, `in 2d`.
pub fn format_relative_time(raw: &str, now: DateTime<Utc>) -> String {
    let Some(at) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let diff = now.signed_duration_since(at);
    let future = diff.num_milliseconds() < 0;
    let diff = diff.abs();

    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    let amount = if minutes < 1 {
        return "Just now".to_string();
    } else if minutes < 60 {
        format!("{minutes}m")
    } else if hours < 24 {
        format!("{hours}h")
    } else if days < 30 {
        format!("{days}d")
    } else {
        return format_date_time(raw);
    };

    if future {
        format!("in {amount}")
    } else {
        format!("{amount} ago")
    }
}

/// Shortens `url` to `max_len` characters, appending `...` when cut.
pub fn truncate_url(url: &str, max_len: usize) -> String {
    if url.chars().count() <= max_len {
        return url.to_string();
    }

    let mut out: String = url.chars().take(max_len).collect();
    out.push_str("...");
    out
}
