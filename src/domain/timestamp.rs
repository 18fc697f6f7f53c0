//! Parsing of timestamps exchanged with the shortening backend.
//!
//! The backend serializes date-times either as RFC 3339 with an offset
//! (`2024-01-01T00:00:00Z`) or as zone-less local date-times
//! (`2024-01-01T00:00:00`, `2024-01-01T00:00`). Zone-less values are read in the
//! local time zone of the client.

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses a backend timestamp into UTC.
///
/// Returns `None` for anything that is not a recognizable date-time.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS.iter().find_map(|fmt| {
        let naive = NaiveDateTime::parse_from_str(raw, fmt).ok()?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
    })
}

/// Formats an instant the way history capture times are stored.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use shortifier::domain::timestamp::format_capture_time;
///
/// let t = Utc.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap();
/// assert_eq!(format_capture_time(t), "2024-01-01T08:30:00.000Z");
/// ```
pub fn format_capture_time(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339_utc() {
        let parsed = parse_timestamp("2024-01-01T00:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_timestamp("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_is_local() {
        let parsed = parse_timestamp("2024-06-15T12:30:00").unwrap();
        let expected = Local
            .with_ymd_and_hms(2024, 6, 15, 12, 30, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_naive_with_fraction_and_minutes_only() {
        assert!(parse_timestamp("2024-06-15T12:30:00.123456").is_some());
        assert!(parse_timestamp("2024-06-15T12:30").is_some());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("tomorrow").is_none());
        assert!(parse_timestamp("2024-13-01T00:00:00Z").is_none());
    }
}
