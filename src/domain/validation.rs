//! URL validation performed before anything is sent to the backend.

use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// Maximum accepted URL length, in characters.
pub const MAX_URL_LENGTH: usize = 255;

/// `http://` or `https://` followed by at least one character.
static URL_SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("URL scheme regex is valid"));

/// Validates a candidate URL.
///
/// # Rules
///
/// Checked in order, the first failure wins:
///
/// 1. Empty or whitespace only: [`ValidationError::BlankUrl`]
/// 2. Longer than 255 characters after trimming: [`ValidationError::TooLong`]
/// 3. Not `http://` / `https://` plus at least one character: [`ValidationError::InvalidScheme`]
///
/// # Examples
///
/// ```
/// use shortifier::domain::validation::validate_url;
/// use shortifier::error::ValidationError;
///
/// assert!(validate_url("https://example.com/path").is_ok());
/// assert_eq!(validate_url("   "), Err(ValidationError::BlankUrl));
/// assert_eq!(validate_url("ftp://x.com"), Err(ValidationError::InvalidScheme));
/// ```
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(ValidationError::BlankUrl);
    }

    if url.chars().count() > MAX_URL_LENGTH {
        return Err(ValidationError::TooLong);
    }

    if !URL_SCHEME_REGEX.is_match(url) {
        return Err(ValidationError::InvalidScheme);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(validate_url("https://example.com/path").is_ok());
        assert!(validate_url("http://a").is_ok());
        assert!(validate_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_blank() {
        assert_eq!(validate_url(""), Err(ValidationError::BlankUrl));
        assert_eq!(validate_url("   "), Err(ValidationError::BlankUrl));
        assert_eq!(validate_url("\t\n"), Err(ValidationError::BlankUrl));
    }

    #[test]
    fn test_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(240));
        assert_eq!(url.len(), 260);
        assert_eq!(validate_url(&url), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_too_long_wins_over_scheme() {
        let url = "x".repeat(256);
        assert_eq!(validate_url(&url), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_length_boundary() {
        let prefix = "https://e.com/";
        let exactly = format!("{prefix}{}", "a".repeat(MAX_URL_LENGTH - prefix.len()));
        assert_eq!(exactly.chars().count(), 255);
        assert!(validate_url(&exactly).is_ok());

        let over = format!("{exactly}a");
        assert_eq!(validate_url(&over), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_length_counts_characters_after_trim() {
        let url = format!("   https://e.com/{}   ", "é".repeat(200));
        assert!(validate_url(&url).is_ok());
    }

    #[test]
    fn test_invalid_scheme() {
        assert_eq!(validate_url("ftp://x.com"), Err(ValidationError::InvalidScheme));
        assert_eq!(validate_url("example.com"), Err(ValidationError::InvalidScheme));
        assert_eq!(validate_url("https://"), Err(ValidationError::InvalidScheme));
        assert_eq!(validate_url("HTTPS://x.com"), Err(ValidationError::InvalidScheme));
        assert_eq!(validate_url("javascript:alert(1)"), Err(ValidationError::InvalidScheme));
    }

    #[test]
    fn test_idempotent() {
        for input in ["", "https://x.com", "ftp://x", "y".repeat(300).as_str()] {
            assert_eq!(validate_url(input), validate_url(input));
        }
    }
}
