//! Field validators.
//!
//! Each validator checks one scalar and returns the rejection reason for the
//! named field. Lengths are counted in Unicode code points, never bytes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::EMAIL_PATTERN;
use crate::error::{DomainError, DomainResult};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Number of code points in `value`.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Reject an empty value. Whitespace-only values are accepted.
pub fn require(field: &'static str, value: &str, reason: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::validation(field, reason));
    }
    Ok(())
}

/// Reject a value whose length falls outside `[min, max]`.
///
/// `label` prefixes the reason, e.g. `"user first name"` yields
/// `"user first name of size 1 is too short"`.
pub fn bounded(
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) -> DomainResult<()> {
    let size = char_len(value);
    if size < min {
        return Err(DomainError::validation(
            field,
            format!("{} of size {} is too short", label, size),
        ));
    }
    if size > max {
        return Err(DomainError::validation(
            field,
            format!("{} of size {} is too long", label, size),
        ));
    }
    Ok(())
}

/// Reject a value longer than `max` with a fixed reason.
pub fn at_most(field: &'static str, value: &str, max: usize, reason: &str) -> DomainResult<()> {
    if char_len(value) > max {
        return Err(DomainError::validation(field, reason));
    }
    Ok(())
}

/// Check an email address against the fixed pattern.
pub fn email(field: &'static str, value: &str) -> DomainResult<()> {
    require(field, value, "must provide an user email")?;
    if !EMAIL_RE.is_match(value) {
        return Err(DomainError::validation(
            field,
            format!("invalid user email: {}", value),
        ));
    }
    Ok(())
}

/// Check that an already stripped phone number holds only decimal digits.
///
/// An empty value means no phone was provided and passes.
pub fn phone_digits(field: &'static str, stripped: &str) -> DomainResult<()> {
    if stripped.chars().all(|c| c.is_ascii_digit()) {
        return Ok(());
    }
    Err(DomainError::validation(
        field,
        format!("invalid user phone number: {}", stripped),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_empty_only() {
        assert!(require("city", "", "must provide a city").is_err());
        assert!(require("city", "   ", "must provide a city").is_ok());
        assert!(require("city", "DC", "must provide a city").is_ok());
    }

    #[test]
    fn test_bounded_edges() {
        let check = |v: &str| bounded("username", "username", v, 6, 16);
        assert!(check("abcde").is_err());
        assert!(check("abcdef").is_ok());
        assert!(check("abcdefghijklmnop").is_ok());
        assert!(check("abcdefghijklmnopq").is_err());
    }

    #[test]
    fn test_bounded_reasons() {
        let short = bounded("username", "username", "abc", 6, 16).unwrap_err();
        assert_eq!(short.to_string(), "username of size 3 is too short");

        let long = bounded("username", "username", &"x".repeat(17), 6, 16).unwrap_err();
        assert_eq!(long.to_string(), "username of size 17 is too long");
    }

    #[test]
    fn test_bounded_counts_code_points() {
        // 6 code points, 12 bytes
        assert!(bounded("username", "username", "éééééé", 6, 6).is_ok());
        assert!(bounded("first_name", "name", "Zoë", 2, 3).is_ok());
    }

    #[test]
    fn test_email_pattern() {
        assert!(email("email", "a@b.co").is_ok());
        assert!(email("email", "a.b@c.org").is_ok());
        assert!(email("email", "first+tag@mail.example.com").is_ok());
        assert!(email("email", "a@b").is_err());
        assert!(email("email", "a@b.c").is_err());
        assert!(email("email", "@b.co").is_err());
        assert!(email("email", " a@b.co").is_err());
    }

    #[test]
    fn test_email_empty_has_specific_reason() {
        let err = email("email", "").unwrap_err();
        assert_eq!(err.to_string(), "must provide an user email");
    }

    #[test]
    fn test_phone_digits() {
        assert!(phone_digits("phone", "5551234567").is_ok());
        assert!(phone_digits("phone", "").is_ok());
        assert!(phone_digits("phone", "555CALLNOW").is_err());
        assert!(phone_digits("phone", "+15551234567").is_err());
        assert!(phone_digits("phone", "٣٤٥").is_err());
    }
}
