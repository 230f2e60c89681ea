//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Permissive email pattern: local part, one `@`, dotted domain.
/// Full RFC 5322 validation is deliberately out of scope.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// Check if a string is non-empty after trimming whitespace
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length is within bounds
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.len();
    len >= min && len <= max
}

/// Check if an email address is plausibly valid
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("abc"));
        assert!(!not_blank(""));
        assert!(!not_blank("   "));
        assert!(!not_blank("\t\n"));
    }

    #[test]
    fn test_length_between() {
        assert!(length_between("password", 6, 64));
        assert!(!length_between("pw", 6, 64));
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@clinic.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@x.com"));
        assert!(!is_valid_email("spaces in@x.com"));
        assert!(!is_valid_email("nodomain@host"));
    }
}
