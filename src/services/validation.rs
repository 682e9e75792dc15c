use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid phone regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Permissive international phone check: spaces, hyphens and parentheses
/// are stripped before matching an optional '+' followed by digits.
pub fn is_valid_phone(phone: &str) -> bool {
    let stripped: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    PHONE_RE.is_match(&stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_email() {
        assert!(is_valid_email("student@example.com"));
    }

    #[test]
    fn rejects_email_without_at_or_domain() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@domain"));
        assert!(!is_valid_email("spaces in@example.com"));
    }

    #[test]
    fn accepts_international_phone_with_separators() {
        assert!(is_valid_phone("+1 (216) 624-1878"));
        assert!(is_valid_phone("2166241878"));
        assert!(is_valid_phone("+447911123456"));
    }

    #[test]
    fn rejects_phone_with_letters_or_leading_zero() {
        assert!(!is_valid_phone("abc123"));
        assert!(!is_valid_phone("0123456"));
        assert!(!is_valid_phone(""));
    }
}
