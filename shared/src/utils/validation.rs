//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted email shape: local part of ASCII word characters, dots and
/// dashes, one or more dotted domain labels, and a 2-4 character TLD.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
        .expect("email pattern is valid")
});

/// Characters that satisfy the "special character" password rule
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*";

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Trim and lowercase an email address so lookups and the uniqueness
/// constraint see one canonical form.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check an (already normalized) email address against the accepted shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check a password against the strength policy.
///
/// Returns the first failing rule as a human readable reason.
pub fn check_password_strength(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err("must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("must contain an uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("must contain a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("must contain a digit");
    }
    if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        return Err("must contain one of !@#$%^&*");
    }
    Ok(())
}

/// Mask an email address for logging: `jane.doe@corp.com` -> `j***@corp.com`
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

/// Check if a string has non-whitespace content
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last-name@mail.corp.co.uk"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@domain.toolong"));
        assert!(!is_valid_email("with space@b.com"));
    }

    #[test]
    fn test_email_validation_is_ascii_only() {
        assert!(!is_valid_email("ü@b.com"));
        assert!(!is_valid_email("user@bücher.de"));
        assert!(!is_valid_email("user@b.cöm"));
        assert!(!is_valid_email("用户@b.com"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Jane.Doe@Corp.COM "), "jane.doe@corp.com");
    }

    #[test]
    fn test_password_strength() {
        assert!(check_password_strength("Abcdef1!").is_ok());
        assert_eq!(
            check_password_strength("Ab1!"),
            Err("must be at least 8 characters long")
        );
        assert_eq!(
            check_password_strength("abcdef1!"),
            Err("must contain an uppercase letter")
        );
        assert_eq!(
            check_password_strength("ABCDEF1!"),
            Err("must contain a lowercase letter")
        );
        assert_eq!(check_password_strength("Abcdefg!"), Err("must contain a digit"));
        assert_eq!(
            check_password_strength("Abcdefg1"),
            Err("must contain one of !@#$%^&*")
        );
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane.doe@corp.com"), "j***@corp.com");
        assert_eq!(mask_email("garbage"), "***");
    }
}
