//! Password validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest accepted password, in characters
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Longest accepted password, in characters
pub const PASSWORD_MAX_LENGTH: usize = 12;

static PASSWORD_CHARSET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{6,12}$").unwrap());

/// Validates a password: 6-12 ASCII letters and digits, with at least one of each.
/// Any other character class rejects the password.
pub fn is_valid_password(password: &str) -> bool {
    if !PASSWORD_CHARSET.is_match(password) {
        return false;
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    has_letter && has_digit
}

/// Cross-field check: the confirmation must equal the password exactly
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}
