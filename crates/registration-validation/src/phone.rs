//! Phone number validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// optional `+`, optionally parenthesized 3-digit area code, 3-digit prefix,
// 4-6 digit line number; groups may be separated by `-`, `.` or whitespace
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$").unwrap()
});

/// Validates phone number format
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
