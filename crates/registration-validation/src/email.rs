//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld: word characters, dots and hyphens before the `@`, one or
// more dot-terminated labels, then a 2-4 letter top-level domain
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z]{2,4}$").unwrap()
});

/// Validates email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
