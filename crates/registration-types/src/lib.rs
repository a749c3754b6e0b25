//! Validated value types for an accepted student registration
//!
//! Each newtype enforces its field rule at construction time, so a
//! `StudentRecord` assembled from them cannot hold a value the registration
//! form would have rejected. Construction goes through `try_new`; the form
//! validator only calls it after the matching rule has already passed.
//!
//! # Types
//!
//! - `StudentName` - 6 to 18 characters
//! - `EmailAddress` - `local@domain.tld`
//! - `Password` - 6 to 12 letters and digits, at least one of each
//! - `PhoneNumber` - optional `+`, 3-3-4..6 digit groups
//! - `Age` - whole years, 18 to 60
//! - `Gender` - one of the options the form offers

use std::fmt;
use std::str::FromStr;

use nutype::nutype;
use registration_validation::{is_valid_email, is_valid_password, is_valid_phone};
use serde::{Deserialize, Serialize};

// =============================================================================
// Text Types
// =============================================================================

/// Student name, 6 to 18 characters inclusive
#[nutype(
    validate(len_char_min = 6, len_char_max = 18),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct StudentName(String);

/// Email address in `local@domain.tld` form
#[nutype(
    validate(predicate = is_valid_email),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EmailAddress(String);

/// Account password: 6-12 letters and digits with at least one of each
///
/// `Debug` is redacted; use `as_ref()` when the clear text is needed.
#[nutype(
    validate(predicate = is_valid_password),
    derive(Clone, PartialEq, Eq, AsRef, TryFrom, Into, Serialize, Deserialize)
)]
pub struct Password(String);

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(\"********\")")
    }
}

/// Phone number such as `(123) 456-7890` or `+123.456.789012`
#[nutype(
    validate(predicate = is_valid_phone),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PhoneNumber(String);

// =============================================================================
// Numeric Types
// =============================================================================

/// Age in whole years, 18 to 60 inclusive
#[nutype(
    validate(greater_or_equal = 18, less_or_equal = 60),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Age(u8);

// =============================================================================
// Choice Types
// =============================================================================

/// Gender options offered by the form's select input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All options in display order
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Submitted value
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Human-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a gender value the form does not offer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender option: {0:?}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownGender(s.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_name_length() {
        assert!(StudentName::try_new("Alice".to_string()).is_err()); // 5 chars
        assert!(StudentName::try_new("Alicia".to_string()).is_ok()); // exactly 6
        assert!(StudentName::try_new("Alexandra Smithson".to_string()).is_ok()); // exactly 18
        assert!(StudentName::try_new("Alexandra Smithsons".to_string()).is_err()); // 19
    }

    #[test]
    fn test_email_address() {
        assert!(EmailAddress::try_new("student@school.edu".to_string()).is_ok());
        assert!(EmailAddress::try_new("student@school".to_string()).is_err());
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::try_new("abc123".to_string()).unwrap();
        let debug = format!("{:?}", password);
        assert!(!debug.contains("abc123"));
        assert_eq!(password.as_ref(), "abc123");
    }

    #[test]
    fn test_password_rules() {
        assert!(Password::try_new("abcdef".to_string()).is_err());
        assert!(Password::try_new("abc12!".to_string()).is_err());
        assert!(Password::try_new("abc123".to_string()).is_ok());
    }

    #[test]
    fn test_phone_number() {
        assert!(PhoneNumber::try_new("123-456-7890".to_string()).is_ok());
        assert!(PhoneNumber::try_new("123-45-7890".to_string()).is_err());
    }

    #[test]
    fn test_age_bounds() {
        assert!(Age::try_new(17).is_err());
        assert!(Age::try_new(18).is_ok());
        assert!(Age::try_new(60).is_ok());
        assert!(Age::try_new(61).is_err());
    }

    #[test]
    fn test_gender_parse_and_serde() {
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert!("Female".parse::<Gender>().is_err());
        assert_eq!(serde_json::to_string(&Gender::Other).unwrap(), "\"other\"");
        assert_eq!(Gender::Male.label(), "Male");
    }

    #[test]
    fn test_unknown_gender_error() {
        let err = "robot".parse::<Gender>().unwrap_err();
        assert_eq!(err, UnknownGender("robot".to_string()));
        assert_eq!(err.to_string(), "unknown gender option: \"robot\"");

        let source: &dyn std::error::Error = &err;
        assert!(source.source().is_none());
    }

    #[test]
    fn test_serialize_is_transparent() {
        let name = StudentName::try_new("Alicia".to_string()).unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Alicia\"");

        let age = Age::try_new(21).unwrap();
        assert_eq!(serde_json::to_string(&age).unwrap(), "21");
    }
}
