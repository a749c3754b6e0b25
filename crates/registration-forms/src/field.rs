// File: src/field.rs
// Purpose: Names of the registration form's fields

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One input of the registration form.
///
/// Ordering follows the form's layout, which is also the order the
/// `ErrorMap` iterates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Age,
    Gender,
    PhoneNo,
    Dob,
    Checkbox,
    File,
}

impl Field {
    /// All fields in layout order
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Age,
        Field::Gender,
        Field::PhoneNo,
        Field::Dob,
        Field::Checkbox,
        Field::File,
    ];

    /// Wire name, as posted by the form and used as the `ErrorMap` key
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::PhoneNo => "phoneNo",
            Field::Dob => "dob",
            Field::Checkbox => "checkbox",
            Field::File => "file",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::PhoneNo => "Phone No",
            Field::Dob => "Date of Birth",
            Field::Checkbox => "I Accept the Terms and Conditions.",
            Field::File => "Upload",
        }
    }

    /// Fields whose raw value is free text
    pub fn is_text(&self) -> bool {
        !matches!(self, Field::Checkbox | Field::File)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a field name the form does not have
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0:?}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
