// File: src/record.rs
// Purpose: Candidate Record (raw submission) and the normalized StudentRecord

use chrono::NaiveDate;
use registration_types::{Age, EmailAddress, Gender, Password, PhoneNumber, StudentName};
use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::file::FileDescriptor;

/// Everything the user is submitting in one attempt, exactly as entered.
///
/// Text inputs hold raw strings; nothing is trimmed or coerced here. The
/// JSON form uses the form's wire names and the `{name, size, type}` shape
/// for `file`; absent keys default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateRecord {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub gender: String,
    pub phone_no: String,
    pub dob: String,
    pub checkbox: bool,
    pub file: Option<FileDescriptor>,
}

/// A field's raw value, borrowed from a `CandidateRecord`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
    File(Option<&'a FileDescriptor>),
}

impl CandidateRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of any field
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Checkbox => FieldValue::Flag(self.checkbox),
            Field::File => FieldValue::File(self.file.as_ref()),
            text => FieldValue::Text(self.text(text).unwrap_or_default()),
        }
    }

    /// Raw text of a text field; `None` for checkbox and file
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::PhoneNo => &self.phone_no,
            Field::Dob => &self.dob,
            Field::Checkbox | Field::File => return None,
        };
        Some(value.as_str())
    }

    /// Mutable slot for a text field; `None` for checkbox and file
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
            Field::Age => Some(&mut self.age),
            Field::Gender => Some(&mut self.gender),
            Field::PhoneNo => Some(&mut self.phone_no),
            Field::Dob => Some(&mut self.dob),
            Field::Checkbox | Field::File => None,
        }
    }
}

/// An accepted registration, every value already validated.
///
/// Field names follow the form's wire names. `confirmPassword` is dropped
/// since it equals `password`, and `checkbox` is always `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub name: StudentName,
    pub email: EmailAddress,
    pub password: Password,
    pub age: Age,
    pub gender: Gender,
    pub phone_no: PhoneNumber,
    pub dob: NaiveDate,
    pub checkbox: bool,
    pub file: FileDescriptor,
}
