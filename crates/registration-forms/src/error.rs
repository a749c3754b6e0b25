// File: src/error.rs
// Purpose: Field-level validation errors and the per-submission ErrorMap

use std::collections::btree_map::{self, BTreeMap};
use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::field::Field;

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Required value absent or empty. An unreadable file selection lands here too.
    MissingField,
    /// Value present but fails a pattern, range, type, size or format rule
    FormatViolation,
    /// Value disagrees with another field of the same submission
    CrossFieldMismatch,
}

/// The single message reported for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingField, message)
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::FormatViolation, message)
    }

    pub fn mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CrossFieldMismatch, message)
    }
}

/// Field name to message mapping produced by one validation pass.
///
/// Holds at most one error per field. It is rebuilt from scratch on every
/// validation attempt; nothing carries over between attempts. Serializes as
/// a JSON object keyed by wire names, e.g. `{"age":"Age is Required"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<Field, FieldError>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the error for a field. The first error recorded for a field wins.
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.entry(field).or_insert(error);
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if a field has an error
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Get the message for a field
    pub fn message(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(|e| e.message.as_str())
    }

    pub fn kind(&self, field: Field) -> Option<ErrorKind> {
        self.errors.get(&field).map(|e| e.kind)
    }

    /// Fields with errors, in form layout order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Field, FieldError> {
        self.errors.iter()
    }

    /// Wire-name keyed copy of the messages, for display collaborators
    pub fn to_messages(&self) -> HashMap<String, String> {
        self.errors
            .iter()
            .map(|(field, error)| (field.as_str().to_string(), error.message.clone()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a Field, &'a FieldError);
    type IntoIter = btree_map::Iter<'a, Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl Serialize for ErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field.as_str(), &error.message)?;
        }
        map.end()
    }
}
