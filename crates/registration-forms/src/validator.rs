// File: src/validator.rs
// Purpose: FormValidator - one full validation pass over a Candidate Record

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use registration_types::{Age, EmailAddress, Gender, Password, PhoneNumber, StudentName};
use registration_validation::{coerce_number, parse_iso_date, NumberInput};
use tracing::{debug, error};

use crate::error::{ErrorMap, FieldError};
use crate::field::Field;
use crate::record::{CandidateRecord, StudentRecord};
use crate::schema::FormSchema;

/// Source of "today" for the date-of-birth window.
///
/// Read on every validation call, never cached at startup.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Current UTC calendar date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock stuck on one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Validates Candidate Records against a `FormSchema`.
///
/// Every field is evaluated on every call and the complete `ErrorMap` is
/// returned; validation never fails fast and never panics. The validator
/// holds no per-attempt state, so validating an unchanged record twice
/// (on the same day) gives the same result.
#[derive(Clone)]
pub struct FormValidator {
    schema: FormSchema,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidator")
            .field("fields", &self.schema.fields().len())
            .finish()
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidator {
    /// Student registration rules, dated by the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            schema: FormSchema::student_registration(),
            clock,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// The date the next validation call will treat as today
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Validate every field; only the collected errors, no normalization
    pub fn errors(&self, record: &CandidateRecord) -> ErrorMap {
        let today = self.clock.today();
        let mut errors = ErrorMap::new();

        for field in self.schema.fields() {
            if let Some(failed) = field.first_failure(record, today) {
                errors.insert(field.field, failed.error());
            }
        }

        errors
    }

    /// Validate a record, returning the normalized record or every field error
    pub fn validate(&self, record: &CandidateRecord) -> Result<StudentRecord, ErrorMap> {
        let errors = self.errors(record);
        if !errors.is_empty() {
            debug!(fields = ?errors.fields().collect::<Vec<_>>(), "candidate record rejected");
            return Err(errors);
        }

        self.normalize(record)
    }

    /// Build the typed record. The value types enforce the same predicates
    /// as the rule table, so every conversion here is expected to succeed.
    fn normalize(&self, record: &CandidateRecord) -> Result<StudentRecord, ErrorMap> {
        let mut errors = ErrorMap::new();

        let name = typed(Field::Name, StudentName::try_new(record.name.clone()), &mut errors);
        let email = typed(Field::Email, EmailAddress::try_new(record.email.clone()), &mut errors);
        let password = typed(Field::Password, Password::try_new(record.password.clone()), &mut errors);
        let age = typed(Field::Age, age_value(&record.age), &mut errors);
        let gender = typed(Field::Gender, record.gender.parse::<Gender>(), &mut errors);
        let phone_no = typed(Field::PhoneNo, PhoneNumber::try_new(record.phone_no.clone()), &mut errors);
        let dob = typed(
            Field::Dob,
            parse_iso_date(&record.dob).ok_or("not a YYYY-MM-DD date"),
            &mut errors,
        );
        let file = typed(Field::File, record.file.clone().ok_or("no file selected"), &mut errors);

        match (name, email, password, age, gender, phone_no, dob, file) {
            (
                Some(name),
                Some(email),
                Some(password),
                Some(age),
                Some(gender),
                Some(phone_no),
                Some(dob),
                Some(file),
            ) => Ok(StudentRecord {
                name,
                email,
                password,
                age,
                gender,
                phone_no,
                dob,
                checkbox: record.checkbox,
                file,
            }),
            _ => Err(errors),
        }
    }
}

/// Unwrap a value-type conversion. A rejection here means the value type and
/// the field rules disagree; it is logged and reported with the value type's
/// own reason.
fn typed<T, E: fmt::Display>(field: Field, value: Result<T, E>, errors: &mut ErrorMap) -> Option<T> {
    match value {
        Ok(value) => Some(value),
        Err(err) => {
            error!(field = %field, error = %err, "value type rejected a value the field rules accepted");
            errors.insert(field, FieldError::format(err.to_string()));
            None
        }
    }
}

fn age_value(raw: &str) -> Result<Age, String> {
    match coerce_number(raw) {
        NumberInput::Value(n) if n.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&n) => {
            Age::try_new(n as u8).map_err(|err| err.to_string())
        }
        _ => Err(format!("{:?} is not a whole number of years", raw)),
    }
}
