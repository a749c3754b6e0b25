// File: src/schema.rs
// Purpose: Declarative table of named field rules for the registration form

use chrono::NaiveDate;
use registration_validation as rules;
use registration_validation::NumberInput;

use crate::error::{ErrorKind, FieldError};
use crate::field::Field;
use crate::record::{CandidateRecord, FieldValue};

/// How a field is presented, for display collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Number,
    Select(&'static [&'static str]),
    Tel,
    Date,
    Checkbox,
    File,
}

/// A named regex-backed predicate
#[derive(Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Pattern").field(&self.name).finish()
    }
}

/// A single check on a single field
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Text non-empty, or a non-empty file selected
    Required,
    /// Character count within `[min, max]`
    Length { min: usize, max: usize },
    Pattern(Pattern),
    OneOf(&'static [&'static str]),
    /// Text reads as a finite number
    Number,
    Positive,
    Integer,
    /// Numeric value within `[min, max]`
    Range { min: i64, max: i64 },
    /// ISO date from 1990-01-01 through today
    BirthDateWindow,
    /// Equals another field of the same record, byte for byte
    EqualsField(Field),
    /// Checkbox ticked
    Accepted,
    MaxFileSize(u64),
    FileTypes(&'static [&'static str]),
}

impl Rule {
    /// Whether `value` passes this rule. Rules never see the previous
    /// attempt's data: everything comes from `record` and `today`.
    pub fn check(&self, value: FieldValue<'_>, record: &CandidateRecord, today: NaiveDate) -> bool {
        match (*self, value) {
            (Rule::Required, FieldValue::Text(s)) => !rules::is_blank(s),
            (Rule::Required, FieldValue::File(file)) => file.is_some_and(|f| rules::is_present(f.size)),
            (Rule::Required, FieldValue::Flag(_)) => true,

            (Rule::Length { min, max }, FieldValue::Text(s)) => rules::length_within(s, min, max),
            (Rule::Pattern(pattern), FieldValue::Text(s)) => (pattern.matches)(s),
            (Rule::OneOf(allowed), FieldValue::Text(s)) => rules::is_one_of(s, allowed),

            (Rule::Number, FieldValue::Text(s)) => matches!(rules::coerce_number(s), NumberInput::Value(_)),
            (Rule::Positive, FieldValue::Text(s)) => number(s).is_some_and(rules::is_positive),
            (Rule::Integer, FieldValue::Text(s)) => number(s).is_some_and(rules::is_integer),
            (Rule::Range { min, max }, FieldValue::Text(s)) => {
                number(s).is_some_and(|n| rules::in_range(n, min as f64, max as f64))
            }

            (Rule::BirthDateWindow, FieldValue::Text(s)) => rules::parse_iso_date(s)
                .is_some_and(|date| rules::is_eligible_birth_date(date, today)),

            (Rule::EqualsField(other), FieldValue::Text(s)) => record
                .text(other)
                .is_some_and(|expected| rules::equals(s, expected)),

            (Rule::Accepted, FieldValue::Flag(checked)) => checked,

            (Rule::MaxFileSize(max), FieldValue::File(Some(file))) => file.size <= max,
            (Rule::FileTypes(allowed), FieldValue::File(Some(file))) => {
                allowed.contains(&file.mime_type.as_str())
            }

            // A rule applied to the wrong kind of value fails closed
            _ => false,
        }
    }
}

fn number(raw: &str) -> Option<f64> {
    match rules::coerce_number(raw) {
        NumberInput::Value(n) => Some(n),
        _ => None,
    }
}

/// A rule with the error reported when it fails
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub rule: Rule,
    pub kind: ErrorKind,
    pub message: &'static str,
}

impl FieldRule {
    pub fn error(&self) -> FieldError {
        FieldError::new(self.kind, self.message)
    }
}

/// One field's rules, evaluated in order; the first failure is the field's error
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub field: Field,
    pub input: InputKind,
    pub rules: Vec<FieldRule>,
}

impl FieldSchema {
    pub fn new(field: Field, input: InputKind) -> Self {
        Self {
            field,
            input,
            rules: Vec::new(),
        }
    }

    fn rule(mut self, rule: Rule, kind: ErrorKind, message: &'static str) -> Self {
        self.rules.push(FieldRule { rule, kind, message });
        self
    }

    /// Add a `Required` rule reporting `MissingField`
    pub fn required(self, message: &'static str) -> Self {
        self.rule(Rule::Required, ErrorKind::MissingField, message)
    }

    /// Add a rule reporting `FormatViolation`
    pub fn check(self, rule: Rule, message: &'static str) -> Self {
        self.rule(rule, ErrorKind::FormatViolation, message)
    }

    /// Add a rule reporting `CrossFieldMismatch`
    pub fn cross_field(self, rule: Rule, message: &'static str) -> Self {
        self.rule(rule, ErrorKind::CrossFieldMismatch, message)
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r.rule, Rule::Required))
    }

    /// First failing rule for this field, if any
    pub fn first_failure(
        &self,
        record: &CandidateRecord,
        today: NaiveDate,
    ) -> Option<&FieldRule> {
        let value = record.value(self.field);
        self.rules.iter().find(|r| !r.rule.check(value, record, today))
    }
}

/// The whole form's rule table
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Vec<FieldSchema>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, field: Field) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// The student registration form
    pub fn student_registration() -> Self {
        const EMAIL: Pattern = Pattern {
            name: "email",
            matches: rules::is_valid_email,
        };
        const PASSWORD: Pattern = Pattern {
            name: "password",
            matches: rules::is_valid_password,
        };
        const PHONE: Pattern = Pattern {
            name: "phone",
            matches: rules::is_valid_phone,
        };
        const GENDERS: &[&str] = &["male", "female", "other"];

        Self::new(vec![
            FieldSchema::new(Field::Name, InputKind::Text)
                .required("Name is Required!")
                .check(
                    Rule::Length { min: 6, max: 18 },
                    "Min 6 and Max 18 characters required",
                ),
            FieldSchema::new(Field::Email, InputKind::Email)
                .required("Email is Required!")
                .check(Rule::Pattern(EMAIL), "Enter valid email address"),
            FieldSchema::new(Field::Password, InputKind::Password)
                .required("Password is Required!")
                .check(
                    Rule::Pattern(PASSWORD),
                    "Min 6 and Max 12 characters atleast one letter,one number and no special character",
                ),
            FieldSchema::new(Field::ConfirmPassword, InputKind::Password)
                .required("Confirm Password is Required")
                .cross_field(Rule::EqualsField(Field::Password), "Password doesn't match"),
            FieldSchema::new(Field::Age, InputKind::Number)
                .required("Age is Required")
                .check(Rule::Number, "Age must be a number")
                .check(Rule::Positive, "Age must be positive")
                .check(Rule::Integer, "Age must be a Integer")
                .check(
                    Rule::Range { min: 18, max: 60 },
                    "Age must be 18 above and 60 below",
                ),
            FieldSchema::new(Field::Gender, InputKind::Select(GENDERS))
                .required("Gender is Required")
                .check(Rule::OneOf(GENDERS), "Gender must be one of male, female, other"),
            FieldSchema::new(Field::PhoneNo, InputKind::Tel)
                .required("Phone No is Required!")
                .check(Rule::Pattern(PHONE), "Phone No is not valid"),
            FieldSchema::new(Field::Dob, InputKind::Date)
                .required("Date of Birth is Required!")
                .check(
                    Rule::BirthDateWindow,
                    "Eligible Date of birth from 1990 to current day",
                ),
            FieldSchema::new(Field::Checkbox, InputKind::Checkbox)
                .check(Rule::Accepted, "Must Accept the Terms and Conditions"),
            FieldSchema::new(Field::File, InputKind::File)
                .required("photo is required")
                .check(Rule::MaxFileSize(rules::MAX_FILE_SIZE), "File Size is too large")
                .check(
                    Rule::FileTypes(rules::ALLOWED_IMAGE_TYPES),
                    "Unsupported File Format",
                ),
        ])
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::student_registration()
    }
}
