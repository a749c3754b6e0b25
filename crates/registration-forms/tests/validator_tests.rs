//! Integration tests for FormValidator
//!
//! Covers the field rules, boundaries and cross-field behavior of the
//! student registration form, using a fixed clock so date windows are
//! deterministic.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use pretty_assertions::assert_eq;
use registration_forms::*;
use rstest::{fixture, rstest};

const TODAY: (i32, u32, u32) = (2024, 6, 15);

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(TODAY.0, TODAY.1, TODAY.2).unwrap()
}

#[fixture]
fn validator() -> FormValidator {
    FormValidator::with_clock(Arc::new(FixedClock(today())))
}

#[fixture]
fn record() -> CandidateRecord {
    CandidateRecord {
        name: "Alicia Keys".to_string(),
        email: "alicia.keys@school.edu".to_string(),
        password: "abc123".to_string(),
        confirm_password: "abc123".to_string(),
        age: "21".to_string(),
        gender: "female".to_string(),
        phone_no: "(123) 456-7890".to_string(),
        dob: "2003-02-14".to_string(),
        checkbox: true,
        file: Some(FileDescriptor::new("me.png", 2 * 1024 * 1024, "image/png")),
    }
}

/// Message reported for `field` after setting its raw text
fn message_for(validator: &FormValidator, mut record: CandidateRecord, field: Field, raw: &str) -> Option<String> {
    *record.text_mut(field).unwrap() = raw.to_string();
    match validator.validate(&record) {
        Ok(_) => None,
        Err(errors) => {
            assert_eq!(errors.len(), 1, "only {field} should fail, got {errors:?}");
            errors.message(field).map(str::to_string)
        }
    }
}

#[rstest]
fn test_fully_valid_record_is_accepted(validator: FormValidator, record: CandidateRecord) {
    let accepted = validator.validate(&record).unwrap();
    assert_eq!(accepted.email.as_ref(), "alicia.keys@school.edu");
    assert_eq!(accepted.phone_no.as_ref(), "(123) 456-7890");
    assert_eq!(accepted.gender, Gender::Female);
}

#[rstest]
#[case(Field::Name, "Name is Required!")]
#[case(Field::Email, "Email is Required!")]
#[case(Field::Password, "Password is Required!")]
#[case(Field::ConfirmPassword, "Confirm Password is Required")]
#[case(Field::Age, "Age is Required")]
#[case(Field::Gender, "Gender is Required")]
#[case(Field::PhoneNo, "Phone No is Required!")]
#[case(Field::Dob, "Date of Birth is Required!")]
fn test_missing_text_field(
    validator: FormValidator,
    record: CandidateRecord,
    #[case] field: Field,
    #[case] expected: &str,
) {
    let mut record = record;
    record.text_mut(field).unwrap().clear();

    let errors = validator.validate(&record).unwrap_err();
    assert_eq!(errors.kind(field), Some(ErrorKind::MissingField));
    assert_eq!(errors.message(field), Some(expected));
}

#[rstest]
fn test_missing_field_reported_regardless_of_others(validator: FormValidator) {
    let record = CandidateRecord {
        email: "not an email".to_string(),
        age: "abc".to_string(),
        ..Default::default()
    };

    let errors = validator.validate(&record).unwrap_err();
    assert_eq!(errors.kind(Field::Name), Some(ErrorKind::MissingField));
    assert_eq!(errors.kind(Field::Email), Some(ErrorKind::FormatViolation));
    assert_eq!(errors.message(Field::Age), Some("Age must be a number"));
    assert_eq!(errors.kind(Field::File), Some(ErrorKind::MissingField));
}

#[rstest]
#[case("Alicia", None)]
#[case("Alexandra Smithson", None)]
#[case("Alice", Some("Min 6 and Max 18 characters required"))]
#[case("Alexandra Smithsons", Some("Min 6 and Max 18 characters required"))]
fn test_name_length(
    validator: FormValidator,
    record: CandidateRecord,
    #[case] raw: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(message_for(&validator, record, Field::Name, raw).as_deref(), expected);
}

#[rstest]
#[case("user@example.com", None)]
#[case("first-last@mail.school.info", None)]
#[case("user@example", Some("Enter valid email address"))]
#[case("user@example.museum", Some("Enter valid email address"))]
#[case("@example.com", Some("Enter valid email address"))]
fn test_email_format(
    validator: FormValidator,
    record: CandidateRecord,
    #[case] raw: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(message_for(&validator, record, Field::Email, raw).as_deref(), expected);
}

#[rstest]
#[case("18", None)]
#[case("60", None)]
#[case(" 30 ", None)]
#[case("17", Some("Age must be 18 above and 60 below"))]
#[case("61", Some("Age must be 18 above and 60 below"))]
#[case("18.5", Some("Age must be a Integer"))]
#[case("0", Some("Age must be positive"))]
#[case("-20", Some("Age must be positive"))]
#[case("twenty", Some("Age must be a number"))]
#[case("   ", Some("Age must be a number"))]
#[case("", Some("Age is Required"))]
fn test_age_boundaries(
    validator: FormValidator,
    record: CandidateRecord,
    #[case] raw: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(message_for(&validator, record, Field::Age, raw).as_deref(), expected);
}

#[rstest]
fn test_empty_age_is_missing_not_type_error(validator: FormValidator, record: CandidateRecord) {
    let mut record = record;
    record.age = String::new();

    let errors = validator.validate(&record).unwrap_err();
    assert_eq!(errors.kind(Field::Age), Some(ErrorKind::MissingField));
}

#[rstest]
#[case("male", None)]
#[case("other", None)]
#[case("robot", Some("Gender must be one of male, female, other"))]
fn test_gender_options(
    validator: FormValidator,
    record: CandidateRecord,
    #[case] raw: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(message_for(&validator, record, Field::Gender, raw).as_deref(), expected);
}

#[rstest]
#[case("123-456-7890", None)]
#[case("+123.456.789012", None)]
#[case("123-456-789", Some("Phone No is not valid"))]
#[case("phone", Some("Phone No is not valid"))]
fn test_phone_format(
    validator: FormValidator,
    record: CandidateRecord,
    #[case] raw: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(message_for(&validator, record, Field::PhoneNo, raw).as_deref(), expected);
}

#[rstest]
fn test_dob_boundaries(validator: FormValidator, record: CandidateRecord) {
    const MESSAGE: &str = "Eligible Date of birth from 1990 to current day";
    let tomorrow = today().checked_add_days(Days::new(1)).unwrap();

    let check = |raw: String| message_for(&validator, record.clone(), Field::Dob, &raw);

    assert_eq!(check("1990-01-01".to_string()), None);
    assert_eq!(check(today().format("%Y-%m-%d").to_string()), None);
    assert_eq!(check("1989-12-31".to_string()).as_deref(), Some(MESSAGE));
    assert_eq!(check(tomorrow.format("%Y-%m-%d").to_string()).as_deref(), Some(MESSAGE));
    assert_eq!(check("14/02/2003".to_string()).as_deref(), Some(MESSAGE));
}

#[rstest]
fn test_dob_today_follows_the_clock(record: CandidateRecord) {
    let mut record = record;
    record.dob = "2024-06-16".to_string();

    let before = FormValidator::with_clock(Arc::new(FixedClock(today())));
    assert!(before.validate(&record).is_err());

    let next_day = today().checked_add_days(Days::new(1)).unwrap();
    let after = FormValidator::with_clock(Arc::new(FixedClock(next_day)));
    assert!(after.validate(&record).is_ok());
}

#[rstest]
fn test_password_mismatch_is_only_cross_field_error(validator: FormValidator, record: CandidateRecord) {
    let mut record = record;
    record.password = "abc123".to_string();
    record.confirm_password = "abc124".to_string();

    let errors = validator.validate(&record).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.kind(Field::ConfirmPassword), Some(ErrorKind::CrossFieldMismatch));
    assert_eq!(errors.message(Field::ConfirmPassword), Some("Password doesn't match"));
}

#[rstest]
fn test_confirmation_compares_independent_of_format(validator: FormValidator, record: CandidateRecord) {
    let mut record = record;
    record.password = "bad!".to_string();
    record.confirm_password = "bad!".to_string();

    let errors = validator.validate(&record).unwrap_err();
    assert!(errors.contains(Field::Password));
    assert!(!errors.contains(Field::ConfirmPassword));
}

#[rstest]
fn test_unticked_terms(validator: FormValidator, record: CandidateRecord) {
    let mut record = record;
    record.checkbox = false;

    let errors = validator.validate(&record).unwrap_err();
    assert_eq!(errors.message(Field::Checkbox), Some("Must Accept the Terms and Conditions"));
}

#[rstest]
#[case(5_242_880, "image/png", None)]
#[case(5_242_881, "image/png", Some("File Size is too large"))]
#[case(1024, "image/gif", Some("Unsupported File Format"))]
#[case(1024, "image/jpg", None)]
#[case(1024, "image/jpeg", None)]
#[case(0, "image/png", Some("photo is required"))]
#[case(6_000_000, "image/gif", Some("File Size is too large"))]
fn test_file_rules(
    validator: FormValidator,
    record: CandidateRecord,
    #[case] size: u64,
    #[case] mime_type: &str,
    #[case] expected: Option<&str>,
) {
    let mut record = record;
    record.file = Some(FileDescriptor::new("upload", size, mime_type));

    let message = validator.validate(&record).err().and_then(|errors| {
        errors.message(Field::File).map(str::to_string)
    });
    assert_eq!(message.as_deref(), expected);
}

#[rstest]
fn test_no_file_is_missing(validator: FormValidator, record: CandidateRecord) {
    let mut record = record;
    record.file = None;

    let errors = validator.validate(&record).unwrap_err();
    assert_eq!(errors.kind(Field::File), Some(ErrorKind::MissingField));
    assert_eq!(errors.message(Field::File), Some("photo is required"));
}

#[rstest]
fn test_validation_is_idempotent(validator: FormValidator, record: CandidateRecord) {
    assert_eq!(validator.validate(&record), validator.validate(&record));

    let broken = CandidateRecord {
        age: "17".to_string(),
        confirm_password: "nope".to_string(),
        ..record
    };
    assert_eq!(validator.validate(&broken), validator.validate(&broken));
}

#[rstest]
fn test_error_map_json(validator: FormValidator, record: CandidateRecord) {
    let broken = CandidateRecord {
        age: "61".to_string(),
        checkbox: false,
        ..record
    };

    let errors = validator.validate(&broken).unwrap_err();
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        serde_json::json!({
            "age": "Age must be 18 above and 60 below",
            "checkbox": "Must Accept the Terms and Conditions",
        })
    );
}
