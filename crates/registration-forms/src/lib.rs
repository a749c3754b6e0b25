//! Registration Forms
//!
//! The student registration form without its presentation layer:
//!
//! - [`FormSchema`]: declarative table of named field rules
//! - [`FormValidator`]: validates a [`CandidateRecord`] in one pass and returns
//!   either a normalized [`StudentRecord`] or the complete [`ErrorMap`]
//! - [`FormController`]: owns the interaction state, funnels every change
//!   through its operations, and clears the form only after an accepted submit
//!
//! ```rust,ignore
//! use registration_forms::{Field, FormController, SubmitOutcome};
//!
//! let mut form = FormController::new();
//! form.on_field_change(Field::Name, "Alicia Keys");
//! form.select_file_path("me.png");
//! match form.on_submit() {
//!     SubmitOutcome::Accepted(record) => println!("{}", record.name),
//!     SubmitOutcome::Rejected(errors) => println!("{:?}", errors.message(Field::Email)),
//! }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod field_attrs;
pub mod file;
pub mod record;
pub mod schema;
pub mod sink;
pub mod validator;

pub use config::{RegistrationConfig, SinkKind};
pub use controller::{FormController, FormState, SubmitOutcome};
pub use error::{ErrorKind, ErrorMap, FieldError};
pub use field::{Field, UnknownField};
pub use field_attrs::FieldAttrs;
pub use file::{FileDescriptor, FilePreview, FileReadError, FileSelection, SelectedFile};
pub use record::{CandidateRecord, FieldValue, StudentRecord};
pub use schema::{FieldRule, FieldSchema, FormSchema, InputKind, Pattern, Rule};
pub use sink::{JsonSink, MemorySink, SubmissionSink, TracingSink};
pub use validator::{Clock, FixedClock, FormValidator, SystemClock};
pub use registration_validation::MAX_FILE_SIZE;

// Value types of accepted records
pub use registration_types::{Age, EmailAddress, Gender, Password, PhoneNumber, StudentName};
