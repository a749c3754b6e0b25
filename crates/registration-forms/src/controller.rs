// File: src/controller.rs
// Purpose: FormController - owns interaction state and mediates UI events and FormValidator

use std::path::Path;

use registration_validation::is_checked;
use tracing::{debug, error, info, warn};

use crate::error::ErrorMap;
use crate::field::Field;
use crate::file::{FilePreview, FileReadError, FileSelection, SelectedFile};
use crate::record::{CandidateRecord, StudentRecord};
use crate::sink::{SubmissionSink, TracingSink};
use crate::validator::FormValidator;

/// Mutable interaction state of one form.
///
/// Only `FormController` mutates it; everything else reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Raw values in progress, including checkbox, gender and file metadata
    pub record: CandidateRecord,
    /// Preview for the selected file
    pub preview: Option<FilePreview>,
    /// Errors of the last rejected submission
    pub errors: ErrorMap,
    /// Records accepted so far
    pub accepted: u64,
}

impl FormState {
    pub fn checkbox(&self) -> bool {
        self.record.checkbox
    }

    pub fn gender(&self) -> &str {
        &self.record.gender
    }

    pub fn selected_file(&self) -> Option<SelectedFile> {
        self.record.file.as_ref().map(|descriptor| SelectedFile {
            descriptor: descriptor.clone(),
            preview: self.preview.clone(),
        })
    }

    /// Back to an empty form; the accepted counter survives
    fn reset(&mut self) {
        self.record = CandidateRecord::default();
        self.preview = None;
        self.errors = ErrorMap::new();
    }
}

/// Result of one submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validated, emitted to the sink, form cleared
    Accepted(StudentRecord),
    /// Rejected in full; input retained for correction
    Rejected(ErrorMap),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            SubmitOutcome::Rejected(errors) => Some(errors),
            SubmitOutcome::Accepted(_) => None,
        }
    }
}

/// Collects raw input into a Candidate Record, runs the validator on
/// submit, and either clears the form and emits the record or keeps the
/// input and exposes the errors.
pub struct FormController<S: SubmissionSink = TracingSink> {
    validator: FormValidator,
    state: FormState,
    sink: S,
}

impl FormController<TracingSink> {
    pub fn new() -> Self {
        Self::with_sink(FormValidator::new(), TracingSink)
    }
}

impl Default for FormController<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SubmissionSink> FormController<S> {
    pub fn with_sink(validator: FormValidator, sink: S) -> Self {
        Self {
            validator,
            state: FormState::default(),
            sink,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Errors of the last rejected submission
    pub fn errors(&self) -> &ErrorMap {
        &self.state.errors
    }

    /// Message to show next to a field
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.state.errors.message(field)
    }

    /// Update one field's raw value. No validation happens here.
    ///
    /// The checkbox takes `"true"`/`"on"`/`"1"` as ticked. Files go through
    /// [`Self::on_file_selected`]; a text value for `file` is ignored.
    pub fn on_field_change(&mut self, field: Field, raw: impl Into<String>) {
        let raw = raw.into();
        debug!(field = %field, "field changed");

        match field {
            Field::Checkbox => self.state.record.checkbox = is_checked(&raw),
            Field::File => warn!("ignoring text value for the file field"),
            text => {
                if let Some(slot) = self.state.record.text_mut(text) {
                    *slot = raw;
                }
            }
        }
    }

    /// Flip the terms checkbox, as a click does
    pub fn toggle_checkbox(&mut self) {
        self.state.record.checkbox = !self.state.record.checkbox;
    }

    /// Store a file selection and derive its preview from the kept bytes.
    ///
    /// Size and type are not checked here. A failed read clears the
    /// selection, so the next submit reports the file as missing.
    pub fn on_file_selected(&mut self, selection: Result<FileSelection, FileReadError>) {
        match selection {
            Ok(selection) => {
                let descriptor = &selection.descriptor;
                debug!(file = %descriptor.name, size = descriptor.size, "file selected");
                self.state.preview = FilePreview::of(&selection);
                self.state.record.file = Some(selection.descriptor);
            }
            Err(err) => {
                warn!(error = %err, "file selection could not be read");
                self.state.preview = None;
                self.state.record.file = None;
            }
        }
    }

    /// Read a local file and select it
    pub fn select_file_path(&mut self, path: impl AsRef<Path>) {
        self.on_file_selected(FileSelection::from_path(path));
    }

    /// Validate the current state.
    ///
    /// Accepted: the record goes to the sink and the form is cleared.
    /// Rejected: the errors are stored and the input is left untouched.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        match self.validator.validate(&self.state.record) {
            Ok(record) => {
                if let Err(err) = self.sink.emit(&record) {
                    error!(error = %err, "submission sink failed");
                }
                self.state.reset();
                self.state.accepted += 1;
                info!(accepted = self.state.accepted, "registration submitted");
                SubmitOutcome::Accepted(record)
            }
            Err(errors) => {
                debug!(errors = errors.len(), "registration rejected");
                self.state.errors = errors.clone();
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Replace the in-progress record wholesale, then submit it.
    ///
    /// The record carries file metadata only, so a different file drops
    /// the preview.
    pub fn on_submit_record(&mut self, record: CandidateRecord) -> SubmitOutcome {
        if record.file != self.state.record.file {
            self.state.preview = None;
        }
        self.state.record = record;
        self.on_submit()
    }
}
