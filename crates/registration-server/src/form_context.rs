// File: src/form_context.rs
// Purpose: What the form template needs: messages per field and values to re-fill

use std::collections::HashMap;

use registration_forms::{Field, FilePreview, FormState};

/// Errors and retained values for rendering the form
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    /// Field wire names to error messages
    pub errors: HashMap<String, String>,
    /// Field wire names to values to put back into the inputs
    pub values: HashMap<String, String>,
    /// Image shown next to the file input
    pub preview: Option<FilePreview>,
}

impl FormContext {
    /// Create empty form context
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot of a controller's state. Passwords and the file are not
    /// echoed back, as browsers never re-fill them either.
    pub fn from_state(state: &FormState) -> Self {
        let mut values = HashMap::new();

        for field in Field::ALL {
            if matches!(field, Field::Password | Field::ConfirmPassword) {
                continue;
            }
            if let Some(text) = state.record.text(field) {
                values.insert(field.as_str().to_string(), text.to_string());
            }
        }
        if state.checkbox() {
            values.insert(Field::Checkbox.as_str().to_string(), "true".to_string());
        }

        Self {
            errors: state.errors.to_messages(),
            values,
            preview: state.preview.clone(),
        }
    }

    /// Get error message for a field
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field.as_str()).map(|s| s.as_str())
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get retained value for a field, empty if none
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field.as_str()).map(|s| s.as_str()).unwrap_or("")
    }
}
