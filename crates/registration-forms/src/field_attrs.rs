// File: src/field_attrs.rs
// Purpose: HTML5 input attributes derived from the rule table

use chrono::NaiveDate;
use registration_validation::EARLIEST_BIRTH_DATE;

use crate::schema::{FieldSchema, InputKind, Rule};

/// HTML5 attributes for one form input, so browser-side constraints mirror
/// the server-side rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAttrs {
    pub name: &'static str,
    pub label: &'static str,
    /// `type` attribute; `"select"` for the gender dropdown
    pub input_type: &'static str,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub accept: Option<String>,
    /// Choices for select inputs
    pub options: &'static [&'static str],
}

impl FieldAttrs {
    /// Derive attributes from a field's rules. `today` bounds date inputs.
    pub fn from_schema(schema: &FieldSchema, today: NaiveDate) -> Self {
        let mut attrs = Self {
            name: schema.field.as_str(),
            label: schema.field.label(),
            input_type: input_type(schema.input),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            accept: None,
            options: match schema.input {
                InputKind::Select(options) => options,
                _ => &[],
            },
        };

        for rule in &schema.rules {
            match rule.rule {
                Rule::Required => attrs.required = true,
                Rule::Length { min, max } => {
                    attrs.min_length = Some(min);
                    attrs.max_length = Some(max);
                }
                Rule::Range { min, max } => {
                    attrs.min = Some(min.to_string());
                    attrs.max = Some(max.to_string());
                }
                Rule::BirthDateWindow => {
                    attrs.min = Some(EARLIEST_BIRTH_DATE.format("%Y-%m-%d").to_string());
                    attrs.max = Some(today.format("%Y-%m-%d").to_string());
                }
                Rule::FileTypes(types) => attrs.accept = Some(types.join(",")),
                _ => {}
            }
        }

        attrs
    }
}

fn input_type(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Text => "text",
        InputKind::Email => "email",
        InputKind::Password => "password",
        InputKind::Number => "number",
        InputKind::Select(_) => "select",
        InputKind::Tel => "tel",
        InputKind::Date => "date",
        InputKind::Checkbox => "checkbox",
        InputKind::File => "file",
    }
}
