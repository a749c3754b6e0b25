// File: src/views.rs
// Purpose: Maud templates for the registration page

use maud::{html, Markup, DOCTYPE};
use registration_forms::{Field, FieldAttrs, FilePreview, FormValidator, Gender};

use crate::form_context::FormContext;

const STYLE: &str = "
body { font-family: sans-serif; display: flex; flex-direction: column; align-items: center; }
h2 { color: darkblue; margin: 18px; }
form { width: 50%; margin: 0 auto; }
.fields { display: grid; grid-template-columns: auto auto; grid-gap: 12px; }
.field { display: flex; flex-direction: column; }
.field.invalid input, .field.invalid select { border-color: rgb(218, 50, 54); }
p.error { color: rgb(218, 50, 54); font-size: 13px; margin: 0 0 8px 16px; }
.avatar { width: 3rem; height: 3rem; border-radius: 50%; object-fit: cover; background: #bdbdbd; display: inline-block; }
button { background-color: darkblue; color: white; width: 40%; margin: 6px auto; display: block; }
";

/// Base layout
pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (STYLE) }
            }
            body {
                h2 { (title) }
                (body)
            }
        }
    }
}

/// The registration form, with retained values and per-field messages
pub fn registration_form(title: &str, validator: &FormValidator, context: &FormContext) -> Markup {
    let today = validator.today();
    let attrs: Vec<FieldAttrs> = validator
        .schema()
        .fields()
        .iter()
        .map(|schema| FieldAttrs::from_schema(schema, today))
        .collect();
    let (terms, inputs): (Vec<&FieldAttrs>, Vec<&FieldAttrs>) =
        attrs.iter().partition(|a| a.name == Field::Checkbox.as_str());

    page(
        title,
        html! {
            form method="post" action="/" enctype="multipart/form-data" novalidate {
                div.fields {
                    @for attrs in &inputs {
                        (field_input(attrs, context))
                    }
                }
                @for attrs in &terms {
                    (terms_checkbox(attrs, context))
                }
                button type="submit" { "Submit" }
            }
        },
    )
}

fn field_input(attrs: &FieldAttrs, context: &FormContext) -> Markup {
    let field = attrs.name.parse::<Field>().ok();
    let value = field.map(|f| context.value(f)).unwrap_or("");
    let error = field.and_then(|f| context.error(f));

    html! {
        div.field.invalid[error.is_some()] {
            label for=(attrs.name) { (attrs.label) }
            @match attrs.input_type {
                "select" => {
                    select id=(attrs.name) name=(attrs.name) required[attrs.required] {
                        option value="" { "Select..." }
                        @for option in attrs.options {
                            option value=(option) selected[*option == value] {
                                (option_label(option))
                            }
                        }
                    }
                }
                "file" => {
                    input type="file" id=(attrs.name) name=(attrs.name)
                        required[attrs.required] accept=[attrs.accept.as_deref()];
                    (avatar(context.preview.as_ref()))
                }
                "password" => {
                    input type="password" id=(attrs.name) name=(attrs.name)
                        required[attrs.required]
                        minlength=[attrs.min_length] maxlength=[attrs.max_length];
                }
                input_type => {
                    input type=(input_type) id=(attrs.name) name=(attrs.name) value=(value)
                        required[attrs.required]
                        minlength=[attrs.min_length] maxlength=[attrs.max_length]
                        min=[attrs.min.as_deref()] max=[attrs.max.as_deref()];
                }
            }
            @if let Some(message) = error {
                p.error { (message) }
            }
        }
    }
}

fn terms_checkbox(attrs: &FieldAttrs, context: &FormContext) -> Markup {
    let checked = context.value(Field::Checkbox) == "true";
    let error = context.error(Field::Checkbox);

    html! {
        div.terms {
            input type="checkbox" id=(attrs.name) name=(attrs.name) value="on" checked[checked];
            " "
            label for=(attrs.name) { (attrs.label) }
            @if let Some(message) = error {
                p.error { (message) }
            }
        }
    }
}

/// Profile picture of the selected file, or an empty placeholder
fn avatar(preview: Option<&FilePreview>) -> Markup {
    html! {
        @if let Some(preview) = preview {
            img.avatar src=(preview.url) alt="Profile.pic" title=(preview.file_name);
        } @else {
            span.avatar {}
        }
    }
}

fn option_label(value: &str) -> &str {
    value.parse::<Gender>().map(|g| g.label()).unwrap_or(value)
}

/// Page shown after an accepted submission
pub fn accepted(title: &str, record_json: &str, preview: Option<&FilePreview>) -> Markup {
    page(
        title,
        html! {
            (avatar(preview))
            p { "Registration accepted." }
            pre { (record_json) }
            a href="/" { "Register another student" }
        },
    )
}
