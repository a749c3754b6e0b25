// File: src/handlers.rs
// Purpose: HTTP handlers - render the form, accept submissions

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use registration_forms::{CandidateRecord, FormController, StudentRecord, SubmitOutcome};
use serde_json::json;

use crate::error::AppError;
use crate::form_context::FormContext;
use crate::upload::apply_multipart;
use crate::views;
use crate::{AppState, SharedSink};

type Controller = FormController<SharedSink>;

/// GET / - empty form
pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    Html(views::registration_form(&state.title, &state.validator, &FormContext::empty()).into_string())
}

/// POST / - multipart submission from the form
pub async fn submit_form(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let mut form = state.controller();
    apply_multipart(&mut form, multipart).await?;

    // the accepted submit clears the preview, so take it first
    let preview = form.state().preview.clone();
    let (form, outcome) = submit_blocking(form, Controller::on_submit).await?;

    match outcome {
        SubmitOutcome::Accepted(record) => {
            let body = views::accepted(&state.title, &display_json(&record)?, preview.as_ref());
            Ok(Html(body.into_string()).into_response())
        }
        SubmitOutcome::Rejected(_) => {
            let context = FormContext::from_state(form.state());
            let body = views::registration_form(&state.title, &state.validator, &context);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(body.into_string())).into_response())
        }
    }
}

/// POST /api/validate - JSON Candidate Record in, verdict out
pub async fn validate_json(
    State(state): State<AppState>,
    Json(record): Json<CandidateRecord>,
) -> Result<Response, AppError> {
    let form = state.controller();
    let (_, outcome) = submit_blocking(form, move |form| form.on_submit_record(record)).await?;

    Ok(match outcome {
        SubmitOutcome::Accepted(record) => {
            Json(json!({ "valid": true, "record": record })).into_response()
        }
        SubmitOutcome::Rejected(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "valid": false, "errors": errors })),
        )
            .into_response(),
    })
}

/// Run a submit on the blocking pool, handing the controller back
async fn submit_blocking<F>(mut form: Controller, submit: F) -> Result<(Controller, SubmitOutcome), AppError>
where
    F: FnOnce(&mut Controller) -> SubmitOutcome + Send + 'static,
{
    let joined = tokio::task::spawn_blocking(move || {
        let outcome = submit(&mut form);
        (form, outcome)
    })
    .await?;
    Ok(joined)
}

/// Accepted record as pretty JSON, without the password
fn display_json(record: &StudentRecord) -> Result<String, AppError> {
    let mut value = serde_json::to_value(record)?;
    if let Some(object) = value.as_object_mut() {
        object.remove("password");
    }
    Ok(serde_json::to_string_pretty(&value)?)
}
