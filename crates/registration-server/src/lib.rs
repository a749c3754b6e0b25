//! Registration Server
//!
//! Reference display and input collaborator for `registration-forms`: renders
//! the student registration form with Maud, accepts multipart submissions,
//! and runs each one through a fresh `FormController`.
//!
//! Submits run on the blocking pool: the shared sink is behind a
//! `std::sync::Mutex` and may write to a file.

pub mod error;
pub mod form_context;
pub mod handlers;
pub mod upload;
pub mod views;

use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, routing::{get, post}, Router};
use registration_forms::{
    FormController, FormValidator, JsonSink, RegistrationConfig, SinkKind, SubmissionSink,
    TracingSink,
};
use tower_http::trace::TraceLayer;

/// Destination shared by every request's controller
pub type SharedSink = Arc<Mutex<Box<dyn SubmissionSink + Send>>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub title: String,
    pub body_limit: usize,
    pub validator: FormValidator,
    pub sink: SharedSink,
}

impl AppState {
    pub fn new(config: &RegistrationConfig, validator: FormValidator, sink: SharedSink) -> Self {
        Self {
            title: config.project.title.clone(),
            body_limit: config.upload.max_body_bytes,
            validator,
            sink,
        }
    }

    /// A controller for one submission
    pub fn controller(&self) -> FormController<SharedSink> {
        FormController::with_sink(self.validator.clone(), self.sink.clone())
    }
}

/// Build the sink named in the configuration
pub fn build_sink(config: &RegistrationConfig) -> Result<SharedSink> {
    let sink: Box<dyn SubmissionSink + Send> = match config.submissions.sink {
        SinkKind::Log => Box::new(TracingSink),
        SinkKind::Json => {
            let path = &config.submissions.path;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open submissions file: {:?}", path))?;
            Box::new(JsonSink::new(file))
        }
    };
    Ok(Arc::new(Mutex::new(sink)))
}

/// The application router
pub fn app(state: AppState) -> Router {
    let body_limit = state.body_limit;

    Router::new()
        .route("/", get(handlers::show_form).post(handlers::submit_form))
        .route("/api/validate", post(handlers::validate_json))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
