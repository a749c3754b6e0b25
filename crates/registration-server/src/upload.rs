// File: src/upload.rs
// Purpose: Feed a multipart/form-data submission into a FormController

use axum::{
    extract::multipart::{Field as Part, Multipart, MultipartError},
    http::StatusCode,
};
use registration_forms::{
    Field, FileDescriptor, FileReadError, FileSelection, FormController, SubmissionSink,
    MAX_FILE_SIZE,
};
use tracing::{debug, warn};

use crate::error::AppError;

/// Apply every part of the body to the controller: text parts as field
/// changes, the `file` part as a file selection. Unknown parts are ignored.
///
/// Hitting the body limit ends the read; whatever was read so far is kept
/// and a file cut off by the limit is selected as oversized.
pub async fn apply_multipart<S: SubmissionSink>(
    form: &mut FormController<S>,
    mut multipart: Multipart,
) -> Result<(), AppError> {
    loop {
        let part = match multipart.next_field().await {
            Ok(Some(part)) => part,
            Ok(None) => break,
            Err(err) if over_body_limit(&err) => {
                warn!("request body limit reached between parts");
                break;
            }
            Err(err) => return Err(AppError::BadRequest(err.body_text())),
        };

        let name = part.name().unwrap_or_default().to_string();
        let field = match name.parse::<Field>() {
            Ok(field) => field,
            Err(_) => {
                debug!(part = %name, "ignoring unknown form part");
                continue;
            }
        };

        if field == Field::File {
            match read_file_part(part).await {
                FilePart::Empty => {}
                FilePart::Read(selection) => form.on_file_selected(selection),
                FilePart::OverLimit(selection) => {
                    warn!(file = %selection.descriptor.name, "upload cut off by the body limit");
                    form.on_file_selected(Ok(selection));
                    break;
                }
            }
        } else {
            match part.text().await {
                Ok(text) => form.on_field_change(field, text),
                Err(err) if over_body_limit(&err) => {
                    warn!(field = %field, "request body limit reached in a text part");
                    break;
                }
                Err(err) => return Err(AppError::BadRequest(err.body_text())),
            }
        }
    }

    Ok(())
}

fn over_body_limit(err: &MultipartError) -> bool {
    err.status() == StatusCode::PAYLOAD_TOO_LARGE
}

enum FilePart {
    /// The empty part browsers post for "no file chosen"
    Empty,
    Read(Result<FileSelection, FileReadError>),
    /// Stopped by the body limit; only known to be too large
    OverLimit(FileSelection),
}

/// Read an uploaded file. Bytes are kept while the file is within the
/// form's size limit, for the preview; past that only the count goes on.
async fn read_file_part(mut part: Part<'_>) -> FilePart {
    let file_name = part.file_name().unwrap_or_default().to_string();
    let mime_type = part
        .content_type()
        .map(str::to_string)
        .unwrap_or_default();

    let mut size: u64 = 0;
    let mut contents = Some(Vec::new());
    loop {
        match part.chunk().await {
            Ok(Some(chunk)) => {
                size += chunk.len() as u64;
                if size > MAX_FILE_SIZE {
                    contents = None;
                } else if let Some(buffer) = contents.as_mut() {
                    buffer.extend_from_slice(&chunk);
                }
            }
            Ok(None) => break,
            Err(err) if over_body_limit(&err) => {
                let descriptor = FileDescriptor::new(file_name, size.max(MAX_FILE_SIZE + 1), mime_type);
                return FilePart::OverLimit(descriptor.into());
            }
            Err(err) => {
                return FilePart::Read(Err(FileReadError::Upload {
                    name: file_name,
                    reason: err.body_text(),
                }))
            }
        }
    }

    if file_name.is_empty() && size == 0 {
        return FilePart::Empty;
    }

    let descriptor = FileDescriptor::new(file_name, size, mime_type);
    FilePart::Read(Ok(match contents {
        Some(contents) => FileSelection::new(descriptor, contents),
        None => descriptor.into(),
    }))
}
