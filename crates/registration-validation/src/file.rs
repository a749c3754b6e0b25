//! Attachment validation functions

/// Largest accepted upload, in bytes (5 MiB)
pub const MAX_FILE_SIZE: u64 = 5_242_880;

/// MIME types accepted for the profile photo
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg"];

/// A selection with no bytes counts as no selection
pub fn is_present(size: u64) -> bool {
    size > 0
}

/// Validates size against [`MAX_FILE_SIZE`], inclusive
pub fn within_size_limit(size: u64) -> bool {
    size <= MAX_FILE_SIZE
}

/// Validates the declared MIME type against [`ALLOWED_IMAGE_TYPES`]
pub fn is_allowed_image_type(mime_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&mime_type)
}
