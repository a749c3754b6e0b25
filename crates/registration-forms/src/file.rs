// File: src/file.rs
// Purpose: Selected attachment metadata, local file inspection and image previews

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use registration_validation::MAX_FILE_SIZE;
use serde::{Deserialize, Serialize};

/// Fallback when neither the caller nor the extension names a MIME type
pub const OCTET_STREAM: &str = "application/octet-stream";

/// What the form knows about a selected file: its name, byte size and
/// declared MIME type. Serializes as `{"name", "size", "type"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Inspect a local file: size from the filesystem, MIME type guessed
    /// from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FileReadError> {
        let path = path.as_ref();

        let metadata = fs::metadata(path).map_err(|source| FileReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if !metadata.is_file() {
            return Err(FileReadError::NotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(OCTET_STREAM);

        Ok(Self::new(name, metadata.len(), mime_type))
    }
}

/// The selected file could not be read or inspected.
///
/// The form treats this exactly like "no file selected".
#[derive(Debug, thiserror::Error)]
pub enum FileReadError {
    #[error("failed to inspect {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a regular file", .0.display())]
    NotAFile(PathBuf),

    #[error("failed to read upload {name:?}: {reason}")]
    Upload { name: String, reason: String },
}

/// A picked file: its metadata and, when it was small enough to keep,
/// its bytes. Only files within the form's size limit are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub descriptor: FileDescriptor,
    pub contents: Option<Vec<u8>>,
}

impl FileSelection {
    pub fn new(descriptor: FileDescriptor, contents: Vec<u8>) -> Self {
        let contents = (contents.len() as u64 <= MAX_FILE_SIZE).then_some(contents);
        Self { descriptor, contents }
    }

    /// Inspect a local file and read it if it is within the size limit
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FileReadError> {
        let path = path.as_ref();
        let descriptor = FileDescriptor::from_path(path)?;

        if descriptor.size > MAX_FILE_SIZE {
            return Ok(descriptor.into());
        }

        let contents = fs::read(path).map_err(|source| FileReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(descriptor, contents))
    }
}

impl From<FileDescriptor> for FileSelection {
    fn from(descriptor: FileDescriptor) -> Self {
        Self {
            descriptor,
            contents: None,
        }
    }
}

/// The selected image as a `data:` URL, usable directly as an `img` source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePreview {
    pub url: String,
    pub file_name: String,
}

impl FilePreview {
    pub fn new(descriptor: &FileDescriptor, contents: &[u8]) -> Self {
        let mime_type = if descriptor.mime_type.is_empty() {
            OCTET_STREAM
        } else {
            descriptor.mime_type.as_str()
        };

        Self {
            url: format!("data:{};base64,{}", mime_type, STANDARD.encode(contents)),
            file_name: descriptor.name.clone(),
        }
    }

    /// Preview of a selection, if its bytes were kept
    pub fn of(selection: &FileSelection) -> Option<Self> {
        selection
            .contents
            .as_deref()
            .map(|contents| Self::new(&selection.descriptor, contents))
    }
}

/// A file currently held by the form, with its preview if there is one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub descriptor: FileDescriptor,
    pub preview: Option<FilePreview>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_path_reads_size_and_guesses_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portrait.png");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0u8; 2048]).unwrap();

        let descriptor = FileDescriptor::from_path(&path).unwrap();
        assert_eq!(descriptor.name, "portrait.png");
        assert_eq!(descriptor.size, 2048);
        assert_eq!(descriptor.mime_type, "image/png");
    }

    #[test]
    fn test_from_path_jpeg_and_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();

        let jpg = dir.path().join("photo.jpg");
        fs::write(&jpg, b"jpeg").unwrap();
        assert_eq!(FileDescriptor::from_path(&jpg).unwrap().mime_type, "image/jpeg");

        let unknown = dir.path().join("blob.zzzunknown");
        fs::write(&unknown, b"?").unwrap();
        assert_eq!(FileDescriptor::from_path(&unknown).unwrap().mime_type, OCTET_STREAM);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileDescriptor::from_path(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, FileReadError::Io { .. }));
    }

    #[test]
    fn test_from_path_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileDescriptor::from_path(dir.path()).unwrap_err();
        assert!(matches!(err, FileReadError::NotAFile(_)));
    }

    #[test]
    fn test_descriptor_json_uses_type_key() {
        let descriptor = FileDescriptor::new("a.png", 10, "image/png");
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json, serde_json::json!({"name": "a.png", "size": 10, "type": "image/png"}));
    }

    #[test]
    fn test_preview_encodes_contents() {
        let descriptor = FileDescriptor::new("a.png", 3, "image/png");
        let preview = FilePreview::new(&descriptor, b"png");

        assert_eq!(preview.url, "data:image/png;base64,cG5n");
        assert_eq!(preview.file_name, "a.png");
    }

    #[test]
    fn test_preview_without_declared_type() {
        let descriptor = FileDescriptor::new("a", 1, "");
        let preview = FilePreview::new(&descriptor, b"?");
        assert!(preview.url.starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn test_selection_from_path_keeps_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.jpg");
        fs::write(&path, b"jpeg bytes").unwrap();

        let selection = FileSelection::from_path(&path).unwrap();
        assert_eq!(selection.descriptor.mime_type, "image/jpeg");
        assert_eq!(selection.contents.as_deref(), Some(&b"jpeg bytes"[..]));

        let preview = FilePreview::of(&selection).unwrap();
        assert_eq!(preview.url, format!("data:image/jpeg;base64,{}", STANDARD.encode(b"jpeg bytes")));
    }

    #[test]
    fn test_oversized_selection_drops_bytes() {
        let descriptor = FileDescriptor::new("big.png", MAX_FILE_SIZE + 1, "image/png");
        let selection = FileSelection::new(descriptor, vec![0u8; MAX_FILE_SIZE as usize + 1]);

        assert!(selection.contents.is_none());
        assert!(FilePreview::of(&selection).is_none());
    }

    #[test]
    fn test_metadata_only_selection_has_no_preview() {
        let selection = FileSelection::from(FileDescriptor::new("a.png", 10, "image/png"));
        assert!(FilePreview::of(&selection).is_none());
    }
}
