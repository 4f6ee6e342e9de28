//! In-memory file uploads keyed by logical slot name.
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted upload, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// MIME types the backend accepts for client documents.
pub const ALLOWED_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "application/pdf"];

/// Well-known upload slots on the documents tab.
pub const CR_COPY_SLOT: &str = "crCopy";
pub const VAT_CERTIFICATE_SLOT: &str = "vatCertificate";
pub const COMPANY_PROFILE_SLOT: &str = "companyProfile";

/// Errors raised when a selected file violates upload constraints.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("file exceeds the {} MiB limit", MAX_UPLOAD_BYTES / (1024 * 1024))]
    TooLarge,

    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("file name cannot be empty")]
    EmptyFileName,
}

/// A file held in memory until final submission.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Checks size, MIME type, and name before accepting the file.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, UploadError> {
        let file_name = file_name.into();
        let content_type = content_type.into();
        if file_name.trim().is_empty() {
            return Err(UploadError::EmptyFileName);
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge);
        }
        if !ALLOWED_CONTENT_TYPES.contains(&content_type.as_str()) {
            return Err(UploadError::UnsupportedType(content_type));
        }
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    /// Stages the bytes into a temporary file for preview or download.
    ///
    /// The returned guard deletes the staged file when dropped, on every exit
    /// path.
    pub fn stage(&self) -> std::io::Result<StagedFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(&self.bytes)?;
        file.flush()?;
        Ok(StagedFile { inner: file })
    }
}

/// A previewable on-disk copy of an upload, removed on drop.
#[derive(Debug)]
pub struct StagedFile {
    inner: tempfile::NamedTempFile,
}

impl StagedFile {
    /// Path of the staged copy while the guard is alive.
    pub fn path(&self) -> &Path {
        self.inner.path()
    }
}

/// Flat map from logical slot name to the single file held for that slot.
///
/// Re-selecting a slot overwrites the previous file; a rejected selection
/// leaves the map untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadSlots {
    files: BTreeMap<String, FileUpload>,
}

impl UploadSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a file under `slot`, replacing any prior file.
    pub fn attach(
        &mut self,
        slot: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<(), UploadError> {
        let file = FileUpload::new(file_name, content_type, bytes)?;
        self.files.insert(slot.into(), file);
        Ok(())
    }

    /// Removes a slot, returning the file that occupied it.
    pub fn remove(&mut self, slot: &str) -> Option<FileUpload> {
        self.files.remove(slot)
    }

    pub fn get(&self, slot: &str) -> Option<&FileUpload> {
        self.files.get(slot)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Iterates slots in deterministic (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileUpload)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
