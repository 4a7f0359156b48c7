//! Core types for the upload pipeline.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Unique identifier for a selected file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(u64);

impl FileId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file-{}", self.0)
    }
}

/// File category derived from the filename extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Image,
    Video,
    Audio,
    Document,
    Archive,
    Other,
}

impl FileCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FileCategory::Image => "image",
            FileCategory::Video => "video",
            FileCategory::Audio => "audio",
            FileCategory::Document => "document",
            FileCategory::Archive => "archive",
            FileCategory::Other => "other",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current state of an upload record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    Pending,
    Uploading { progress: u8 },
    Success { url: String },
    Error { message: String },
}

impl UploadStatus {
    /// Returns true while the record counts against the admission cap
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            UploadStatus::Pending | UploadStatus::Uploading { .. }
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            UploadStatus::Success { .. } | UploadStatus::Error { .. }
        )
    }

    pub fn progress(&self) -> u8 {
        match self {
            UploadStatus::Pending => 0,
            UploadStatus::Uploading { progress } => *progress,
            UploadStatus::Success { .. } => 100,
            UploadStatus::Error { .. } => 0,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            UploadStatus::Success { url } => Some(url),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UploadStatus::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UploadStatus::Pending => "pending",
            UploadStatus::Uploading { .. } => "uploading",
            UploadStatus::Success { .. } => "success",
            UploadStatus::Error { .. } => "error",
        }
    }
}

/// One record per file admitted into the upload list
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub id: FileId,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub category: FileCategory,
    pub status: UploadStatus,
    pub selected_at: Instant,
}

impl UploadFile {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn progress(&self) -> u8 {
        self.status.progress()
    }

    pub fn url(&self) -> Option<&str> {
        self.status.url()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.status.error_message()
    }
}

/// A file handle as delivered by the picker or a window drop: just the
/// metadata needed for admission, no content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Builds a handle from a filesystem path, reading its size from
    /// metadata and guessing the MIME type from the name.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let name = path
            .file_name()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?
            .to_string_lossy()
            .to_string();
        let size = fs::metadata(path)?.len();
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Ok(Self {
            name,
            size,
            mime_type,
        })
    }
}
