//! Extension tables and client-side validation.
//!
//! Everything here is pure: classification and validation are functions of
//! the filename, the size, and the static tables below.

use thiserror::Error;

use crate::upload::types::{FileCategory, SelectedFile};

const MB: u64 = 1024 * 1024;

/// Byte limit applied when a category has no entry in the table
pub const DEFAULT_SIZE_LIMIT: u64 = 10 * MB;

/// Allowed extensions and byte limit for one category
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: FileCategory,
    pub extensions: &'static [&'static str],
    pub limit: u64,
}

pub const CATEGORY_RULES: [CategoryRule; 5] = [
    CategoryRule {
        category: FileCategory::Image,
        extensions: &["jpg", "jpeg", "png", "gif", "webp"],
        limit: 5 * MB,
    },
    CategoryRule {
        category: FileCategory::Video,
        extensions: &["mp4", "mov", "avi", "mkv", "webm"],
        limit: 100 * MB,
    },
    CategoryRule {
        category: FileCategory::Audio,
        extensions: &["mp3", "wav", "ogg", "flac", "m4a"],
        limit: 20 * MB,
    },
    CategoryRule {
        category: FileCategory::Document,
        extensions: &["pdf", "doc", "docx", "xls", "xlsx"],
        limit: 10 * MB,
    },
    CategoryRule {
        category: FileCategory::Archive,
        extensions: &["zip", "rar", "7z"],
        limit: 50 * MB,
    },
];

/// Why a selected file cannot be uploaded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unsupported file type")]
    UnsupportedType,

    #[error("file size exceeds the limit ({limit_mb}MB)")]
    TooLarge { limit_mb: u64 },
}

/// Maps a filename to a category by its extension; anything the tables do
/// not list is `Other`.
pub fn classify(file_name: &str) -> FileCategory {
    let Some(ext) = extension(file_name) else {
        return FileCategory::Other;
    };
    for rule in &CATEGORY_RULES {
        if rule.extensions.contains(&ext.as_str()) {
            return rule.category;
        }
    }
    FileCategory::Other
}

/// Byte limit for a category, if the table pins one
pub fn size_limit(category: FileCategory) -> Option<u64> {
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.category == category)
        .map(|rule| rule.limit)
}

/// Checks a selected file against the tables. An `Err` display string is
/// exactly what the user sees on the error row.
pub fn validate(file: &SelectedFile) -> Result<(), ValidationError> {
    let category = classify(&file.name);
    if category == FileCategory::Other {
        return Err(ValidationError::UnsupportedType);
    }
    let limit = size_limit(category).unwrap_or(DEFAULT_SIZE_LIMIT);
    if file.size > limit {
        return Err(ValidationError::TooLarge {
            limit_mb: mb_rounded(limit),
        });
    }
    Ok(())
}

fn extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    // a leading dot is not an extension separator
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn mb_rounded(bytes: u64) -> u64 {
    (bytes as f64 / MB as f64).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_covers_every_tabled_extension() {
        for rule in &CATEGORY_RULES {
            for ext in rule.extensions {
                assert_eq!(classify(&format!("file.{ext}")), rule.category);
            }
        }
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify("PHOTO.JPG"), FileCategory::Image);
        assert_eq!(classify("Clip.Mp4"), FileCategory::Video);
    }

    #[test]
    fn unknown_or_missing_extensions_are_other() {
        assert_eq!(classify("malware.exe"), FileCategory::Other);
        assert_eq!(classify("README"), FileCategory::Other);
        assert_eq!(classify(".gitignore"), FileCategory::Other);
        assert_eq!(classify("trailing."), FileCategory::Other);
        assert_eq!(classify("archive.tar.gz"), FileCategory::Other);
    }

    #[test]
    fn small_supported_files_pass() {
        let file = SelectedFile::new("photo.jpg", 1_000_000, "image/jpeg");
        assert_eq!(validate(&file), Ok(()));
    }

    #[test]
    fn sizes_at_the_limit_pass_and_over_it_fail() {
        let at_limit = SelectedFile::new("photo.png", 5 * MB, "image/png");
        assert_eq!(validate(&at_limit), Ok(()));

        let over = SelectedFile::new("photo.png", 5 * MB + 1, "image/png");
        let err = validate(&over).unwrap_err();
        assert_eq!(err, ValidationError::TooLarge { limit_mb: 5 });
        assert!(err.to_string().contains("5MB"));
    }

    #[test]
    fn unsupported_type_message_is_stable() {
        let file = SelectedFile::new("malware.exe", 10, "application/x-msdownload");
        let err = validate(&file).unwrap_err();
        assert_eq!(err, ValidationError::UnsupportedType);
        assert_eq!(err.to_string(), "unsupported file type");
    }

    #[test]
    fn each_category_uses_its_own_limit() {
        let doc = SelectedFile::new("report.pdf", 11 * MB, "application/pdf");
        assert_eq!(
            validate(&doc),
            Err(ValidationError::TooLarge { limit_mb: 10 })
        );

        let archive = SelectedFile::new("bundle.zip", 51 * MB, "application/zip");
        assert_eq!(
            validate(&archive),
            Err(ValidationError::TooLarge { limit_mb: 50 })
        );

        let video = SelectedFile::new("clip.mp4", 99 * MB, "video/mp4");
        assert_eq!(validate(&video), Ok(()));
    }
}
