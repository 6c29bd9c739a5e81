//! File policy checks run before anything is uploaded.
//!
//! - [`FileSizePolicy`] - per-category byte limits
//! - [`validate_file_size`] - classify and size-check a file
//! - [`format_bytes`] - human-readable sizes for messages
//! - [`strip_extension`] - default title from a file name

use crate::config::{IMAGE_MAX_BYTES, PDF_MAX_BYTES, VIDEO_MAX_BYTES};
use crate::error::ValidationError;
use crate::types::FileCategory;

/// Static mapping from content category to maximum byte size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileSizePolicy {
    pub pdf: u64,
    pub image: u64,
    pub video: u64,
}

impl Default for FileSizePolicy {
    fn default() -> Self {
        Self {
            pdf: PDF_MAX_BYTES,
            image: IMAGE_MAX_BYTES,
            video: VIDEO_MAX_BYTES,
        }
    }
}

impl FileSizePolicy {
    /// Byte limit for a category, `None` when the category is never accepted.
    pub fn limit_for(&self, category: FileCategory) -> Option<u64> {
        match category {
            FileCategory::Pdf => Some(self.pdf),
            FileCategory::Image => Some(self.image),
            FileCategory::Video => Some(self.video),
            FileCategory::Unsupported => None,
        }
    }

    /// Check a file against this policy.
    ///
    /// Unsupported types are rejected without looking at the size.
    pub fn check(&self, mime_type: &str, size: u64) -> Result<FileCategory, ValidationError> {
        let category = FileCategory::from_mime(mime_type);
        let limit = self.limit_for(category).ok_or_else(|| ValidationError::Unsupported {
            mime_type: mime_type.to_string(),
        })?;

        if size > limit {
            return Err(ValidationError::TooLarge {
                category,
                limit,
                actual: size,
            });
        }

        Ok(category)
    }
}

/// Validate a file against the default policy.
pub fn validate_file_size(mime_type: &str, size: u64) -> Result<FileCategory, ValidationError> {
    FileSizePolicy::default().check(mime_type, size)
}

/// Format a byte count with base-1024 units (B, KB, MB, GB).
///
/// Values are rounded to two decimals and trailing zeros are dropped:
/// `1536` gives `"1.5 KB"`, `31457280` gives `"30 MB"`.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

/// Remove the last dot-delimited suffix of a file name.
///
/// `report.final.pdf` becomes `report.final`. Names without a dot are kept
/// as they are, and so are dotfiles like `.env`.
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    }
}
