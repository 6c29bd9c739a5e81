//! Error types for the upload form.
//!
//! - [`ValidationError`] - file rejected before submission
//! - [`UploadError`] - failure reported by the upload function
//!
//! Validation errors are shown to the user verbatim. Upload errors are
//! logged and replaced by a generic message in the form.

use thiserror::Error;

use crate::types::FileCategory;
use crate::validation::format_bytes;

/// A selected file that does not satisfy the size policy.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// MIME type outside PDF, image and video.
    #[error("Unsupported file type. Please upload a PDF, image, or video file.")]
    Unsupported { mime_type: String },

    /// File larger than its category allows.
    #[error(
        "File too large. {category} files must be under {} (selected file is {}).",
        format_bytes(*.limit),
        format_bytes(*.actual)
    )]
    TooLarge {
        category: FileCategory,
        limit: u64,
        actual: u64,
    },
}

/// Failure of the injected upload function.
#[derive(Clone, Debug, Error)]
pub enum UploadError {
    /// The request could not be built.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// The request never got a response.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// Any other rejection from a caller-supplied upload function.
    #[error("Upload rejected: {0}")]
    Rejected(String),
}

/// Result type alias for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_large_message_names_limit_and_size() {
        let err = ValidationError::TooLarge {
            category: FileCategory::Pdf,
            limit: 30 * 1024 * 1024,
            actual: 31 * 1024 * 1024,
        };
        let msg = err.to_string();
        assert!(msg.contains("PDF"));
        assert!(msg.contains("30 MB"));
        assert!(msg.contains("31 MB"));
    }

    #[test]
    fn test_unsupported_message() {
        let err = ValidationError::Unsupported {
            mime_type: "text/plain".to_string(),
        };
        assert!(err.to_string().to_lowercase().contains("unsupported file type"));
    }

    #[test]
    fn test_server_error_display() {
        let err = UploadError::Server {
            status: 413,
            body: "too big".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (413): too big");
    }
}
