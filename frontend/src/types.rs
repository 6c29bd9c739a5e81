//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - content categories and file metadata
//! - **Form Types** - upload status and drag events
//! - **API Types** - backend response structures

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// File Types
// =============================================================================

/// Coarse classification of a file's MIME type.
///
/// Selects the size limit applied by the
/// [`FileSizePolicy`](crate::validation::FileSizePolicy).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileCategory {
    /// `application/pdf`
    Pdf,
    /// `image/*`
    Image,
    /// `video/*`
    Video,
    /// Anything else. Always rejected.
    Unsupported,
}

impl FileCategory {
    /// Classify a MIME type.
    ///
    /// PDF is an exact match, images and videos match on their prefix.
    pub fn from_mime(mime: &str) -> Self {
        if mime == "application/pdf" {
            FileCategory::Pdf
        } else if mime.starts_with("image/") {
            FileCategory::Image
        } else if mime.starts_with("video/") {
            FileCategory::Video
        } else {
            FileCategory::Unsupported
        }
    }

    /// Label used in messages and in the file preview.
    pub fn label(&self) -> &'static str {
        match self {
            FileCategory::Pdf => "PDF",
            FileCategory::Image => "Image",
            FileCategory::Video => "Video",
            FileCategory::Unsupported => "Unsupported",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metadata snapshot of a selected file.
#[derive(Clone, Debug, PartialEq)]
pub struct FileInfo {
    /// File name including extension
    pub name: String,
    /// MIME type as reported by the browser (may be empty)
    pub mime_type: String,
    /// Size in bytes
    pub size: u64,
}

// =============================================================================
// Form Types
// =============================================================================

/// Lifecycle of the upload draft.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Validating,
    Uploading,
    Success,
    Error,
}

impl UploadStatus {
    /// Get CSS class for the status banner.
    pub fn css_class(&self) -> &'static str {
        match self {
            UploadStatus::Idle | UploadStatus::Validating | UploadStatus::Uploading => "status-info",
            UploadStatus::Success => "status-success",
            UploadStatus::Error => "status-error",
        }
    }
}

/// Drag-and-drop events handled by the drop zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragKind {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragKind {
    /// Map a DOM event type (`"dragenter"`, ...) to a drag kind.
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "dragenter" => Some(DragKind::Enter),
            "dragover" => Some(DragKind::Over),
            "dragleave" => Some(DragKind::Leave),
            "drop" => Some(DragKind::Drop),
            _ => None,
        }
    }

    /// Whether the drop zone should be highlighted after this event.
    pub fn activates(&self) -> bool {
        matches!(self, DragKind::Enter | DragKind::Over)
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Document record returned by the backend after an upload.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedDocument {
    /// Backend identifier
    pub id: String,
    /// Title as stored
    pub title: String,
    /// Public URL of the stored file, when the backend exposes one
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_mime() {
        assert_eq!(FileCategory::from_mime("application/pdf"), FileCategory::Pdf);
        assert_eq!(FileCategory::from_mime("image/png"), FileCategory::Image);
        assert_eq!(FileCategory::from_mime("video/mp4"), FileCategory::Video);
        assert_eq!(FileCategory::from_mime("application/zip"), FileCategory::Unsupported);
        assert_eq!(FileCategory::from_mime(""), FileCategory::Unsupported);
    }

    #[test]
    fn test_pdf_is_exact_match() {
        assert_eq!(FileCategory::from_mime("application/pdf+x"), FileCategory::Unsupported);
        assert_eq!(FileCategory::from_mime("APPLICATION/PDF"), FileCategory::Unsupported);
    }

    #[test]
    fn test_drag_kind_activation() {
        assert!(DragKind::Enter.activates());
        assert!(DragKind::Over.activates());
        assert!(!DragKind::Leave.activates());
        assert!(!DragKind::Drop.activates());
        assert_eq!(DragKind::from_event_type("dragover"), Some(DragKind::Over));
        assert_eq!(DragKind::from_event_type("dragend"), None);
    }

    #[test]
    fn test_uploaded_document_deserialization() {
        let json = r#"{ "id": "doc-1", "title": "Syllabus" }"#;
        let doc: UploadedDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, "doc-1");
        assert_eq!(doc.title, "Syllabus");
        assert!(doc.url.is_none());
    }
}
