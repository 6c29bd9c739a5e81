//! Application configuration.
//!
//! Centralized configuration for the class documents frontend.
//! These are compile-time constants; a deployment that needs other values
//! rebuilds the bundle.

/// Backend API base URL.
///
/// Used by [`HttpDocumentUploader`](crate::services::HttpDocumentUploader)
/// when the caller does not supply its own upload function.
pub const BACKEND_URL: &str = "http://localhost:3000";

/// Class shown on the landing route when none is given in the URL.
pub const DEFAULT_CLASS_ID: &str = "demo-class";

const MIB: u64 = 1024 * 1024;

/// Maximum size of a PDF document (30 MiB).
pub const PDF_MAX_BYTES: u64 = 30 * MIB;

/// Maximum size of an image (5 MiB).
pub const IMAGE_MAX_BYTES: u64 = 5 * MIB;

/// Maximum size of a video (100 MiB).
pub const VIDEO_MAX_BYTES: u64 = 100 * MIB;

/// Delay between a successful upload and the automatic close of the form,
/// in milliseconds. Keeps the success message on screen for a moment.
pub const CLOSE_DELAY_MS: u32 = 1500;

/// `accept` attribute of the hidden file input.
///
/// Only a hint for the native picker, the size policy does the real check.
pub const ACCEPTED_FILE_TYPES: &str = "application/pdf,image/*,video/*";

// =============================================================================
// User-facing messages
// =============================================================================

pub const MSG_REQUIRED_FIELDS: &str = "Please provide a title and select a file.";
pub const MSG_UPLOADING: &str = "Uploading document...";
pub const MSG_UPLOAD_SUCCESS: &str = "Document uploaded successfully!";
pub const MSG_UPLOAD_FAILED: &str = "Upload failed. Please try again.";
