//! UI Components for the class documents application.
//!
//! # Layout Components
//! - [`Hero`] - Class page title and description
//! - [`Footer`] - Page footer
//! - [`Modal`] - Dialog shell with close button and backdrop
//!
//! # Feature Components
//! - [`UploadForm`] - Document upload with drag & drop
//! - [`FilePreview`] - Selected file summary
//! - [`StatusBanner`] - Validation and upload messages

mod hero;
mod footer;
mod modal;
mod upload;
mod file_preview;
mod status;

pub use hero::*;
pub use footer::*;
pub use modal::*;
pub use upload::*;
pub use file_preview::*;
pub use status::*;
