//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - document upload to the class documents backend

pub mod upload;

pub use upload::*;
