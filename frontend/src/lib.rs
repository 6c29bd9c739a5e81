//! Class Documents - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend letting instructors attach documents, images and
//! videos to a class.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ClassPage (/ or /classes/:class_id)                         │
//! │  ├── Hero (class title)                                      │
//! │  ├── "Upload document" button                                │
//! │  └── UploadForm (modal, while open)                          │
//! │      ├── title input, drop zone, hidden file input           │
//! │      ├── FilePreview                                         │
//! │      └── StatusBanner                                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (FileCategory, UploadStatus, etc.)
//! - [`error`] - Validation and upload errors
//! - [`validation`] - Size policy, byte formatting, default titles
//! - [`draft`] - Form state machine and submission flow
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod error;
pub mod validation;
pub mod draft;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{DragKind, FileCategory, FileInfo, UploadStatus, UploadedDocument};

// Errors
pub use error::{UploadError, UploadResult, ValidationError};

// Validation
pub use validation::{format_bytes, strip_extension, validate_file_size, FileSizePolicy};

// Draft
pub use draft::{run_submission, DraftCell, FileHandle, UploadDraft};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Class documents - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Class documents"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=ClassPage/>
                    <Route path="/classes/:class_id" view=ClassPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ClassPage() -> impl IntoView {
    let params = use_params_map();
    let class_id = Signal::derive(move || {
        params.with(|p| {
            p.get("class_id")
                .cloned()
                .unwrap_or_else(|| DEFAULT_CLASS_ID.to_string())
        })
    });

    let (form_open, set_form_open) = create_signal(false);
    let uploader: Rc<dyn DocumentUploader<web_sys::File>> = Rc::new(HttpDocumentUploader::new(BACKEND_URL));
    let close_form = Callback::new(move |_| {
        log::debug!("Closing upload form");
        set_form_open.set(false);
    });

    view! {
        <div class="container">
            <Hero class_id=class_id/>

            <button
                class="btn btn-primary"
                on:click=move |_| set_form_open.set(true)
            >
                "Upload document"
            </button>

            <Show
                when=move || form_open.get()
                fallback=|| view! { }
            >
                <UploadForm
                    class_id=class_id.get()
                    upload_docs=Rc::clone(&uploader)
                    on_close=close_form
                />
            </Show>
        </div>

        <Footer/>
    }
}
