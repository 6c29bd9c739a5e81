//! Upload draft state and the submission flow.
//!
//! [`UploadDraft`] holds everything the form shows: title, selected file,
//! status banner, and the `loading` / `drag_active` flags. It is generic over
//! the file handle so the same logic runs against `web_sys::File` in the
//! browser and against plain structs in unit tests.
//!
//! [`run_submission`] drives one submit from start to close. It only touches
//! the draft through [`DraftCell`], which lets a disposed Leptos signal end
//! the flow quietly when the form is closed mid-upload.

use std::cell::RefCell;
use std::future::Future;

use leptos::{RwSignal, SignalUpdate};

use crate::config::{CLOSE_DELAY_MS, MSG_REQUIRED_FIELDS, MSG_UPLOADING, MSG_UPLOAD_FAILED, MSG_UPLOAD_SUCCESS};
use crate::error::{UploadResult, ValidationError};
use crate::services::DocumentUploader;
use crate::types::{DragKind, FileCategory, FileInfo, UploadStatus};
use crate::validation::{strip_extension, FileSizePolicy};

// =============================================================================
// File handles
// =============================================================================

/// Read access to the metadata of a user-selected file.
pub trait FileHandle: Clone {
    fn file_name(&self) -> String;
    fn mime_type(&self) -> String;
    fn size_bytes(&self) -> u64;

    fn info(&self) -> FileInfo {
        FileInfo {
            name: self.file_name(),
            mime_type: self.mime_type(),
            size: self.size_bytes(),
        }
    }
}

impl FileHandle for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn mime_type(&self) -> String {
        self.type_()
    }

    fn size_bytes(&self) -> u64 {
        self.size() as u64
    }
}

// =============================================================================
// Draft
// =============================================================================

/// Transient title + file state of the upload form.
#[derive(Clone, Debug)]
pub struct UploadDraft<F> {
    pub title: String,
    pub file: Option<F>,
    pub status: UploadStatus,
    pub status_message: String,
    /// True while the upload function runs. Disables the submit button.
    pub loading: bool,
    /// Highlight of the drop zone during a drag.
    pub drag_active: bool,
    policy: FileSizePolicy,
}

impl<F> Default for UploadDraft<F> {
    fn default() -> Self {
        Self::with_policy(FileSizePolicy::default())
    }
}

impl<F> UploadDraft<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: FileSizePolicy) -> Self {
        Self {
            title: String::new(),
            file: None,
            status: UploadStatus::Idle,
            status_message: String::new(),
            loading: false,
            drag_active: false,
            policy,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Clear the selected file. The title is kept.
    pub fn remove_file(&mut self) {
        self.file = None;
    }

    /// Update the drop zone highlight for a drag event.
    pub fn handle_drag(&mut self, kind: DragKind) {
        self.drag_active = kind.activates();
    }

    /// Whether the submit button is enabled.
    ///
    /// Stays off during an upload and while the success message waits for
    /// the form to close.
    pub fn can_submit(&self) -> bool {
        !self.loading && self.status != UploadStatus::Success
    }

    fn set_status(&mut self, status: UploadStatus, message: impl Into<String>) {
        self.status = status;
        self.status_message = message.into();
    }

    /// Record the outcome of the upload function.
    ///
    /// Returns `true` when the form should close after the success delay.
    /// On failure the title and file stay so the user can retry.
    pub fn finish_submit(&mut self, result: &UploadResult<()>) -> bool {
        self.loading = false;
        match result {
            Ok(()) => {
                self.set_status(UploadStatus::Success, MSG_UPLOAD_SUCCESS);
                self.title.clear();
                self.file = None;
                true
            }
            Err(_) => {
                self.set_status(UploadStatus::Error, MSG_UPLOAD_FAILED);
                false
            }
        }
    }
}

impl<F: FileHandle> UploadDraft<F> {
    /// Validate and store a selected file.
    ///
    /// On rejection the previous selection is dropped and the error message
    /// is shown. On acceptance an empty title is filled from the file name.
    pub fn select_file(&mut self, file: F) -> Result<FileCategory, ValidationError> {
        self.set_status(UploadStatus::Validating, "");

        match self.policy.check(&file.mime_type(), file.size_bytes()) {
            Ok(category) => {
                if self.title.is_empty() {
                    self.title = strip_extension(&file.file_name()).to_string();
                }
                self.file = Some(file);
                self.set_status(UploadStatus::Idle, "");
                Ok(category)
            }
            Err(err) => {
                log::warn!("Rejected file {}: {}", file.file_name(), err);
                self.file = None;
                self.set_status(UploadStatus::Error, err.to_string());
                Err(err)
            }
        }
    }

    /// Handle a drop: clear the highlight and select the first dropped file.
    ///
    /// Returns `None` when nothing was dropped or an upload is running.
    pub fn drop_files<I>(&mut self, files: I) -> Option<Result<FileCategory, ValidationError>>
    where
        I: IntoIterator<Item = F>,
    {
        self.handle_drag(DragKind::Drop);
        if self.loading {
            return None;
        }
        let file = files.into_iter().next()?;
        Some(self.select_file(file))
    }

    /// Start a submission.
    ///
    /// Returns the title as typed and the file to hand to the upload
    /// function, or `None` when a field is missing or submitting is blocked.
    pub fn begin_submit(&mut self) -> Option<(String, F)> {
        if !self.can_submit() {
            return None;
        }

        let Some(file) = self.file.clone().filter(|_| !self.title.is_empty()) else {
            self.set_status(UploadStatus::Error, MSG_REQUIRED_FIELDS);
            return None;
        };

        self.loading = true;
        self.set_status(UploadStatus::Uploading, MSG_UPLOADING);
        Some((self.title.clone(), file))
    }
}

// =============================================================================
// Submission flow
// =============================================================================

/// Shared, mutable home of an [`UploadDraft`].
///
/// `with_draft` returns `None` once the storage is gone, e.g. a Leptos
/// signal disposed together with its component.
pub trait DraftCell<F> {
    fn with_draft<R>(&self, f: impl FnOnce(&mut UploadDraft<F>) -> R) -> Option<R>;
}

impl<F> DraftCell<F> for RefCell<UploadDraft<F>> {
    fn with_draft<R>(&self, f: impl FnOnce(&mut UploadDraft<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<F: 'static> DraftCell<F> for RwSignal<UploadDraft<F>> {
    fn with_draft<R>(&self, f: impl FnOnce(&mut UploadDraft<F>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Run one submit: validate fields, call the uploader, record the outcome
/// and close the form after [`CLOSE_DELAY_MS`] on success.
///
/// `sleep` performs the delay (a timer future in the browser). Returns the
/// uploader's result, or `None` when the uploader was not called.
pub async fn run_submission<F, C, U, S, Fut>(
    draft: &C,
    class_id: &str,
    uploader: &U,
    sleep: S,
    close: impl FnOnce(),
) -> Option<UploadResult<()>>
where
    F: FileHandle,
    C: DraftCell<F>,
    U: DocumentUploader<F> + ?Sized,
    S: FnOnce(u32) -> Fut,
    Fut: Future<Output = ()>,
{
    let (title, file) = draft.with_draft(|d| d.begin_submit()).flatten()?;

    log::info!("Uploading \"{}\" ({}) to class {}", title, file.file_name(), class_id);
    let result = uploader.upload_docs(class_id, &title, file).await;

    match &result {
        Ok(()) => log::info!("Upload of \"{}\" succeeded", title),
        Err(e) => log::error!("Upload of \"{}\" failed: {}", title, e),
    }

    // The form may have been closed while the upload was running.
    let should_close = draft.with_draft(|d| d.finish_submit(&result)).unwrap_or(false);
    if should_close {
        sleep(CLOSE_DELAY_MS).await;
        close();
    }

    Some(result)
}
