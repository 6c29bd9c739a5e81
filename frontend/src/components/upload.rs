//! Document upload form with drag & drop support.
//!
//! Handles file selection, policy validation and submission through the
//! injected [`DocumentUploader`]. All state lives in one
//! [`UploadDraft`] signal; the handlers below only translate DOM events.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::ev::{DragEvent, SubmitEvent};
use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::components::{FilePreview, Modal, StatusBanner};
use crate::draft::{run_submission, FileHandle, UploadDraft};
use crate::services::DocumentUploader;
use crate::{DragKind, ACCEPTED_FILE_TYPES};

#[component]
pub fn UploadForm(
    /// Class receiving the document
    #[prop(into)]
    class_id: String,
    /// Submit function
    upload_docs: Rc<dyn DocumentUploader<File>>,
    /// Dismisses the form
    on_close: Callback<()>,
) -> impl IntoView {
    let draft = create_rw_signal(UploadDraft::<File>::new());
    let file_input = create_node_ref::<html::Input>();

    let title = Signal::derive(move || draft.with(|d| d.title.clone()));
    let loading = Signal::derive(move || draft.with(|d| d.loading));
    let can_submit = Signal::derive(move || draft.with(|d| d.can_submit()));
    let drag_active = Signal::derive(move || draft.with(|d| d.drag_active));
    let status = Signal::derive(move || draft.with(|d| d.status));
    let message = Signal::derive(move || draft.with(|d| d.status_message.clone()));
    let selected = create_memo(move |_| draft.with(|d| d.file.as_ref().map(FileHandle::info)));

    // Lets the picker fire `change` again for the same file.
    let reset_input = move || {
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if let Some(Err(_)) = draft.try_update(|d| d.select_file(file)) {
            reset_input();
        }
    };

    // Shared by dragenter, dragover, dragleave and drop. The browser would
    // otherwise open the dropped file in place of the app.
    let on_drag = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();

        match DragKind::from_event_type(&ev.type_()) {
            // The draft ignores drops while an upload runs.
            Some(DragKind::Drop) => {
                let dropped = ev
                    .data_transfer()
                    .and_then(|dt| dt.files())
                    .and_then(|files| files.get(0));
                if let Some(Some(Err(_))) = draft.try_update(|d| d.drop_files(dropped)) {
                    reset_input();
                }
            }
            Some(kind) => draft.update(|d| d.handle_drag(kind)),
            None => draft.update(|d| d.handle_drag(DragKind::Leave)),
        }
    };

    let open_picker = move |_| {
        if draft.with_untracked(|d| d.loading) {
            return;
        }
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_remove = Callback::new(move |_| {
        draft.update(|d| d.remove_file());
        reset_input();
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let uploader = Rc::clone(&upload_docs);
        let class_id = class_id.clone();
        spawn_local(async move {
            run_submission(
                &draft,
                &class_id,
                uploader.as_ref(),
                TimeoutFuture::new,
                move || on_close.call(()),
            )
            .await;
        });
    };

    view! {
        <Modal title="Upload document" on_close=on_close>
            <form class="upload-form" on:submit=on_submit>
                <label class="form-label" for="documentTitle">"Title"</label>
                <input
                    type="text"
                    id="documentTitle"
                    class="form-input"
                    placeholder="Document title"
                    prop:value=move || title.get()
                    on:input=move |ev| draft.update(|d| d.set_title(event_target_value(&ev)))
                />

                <div
                    class="upload-section"
                    class:drag-active=move || drag_active.get()
                    on:click=open_picker
                    on:dragenter=on_drag
                    on:dragover=on_drag
                    on:dragleave=on_drag
                    on:drop=on_drag
                >
                    <div class="upload-text">
                        {move || if drag_active.get() {
                            "Drop the file to select it"
                        } else {
                            "Drag a file here or click to browse"
                        }}
                    </div>
                    <div class="upload-hint">"PDF up to 30 MB, images up to 5 MB, videos up to 100 MB"</div>
                </div>

                <input
                    type="file"
                    accept=ACCEPTED_FILE_TYPES
                    style="display:none"
                    node_ref=file_input
                    on:change=on_file_change
                />

                {move || selected.get().map(|info| view! {
                    <FilePreview info=info disabled=loading on_remove=on_remove/>
                })}

                <StatusBanner status=status message=message/>

                <div class="form-actions">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| on_close.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || !can_submit.get()
                    >
                        {move || if loading.get() { "Uploading..." } else { "Upload" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
