//! Summary of the selected file with a remove button.

use leptos::*;

use crate::{format_bytes, FileCategory, FileInfo};

#[component]
pub fn FilePreview(
    info: FileInfo,
    /// Disables the remove button during an upload
    #[prop(into)]
    disabled: Signal<bool>,
    on_remove: Callback<()>,
) -> impl IntoView {
    let category = FileCategory::from_mime(&info.mime_type);

    view! {
        <div class="file-preview">
            <div class="file-preview-name">{info.name.clone()}</div>
            <div class="file-preview-details">
                {category.label()} " • " {format_bytes(info.size)}
            </div>
            <button
                type="button"
                class="btn btn-secondary file-preview-remove"
                disabled=move || disabled.get()
                on:click=move |_| on_remove.call(())
            >
                "Remove"
            </button>
        </div>
    }
}
