use leptos::*;

use crate::UploadStatus;

/// Status line under the form. Renders nothing while the message is empty.
#[component]
pub fn StatusBanner(
    status: Signal<UploadStatus>,
    message: Signal<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !message.get().is_empty()
            fallback=|| view! { }
        >
            <div
                class=move || format!("status-message {}", status.get().css_class())
                role="status"
            >
                {move || message.get()}
            </div>
        </Show>
    }
}
