//! Modal dialog shell.

use leptos::*;

/// Dialog with a title bar. The close button and a click on the backdrop
/// both call `on_close`.
#[component]
pub fn Modal(
    /// Dialog title
    #[prop(into)]
    title: String,
    /// Dismiss handler
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal is-active" role="dialog" aria-modal="true">
            <div class="modal-background" on:click=move |_| on_close.call(())></div>
            <div class="modal-card">
                <header class="modal-card-head">
                    <p class="modal-card-title">{title}</p>
                    <button
                        class="delete"
                        aria-label="close"
                        on:click=move |_| on_close.call(())
                    ></button>
                </header>
                <section class="modal-card-body">{children()}</section>
            </div>
        </div>
    }
}
