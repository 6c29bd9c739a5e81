//! Class page header

use leptos::*;

#[component]
pub fn Hero(
    /// Class whose documents are managed on this page
    #[prop(into)]
    class_id: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Class documents"</h1>
            <p class="subtitle">
                "Share course material with the students of "
                <strong>{move || class_id.get()}</strong>
                ". PDF documents, images and videos are accepted."
            </p>
        </div>
    }
}
