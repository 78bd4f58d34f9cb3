use interaction::scene::progress_label;
use leptos::prelude::*;

/// Spinner with the scene's load percentage.
#[component]
pub fn Loader(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    view! {
        <div class="loader">
            <div class="loader__spinner"></div>
            <p class="loader__label">{move || progress_label(progress.get())}</p>
        </div>
    }
}
