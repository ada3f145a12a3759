use leptos::prelude::*;

/// Full-page spinner shown during the simulated login delay.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-page">
            <div class="spinner" role="status" aria-label="Signing in"></div>
        </div>
    }
}
