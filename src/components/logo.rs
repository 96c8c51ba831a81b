//! Logo Component

use leptos::prelude::*;

/// Paw badge with the "training PETS" wordmark
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="logo">
            <div class="logo-badge">"🐾"</div>
            <div class="logo-text">
                <div class="logo-kicker">"training"</div>
                <div class="logo-word">"PETS"</div>
            </div>
        </div>
    }
}
