//! Error Banner Component
//!
//! Persistent localized error message with a dismiss button.

use leptos::prelude::*;

use crate::controller::use_dashboard;
use crate::store::{DashboardStateStoreFields, ErrorKind};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let dashboard = use_dashboard();
    let store = dashboard.store;

    move || {
        store.error().get().map(|kind| {
            let t = store.lang().get().strings();
            let message = match kind {
                ErrorKind::Load => t.load_error,
                ErrorKind::Action => t.action_error,
            };
            view! {
                <div class="error-banner" role="alert">
                    <span>{message}</span>
                    <button class="dismiss-btn" title=t.dismiss on:click=move |_| dashboard.dismiss_error()>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
