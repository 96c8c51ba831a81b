//! Toast Notification Component
//!
//! Shows the transient confirmation after a task is saved.

use leptos::prelude::*;

use crate::store::{use_dashboard_store, DashboardStateStoreFields, ToastKind};

#[component]
pub fn Toast() -> impl IntoView {
    let store = use_dashboard_store();

    move || {
        store.toast().get().map(|toast| {
            let t = store.lang().get().strings();
            let message = match toast.kind {
                ToastKind::TaskSaved => t.saved,
            };
            view! {
                <div class="toast toast-success" role="status">
                    <span class="toast-icon">"✓"</span>
                    <span>{message}</span>
                </div>
            }
        })
    }
}
