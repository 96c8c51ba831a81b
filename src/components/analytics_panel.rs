//! Analytics Panel Component
//!
//! Latest summary snapshot from the backend.

use leptos::prelude::*;

use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn AnalyticsPanel() -> impl IntoView {
    let store = use_dashboard_store();
    let summary = store.summary();
    let t = move || store.lang().get().strings();

    view! {
        <div class="analytics-panel">
            <h2>"📈 " {move || t().analytics}</h2>
            <div class="stat-row">
                <span>{move || t().tasks}</span>
                <span class="stat-value">{move || summary.with(|s| s.total_tasks)}</span>
            </div>
            <div class="stat-row">
                <span>{move || t().completed}</span>
                <span class="stat-value">{move || summary.with(|s| s.completed_tasks)}</span>
            </div>
            <div class="stat-row">
                <span>{move || t().success_rate}</span>
                <span class="stat-value">{move || summary.with(|s| s.success_rate_label())}</span>
            </div>
        </div>
    }
}
