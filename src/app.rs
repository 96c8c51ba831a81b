//! Pets Dashboard App
//!
//! Main application component: task list on the left, analytics and live
//! coach on the right.

use leptos::prelude::*;

use crate::components::{AnalyticsPanel, ErrorBanner, Header, LiveCoachPanel, NewTaskModal, TaskList, Toast};
use crate::controller::Dashboard;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn App() -> impl IntoView {
    // Store and controller provided to all children
    let dashboard = Dashboard::provide();
    let store = dashboard.store;

    // Initial load on mount
    Effect::new(move |_| dashboard.load());

    let lang = store.lang();

    view! {
        <div class="app-layout" dir=move || lang.get().dir() lang=move || lang.get().code()>
            <Header />
            <ErrorBanner />

            <main class="dashboard-grid">
                <TaskList />
                <aside class="side-column">
                    <AnalyticsPanel />
                    <LiveCoachPanel />
                </aside>
            </main>

            <Show when=move || store.draft().with(Option::is_some)>
                <NewTaskModal />
            </Show>
            <Toast />
        </div>
    }
}
