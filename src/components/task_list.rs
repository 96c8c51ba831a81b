//! Task List Component
//!
//! Tasks in server order, with skeleton rows while the first load runs.

use leptos::prelude::*;

use crate::config::SKELETON_ROWS;
use crate::controller::use_dashboard;
use crate::models::Task;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_dashboard().store;
    let tasks = store.tasks();
    let loading = store.loading();
    let t = move || store.lang().get().strings();

    view! {
        <section class="task-list">
            <div class="section-head">
                <h2>{move || t().tasks}</h2>
                <span class="task-count">
                    {move || format!("{} {}", tasks.with(Vec::len), t().tasks.to_lowercase())}
                </span>
            </div>

            <Show when=move || loading.get()>
                <TaskSkeleton />
            </Show>
            <Show when=move || !loading.get() && tasks.with(Vec::is_empty)>
                <div class="empty-state">{move || t().no_tasks}</div>
            </Show>

            <div class="task-rows">
                <For
                    each=move || tasks.get()
                    // Status is part of the key so a completed row re-renders
                    key=|task| (task.id.clone(), task.status)
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </div>
        </section>
    }
}

/// Single task with its completion button
#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let dashboard = use_dashboard();
    let lang = dashboard.store.lang();
    let t = move || lang.get().strings();

    let completed = task.is_completed();
    let id = task.id.clone();
    let step_count = task.steps.len();
    let row_class = if completed { "task-row completed" } else { "task-row" };

    view! {
        <div class=row_class>
            <div>
                <div class="task-title">{task.title.clone()}</div>
                <div class="task-meta">{move || format!("{}: {}", t().steps, step_count)}</div>
            </div>
            <button
                class="complete-btn"
                disabled=completed
                on:click=move |_| dashboard.complete_task(id.clone())
            >
                "✓ " {move || if completed { t().completed } else { t().complete }}
            </button>
        </div>
    }
}

/// Placeholder rows shown while loading
#[component]
fn TaskSkeleton() -> impl IntoView {
    view! {
        <div class="task-skeleton">
            {(0..SKELETON_ROWS).map(|_| view! {
                <div class="task-row skeleton" />
            }).collect_view()}
        </div>
    }
}
