//! New Task Modal Component
//!
//! Dialog for drafting a task: title, steps, dog, exercise and schedule.

use leptos::prelude::*;

use crate::controller::use_dashboard;
use crate::draft::{DraftField, TaskDraft};
use crate::models::Id;
use crate::store::DashboardStateStoreFields;

/// Empty select value means "not set"
fn optional_id(value: String) -> Option<Id> {
    if value.is_empty() { None } else { Some(Id::new(value)) }
}

/// Modal shown while a draft is open
#[component]
pub fn NewTaskModal() -> impl IntoView {
    let dashboard = use_dashboard();
    let store = dashboard.store;
    let draft = store.draft();
    let t = move || store.lang().get().strings();

    // Read one field of the open draft
    let field = move |read: fn(&TaskDraft) -> String| {
        move || draft.with(|d| d.as_ref().map(read).unwrap_or_default())
    };
    // Whether `id` is the draft's current choice for a select
    let is_selected = move |id: Id, current: fn(&TaskDraft) -> Option<&Id>| {
        move || draft.with(|d| d.as_ref().and_then(current) == Some(&id))
    };
    let can_save = move || draft.with(|d| d.as_ref().is_some_and(TaskDraft::can_save));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        dashboard.create_task();
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal" on:submit=on_submit>
                <h2>{move || t().new_task}</h2>

                <label>
                    <span>{move || t().task_title}</span>
                    <input
                        type="text"
                        prop:value=field(|d| d.title.clone())
                        on:input=move |ev| dashboard.edit_draft(DraftField::Title(event_target_value(&ev)))
                    />
                </label>

                <label>
                    <span>{move || t().steps}</span>
                    <textarea
                        rows="4"
                        placeholder=move || t().steps_hint
                        prop:value=field(|d| d.steps_text.clone())
                        on:input=move |ev| dashboard.edit_draft(DraftField::Steps(event_target_value(&ev)))
                    />
                </label>

                <label>
                    <span>{move || t().dog}</span>
                    <select
                        on:change=move |ev| dashboard.edit_draft(DraftField::Dog(optional_id(event_target_value(&ev))))
                    >
                        <option value="">{move || t().none}</option>
                        {move || store.dogs().get().into_iter().map(|dog| {
                            let selected = is_selected(dog.id.clone(), |d| d.dog_id.as_ref());
                            view! { <option value=dog.id.to_string() selected=selected>{dog.name}</option> }
                        }).collect_view()}
                    </select>
                </label>

                <label>
                    <span>{move || t().exercise}</span>
                    <select
                        on:change=move |ev| dashboard.edit_draft(DraftField::Exercise(optional_id(event_target_value(&ev))))
                    >
                        <option value="">{move || t().none}</option>
                        {move || store.exercises().get().into_iter().map(|exercise| {
                            let selected = is_selected(exercise.id.clone(), |d| d.exercise_id.as_ref());
                            view! { <option value=exercise.id.to_string() selected=selected>{exercise.title}</option> }
                        }).collect_view()}
                    </select>
                </label>

                <label>
                    <span>{move || t().scheduled_for}</span>
                    <input
                        type="datetime-local"
                        prop:value=field(|d| d.scheduled_local.clone())
                        on:input=move |ev| dashboard.edit_draft(DraftField::Scheduled(event_target_value(&ev)))
                    />
                </label>

                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| dashboard.cancel_draft()>
                        {move || t().cancel}
                    </button>
                    <button type="submit" class="save-btn" disabled=move || !can_save() || store.saving().get()>
                        {move || t().save}
                    </button>
                </div>
            </form>
        </div>
    }
}
