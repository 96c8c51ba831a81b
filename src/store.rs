//! Global Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every change
//! goes through [`DashboardState::apply`], so transitions are plain
//! functions over the state and can be tested without a reactive runtime.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::draft::{DraftField, TaskDraft};
use crate::i18n::Lang;
use crate::live::LiveCoach;
use crate::models::{Dog, Exercise, Id, Summary, Task, TaskStatus};

/// Which localized error message the banner shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Task list or summary could not be fetched
    Load,
    /// Create or complete request failed
    Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    TaskSaved,
}

/// Transient confirmation. `id` ties the toast to its dismiss timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
}

/// Global dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Tasks in server order
    pub tasks: Vec<Task>,
    pub dogs: Vec<Dog>,
    pub exercises: Vec<Exercise>,
    /// Latest summary snapshot, replaced wholesale
    pub summary: Summary,
    pub loading: bool,
    /// Latest error; overwrites any previous one
    pub error: Option<ErrorKind>,
    pub toast: Option<Toast>,
    /// Open new-task dialog (None = closed)
    pub draft: Option<TaskDraft>,
    /// Identifies the open draft so a late create response only closes
    /// the draft it was submitted from
    pub draft_id: u64,
    /// A create request for the open draft is in flight
    pub saving: bool,
    pub lang: Lang,
    pub live: LiveCoach,
    /// Sequence number of the last applied task list response
    pub tasks_seq: u64,
    /// Sequence number of the last applied summary response
    pub summary_seq: u64,
}

/// State transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadStart,
    TasksLoaded { seq: u64, tasks: Vec<Task> },
    SummaryLoaded { seq: u64, summary: Summary },
    ReferenceLoaded { dogs: Vec<Dog>, exercises: Vec<Exercise> },
    LoadFailure,
    LoadFinished,
    ActionFailure,
    DismissError,
    OpenDraft,
    EditDraft(DraftField),
    CancelDraft,
    CreateStart(u64),
    CreateSuccess(u64),
    CreateFailure(u64),
    CompleteSuccess(Id),
    ToastShow(Toast),
    ToastClear(u64),
    SetLang(Lang),
    LiveConnected,
    LiveDisconnected,
    LiveFrame(String),
}

impl DashboardState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::LoadStart => {
                self.loading = true;
                self.error = None;
            }
            Action::TasksLoaded { seq, tasks } => {
                if seq > self.tasks_seq {
                    self.tasks_seq = seq;
                    self.tasks = tasks;
                }
            }
            Action::SummaryLoaded { seq, summary } => {
                if seq > self.summary_seq {
                    self.summary_seq = seq;
                    self.summary = summary;
                }
            }
            Action::ReferenceLoaded { dogs, exercises } => {
                self.dogs = dogs;
                self.exercises = exercises;
            }
            Action::LoadFailure => self.error = Some(ErrorKind::Load),
            Action::LoadFinished => self.loading = false,
            Action::ActionFailure => self.error = Some(ErrorKind::Action),
            Action::DismissError => self.error = None,
            Action::OpenDraft => {
                if self.draft.is_none() {
                    self.draft_id += 1;
                    self.draft = Some(TaskDraft::new(self.lang));
                    self.saving = false;
                }
            }
            Action::EditDraft(field) => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.edit(field);
                }
            }
            Action::CancelDraft => {
                self.draft = None;
                self.saving = false;
            }
            Action::CreateStart(draft_id) => {
                if draft_id == self.draft_id && self.draft.is_some() {
                    self.saving = true;
                }
            }
            Action::CreateSuccess(draft_id) => {
                if draft_id == self.draft_id {
                    self.draft = None;
                    self.saving = false;
                }
            }
            Action::CreateFailure(draft_id) => {
                self.error = Some(ErrorKind::Action);
                if draft_id == self.draft_id {
                    self.saving = false;
                }
            }
            Action::CompleteSuccess(id) => {
                if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
                    task.status = TaskStatus::Completed;
                }
            }
            Action::ToastShow(toast) => self.toast = Some(toast),
            Action::ToastClear(id) => {
                if self.toast.is_some_and(|toast| toast.id == id) {
                    self.toast = None;
                }
            }
            Action::SetLang(lang) => {
                self.lang = lang;
                if let Some(draft) = self.draft.as_mut() {
                    draft.language = lang;
                }
            }
            Action::LiveConnected => self.live.connected = true,
            Action::LiveDisconnected => self.live.connected = false,
            Action::LiveFrame(frame) => {
                self.live.receive(&frame);
            }
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

/// Apply an action. Returns false once the store has been disposed, which
/// makes late async completions silent no-ops.
pub fn dispatch(store: &DashboardStore, action: Action) -> bool {
    store.try_update(|state| state.apply(action)).is_some()
}
