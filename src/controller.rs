//! Dashboard Controller
//!
//! Issues backend requests and feeds their outcomes into the store.
//! Provided via Leptos Context API.

use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::config;
use crate::draft::{DraftError, DraftField};
use crate::i18n::Lang;
use crate::live::{LiveCoach, LiveSocket};
use crate::models::{Dog, Exercise, Id, Summary, Task};
use crate::store::{dispatch, Action, DashboardState, DashboardStateStoreFields, DashboardStore, Toast, ToastKind};

/// App-wide controller provided via context
#[derive(Clone, Copy)]
pub struct Dashboard {
    pub store: DashboardStore,
    /// Source of request sequence numbers and toast ids
    seq: StoredValue<u64>,
    socket: StoredValue<Option<LiveSocket>, LocalStorage>,
}

/// Get the dashboard controller from context
pub fn use_dashboard() -> Dashboard {
    use_context::<Dashboard>().expect("Dashboard should be provided")
}

impl Dashboard {
    /// Create the store and controller and provide both to children.
    pub fn provide() -> Self {
        let dashboard = Self {
            store: DashboardStore::new(DashboardState::default()),
            seq: StoredValue::new(0),
            socket: StoredValue::new_local(None),
        };
        provide_context(dashboard.store);
        provide_context(dashboard);
        dashboard
    }

    fn next_seq(&self) -> Option<u64> {
        self.seq.try_update_value(|n| {
            *n += 1;
            *n
        })
    }

    // ========================
    // Loading
    // ========================

    /// Fetch tasks, summary, dogs and exercises together.
    pub fn load(self) {
        let store = self.store;
        if !dispatch(&store, Action::LoadStart) {
            return;
        }
        let (Some(tasks_seq), Some(summary_seq)) = (self.next_seq(), self.next_seq()) else {
            return;
        };

        spawn_local(async move {
            let (tasks, summary, dogs, exercises) = futures::join!(
                api::list_tasks(),
                api::fetch_summary(),
                api::list_dogs(),
                api::list_exercises(),
            );
            let outcome = LoadOutcome { tasks, summary, dogs, exercises };
            for action in outcome.into_actions(tasks_seq, summary_seq) {
                if !dispatch(&store, action) {
                    return;
                }
            }
        });
    }

    async fn refresh_tasks(self) -> Result<(), ApiError> {
        let Some(seq) = self.next_seq() else { return Ok(()) };
        let tasks = api::list_tasks().await?;
        dispatch(&self.store, Action::TasksLoaded { seq, tasks });
        Ok(())
    }

    async fn refresh_summary(self) -> Result<(), ApiError> {
        let Some(seq) = self.next_seq() else { return Ok(()) };
        let summary = api::fetch_summary().await?;
        dispatch(&self.store, Action::SummaryLoaded { seq, summary });
        Ok(())
    }

    // ========================
    // Task Mutations
    // ========================

    /// Submit the open draft. Blank titles never reach the network, and
    /// a draft already being saved is not sent again.
    pub fn create_task(self) {
        let (draft, draft_id, saving) = self
            .store
            .with_untracked(|state| (state.draft.clone(), state.draft_id, state.saving));
        let Some(draft) = draft else { return };
        if saving {
            return;
        }
        let request = match draft.to_request(&Local) {
            Ok(request) => request,
            Err(DraftError::EmptyTitle) => return,
            Err(e) => {
                warn!("[TASKS] Draft rejected: {}", e);
                dispatch(&self.store, Action::ActionFailure);
                return;
            }
        };

        if !dispatch(&self.store, Action::CreateStart(draft_id)) {
            return;
        }

        spawn_local(async move {
            match api::create_task(&request).await {
                Ok(created) => {
                    log!("[TASKS] Created task {}", created.id);
                    if !dispatch(&self.store, Action::CreateSuccess(draft_id)) {
                        return;
                    }
                    self.show_toast(ToastKind::TaskSaved);
                    let refreshed = match self.refresh_tasks().await {
                        Ok(()) => self.refresh_summary().await,
                        Err(e) => Err(e),
                    };
                    if let Err(e) = refreshed {
                        error!("[TASKS] Refresh after create failed: {}", e);
                        dispatch(&self.store, Action::LoadFailure);
                    }
                }
                Err(e) => {
                    error!("[TASKS] Create failed: {}", e);
                    dispatch(&self.store, Action::CreateFailure(draft_id));
                }
            }
        });
    }

    /// Mark one task completed, then refresh only the summary.
    pub fn complete_task(self, id: Id) {
        spawn_local(async move {
            match api::complete_task(&id).await {
                Ok(()) => {
                    log!("[TASKS] Completed task {}", id);
                    if !dispatch(&self.store, Action::CompleteSuccess(id)) {
                        return;
                    }
                    if let Err(e) = self.refresh_summary().await {
                        error!("[TASKS] Summary refresh failed: {}", e);
                        dispatch(&self.store, Action::LoadFailure);
                    }
                }
                Err(e) => {
                    error!("[TASKS] Complete {} failed: {}", id, e);
                    dispatch(&self.store, Action::ActionFailure);
                }
            }
        });
    }

    // ========================
    // Local UI State
    // ========================

    /// Show a toast and clear that same toast after the display period.
    pub fn show_toast(self, kind: ToastKind) {
        let Some(id) = self.next_seq() else { return };
        dispatch(&self.store, Action::ToastShow(Toast { id, kind }));

        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(config::TOAST_DURATION_MS).await;
            dispatch(&store, Action::ToastClear(id));
        });
    }

    pub fn dismiss_error(self) {
        dispatch(&self.store, Action::DismissError);
    }

    pub fn set_lang(self, lang: Lang) {
        dispatch(&self.store, Action::SetLang(lang));
    }

    pub fn open_draft(self) {
        dispatch(&self.store, Action::OpenDraft);
    }

    pub fn edit_draft(self, field: DraftField) {
        dispatch(&self.store, Action::EditDraft(field));
    }

    pub fn cancel_draft(self) {
        dispatch(&self.store, Action::CancelDraft);
    }

    // ========================
    // Live Coach
    // ========================

    /// Open the live socket. Only while disconnected.
    pub fn connect_live(self) {
        if !self.store.live().with_untracked(LiveCoach::can_connect) {
            return;
        }
        match LiveSocket::open(&config::live_url(), self.store) {
            // Replacing drops and closes any earlier socket
            Ok(socket) => self.socket.set_value(Some(socket)),
            Err(e) => error!("[LIVE] {}", e),
        }
    }

    /// Send the fixed demonstration text. Only while connected.
    pub fn send_live_test(self) {
        if !self.store.live().with_untracked(LiveCoach::can_send) {
            return;
        }
        self.socket.with_value(|socket| {
            if let Some(socket) = socket {
                if let Err(e) = socket.send_text(config::LIVE_TEST_MESSAGE) {
                    error!("[LIVE] {}", e);
                }
            }
        });
    }
}

/// Results of the four initial fetches
struct LoadOutcome {
    tasks: Result<Vec<Task>, ApiError>,
    summary: Result<Summary, ApiError>,
    dogs: Result<Vec<Dog>, ApiError>,
    exercises: Result<Vec<Exercise>, ApiError>,
}

impl LoadOutcome {
    /// Task and summary failures raise one load error; missing reference
    /// data becomes empty lists. Always ends with `LoadFinished`.
    fn into_actions(self, tasks_seq: u64, summary_seq: u64) -> Vec<Action> {
        let mut actions = Vec::new();
        let mut failed = false;

        match self.tasks {
            Ok(tasks) => {
                log!("[LOAD] Loaded {} tasks", tasks.len());
                actions.push(Action::TasksLoaded { seq: tasks_seq, tasks });
            }
            Err(e) => {
                error!("[LOAD] Tasks failed: {}", e);
                failed = true;
            }
        }
        match self.summary {
            Ok(summary) => actions.push(Action::SummaryLoaded { seq: summary_seq, summary }),
            Err(e) => {
                error!("[LOAD] Summary failed: {}", e);
                failed = true;
            }
        }

        // Reference data is optional; the form just offers no choices
        let dogs = self.dogs.unwrap_or_else(|e| {
            warn!("[LOAD] Dogs unavailable: {}", e);
            Vec::new()
        });
        let exercises = self.exercises.unwrap_or_else(|e| {
            warn!("[LOAD] Exercises unavailable: {}", e);
            Vec::new()
        });
        actions.push(Action::ReferenceLoaded { dogs, exercises });

        if failed {
            actions.push(Action::LoadFailure);
        }
        actions.push(Action::LoadFinished);
        actions
    }
}
