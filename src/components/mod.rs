//! UI Components
//!
//! Leptos views over the dashboard store.

mod analytics_panel;
mod error_banner;
mod header;
mod live_coach_panel;
mod logo;
mod new_task_modal;
mod task_list;
mod toast;

pub use analytics_panel::AnalyticsPanel;
pub use error_banner::ErrorBanner;
pub use header::Header;
pub use live_coach_panel::LiveCoachPanel;
pub use logo::Logo;
pub use new_task_modal::NewTaskModal;
pub use task_list::TaskList;
pub use toast::Toast;
