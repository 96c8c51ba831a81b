//! Dashboard Header Component
//!
//! Title, language selector and the new-task button.

use leptos::prelude::*;

use crate::components::Logo;
use crate::controller::use_dashboard;
use crate::i18n::{Lang, LANGUAGES};
use crate::store::DashboardStateStoreFields;

/// Top bar of the dashboard
#[component]
pub fn Header() -> impl IntoView {
    let dashboard = use_dashboard();
    let lang = dashboard.store.lang();
    let t = move || lang.get().strings();

    view! {
        <header class="dashboard-header">
            <div class="header-brand">
                <Logo />
                <div>
                    <h1>{move || t().title}</h1>
                    <p class="subtitle">{move || t().subtitle}</p>
                </div>
            </div>

            <div class="header-actions">
                <select
                    class="lang-select"
                    on:change=move |ev| dashboard.set_lang(Lang::from_code(&event_target_value(&ev)))
                >
                    {LANGUAGES.iter().map(|&(option, name)| view! {
                        <option value=option.code() selected=move || lang.get() == option>{name}</option>
                    }).collect_view()}
                </select>
                <button class="new-task-btn" on:click=move |_| dashboard.open_draft()>
                    "+ " {move || t().new_task}
                </button>
            </div>
        </header>
    }
}
