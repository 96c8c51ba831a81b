//! Live Coach Panel Component
//!
//! Connect/send controls and the received message log.

use leptos::prelude::*;

use crate::controller::use_dashboard;
use crate::live::LiveMessage;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn LiveCoachPanel() -> impl IntoView {
    let dashboard = use_dashboard();
    let live = dashboard.store.live();
    let lang = dashboard.store.lang();
    let t = move || lang.get().strings();
    let connected = move || live.with(|l| l.connected);

    view! {
        <div class="live-coach">
            <h3>"🎙 " {move || t().live}</h3>
            <div class="live-controls">
                <button
                    class="live-btn"
                    disabled=connected
                    on:click=move |_| dashboard.connect_live()
                >
                    "▶ " {move || if connected() { t().connected } else { t().connect }}
                </button>
                <button
                    class="live-btn send"
                    disabled=move || !connected()
                    on:click=move |_| dashboard.send_live_test()
                >
                    "✨ " {move || t().send_test}
                </button>
            </div>
            <div class="live-messages">
                {move || live.with(|l| {
                    l.messages.iter().map(|message: &LiveMessage| view! {
                        <div class="live-line">{message.line()}</div>
                    }).collect_view()
                })}
            </div>
        </div>
    }
}
