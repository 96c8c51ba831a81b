//! Live Coach Socket
//!
//! Browser WebSocket wired into the dashboard store. Single attempt, no
//! reconnection and no heartbeat.

use leptos::logging::{error, log, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use thiserror::Error;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use crate::store::{dispatch, Action, DashboardStore};

/// Socket failures surfaced to the controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiveError {
    #[error("could not open socket to {url}: {detail}")]
    Open { url: String, detail: String },

    #[error("send failed: {0}")]
    Send(String),
}

/// Browser exceptions usually carry a message string
fn js_detail(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Open live coaching socket. Dropping it closes the connection.
pub struct LiveSocket {
    ws: WebSocket,
    _on_open: Closure<dyn FnMut(JsValue)>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
    _on_error: Closure<dyn FnMut(JsValue)>,
}

impl LiveSocket {
    /// Start connecting. The store flips to connected on the open event.
    pub fn open(url: &str, store: DashboardStore) -> Result<Self, LiveError> {
        let ws = WebSocket::new(url).map_err(|e| LiveError::Open {
            url: url.to_string(),
            detail: js_detail(&e),
        })?;
        log!("[LIVE] Connecting to {}", url);

        let on_open = Closure::wrap(Box::new(move |_: JsValue| {
            log!("[LIVE] Connected");
            dispatch(&store, Action::LiveConnected);
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            // Binary frames are not part of the protocol
            let Ok(text) = event.data().dyn_into::<js_sys::JsString>() else {
                warn!("[LIVE] Ignoring non-text frame");
                return;
            };
            dispatch(&store, Action::LiveFrame(String::from(text)));
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
            log!("[LIVE] Closed: code={}, reason={}", event.code(), event.reason());
            dispatch(&store, Action::LiveDisconnected);
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        let on_error = Closure::wrap(Box::new(move |e: JsValue| {
            error!("[LIVE] Socket error: {:?}", e);
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        Ok(Self {
            ws,
            _on_open: on_open,
            _on_message: on_message,
            _on_close: on_close,
            _on_error: on_error,
        })
    }

    /// Send a plain text frame
    pub fn send_text(&self, text: &str) -> Result<(), LiveError> {
        self.ws.send_with_str(text).map_err(|e| LiveError::Send(js_detail(&e)))
    }
}

impl Drop for LiveSocket {
    fn drop(&mut self) {
        // Detach first so the browser never calls into freed closures
        self.ws.set_onopen(None);
        self.ws.set_onmessage(None);
        self.ws.set_onclose(None);
        self.ws.set_onerror(None);
        let _ = self.ws.close();
    }
}
