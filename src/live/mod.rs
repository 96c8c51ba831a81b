//! Live Coach
//!
//! Inbound frame parsing and the connection/message state of the live
//! coaching panel. The browser socket lives in [`socket`].

mod socket;

pub use socket::{LiveError, LiveSocket};

use serde::Deserialize;

/// One coaching message received over the live socket
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LiveMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl LiveMessage {
    /// Parse a text frame. Anything that is not a JSON object with a
    /// string `type` yields `None`.
    pub fn parse(frame: &str) -> Option<Self> {
        serde_json::from_str(frame).ok()
    }

    /// `message` when non-empty, otherwise `text`
    pub fn body(&self) -> &str {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => self.text.as_deref().unwrap_or_default(),
        }
    }

    /// Display line, `type: body`
    pub fn line(&self) -> String {
        format!("{}: {}", self.kind, self.body())
    }
}

/// Connection flag and append-only message log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveCoach {
    pub connected: bool,
    pub messages: Vec<LiveMessage>,
}

impl LiveCoach {
    pub fn can_connect(&self) -> bool {
        !self.connected
    }

    pub fn can_send(&self) -> bool {
        self.connected
    }

    /// Append a frame if it parses; returns whether it was kept.
    pub fn receive(&mut self, frame: &str) -> bool {
        match LiveMessage::parse(frame) {
            Some(message) => {
                self.messages.push(message);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_and_text_variants() {
        let msg = LiveMessage::parse(r#"{"type": "tip", "message": "Good sit!"}"#).unwrap();
        assert_eq!(msg.line(), "tip: Good sit!");

        let msg = LiveMessage::parse(r#"{"type": "echo", "text": "hello coach"}"#).unwrap();
        assert_eq!(msg.line(), "echo: hello coach");

        let msg = LiveMessage::parse(r#"{"type": "both", "message": "", "text": "fallback"}"#).unwrap();
        assert_eq!(msg.body(), "fallback");

        let msg = LiveMessage::parse(r#"{"type": "bare"}"#).unwrap();
        assert_eq!(msg.line(), "bare: ");
    }

    #[test]
    fn test_unparseable_frame_is_dropped() {
        let mut coach = LiveCoach::default();
        assert!(coach.receive(r#"{"type": "tip", "message": "one"}"#));
        assert!(!coach.receive("hello coach"));
        assert!(!coach.receive("[1, 2]"));
        assert!(!coach.receive(r#"{"message": "no type"}"#));
        assert_eq!(coach.messages.len(), 1);
    }

    #[test]
    fn test_messages_append_in_arrival_order() {
        let mut coach = LiveCoach::default();
        coach.receive(r#"{"type": "a", "text": "1"}"#);
        coach.receive(r#"{"type": "a", "text": "1"}"#);
        coach.receive(r#"{"type": "b", "text": "2"}"#);
        let lines: Vec<String> = coach.messages.iter().map(LiveMessage::line).collect();
        assert_eq!(lines, vec!["a: 1", "a: 1", "b: 2"]);
    }

    #[test]
    fn test_actions_follow_connection_state() {
        let mut coach = LiveCoach::default();
        assert!(coach.can_connect());
        assert!(!coach.can_send());
        coach.connected = true;
        assert!(!coach.can_connect());
        assert!(coach.can_send());
    }

    #[test]
    fn test_live_error_messages_name_the_failure() {
        let err = LiveError::Open {
            url: "ws://localhost:8000/ws/live".to_string(),
            detail: "SyntaxError".to_string(),
        };
        assert_eq!(err.to_string(), "could not open socket to ws://localhost:8000/ws/live: SyntaxError");
        assert_eq!(LiveError::Send("closed".to_string()).to_string(), "send failed: closed");
    }
}
