#![forbid(unsafe_code)]

//! The single outward notification of the widget.

use serde::Serialize;

/// DOM event type dispatched on every value change.
pub const SUBMIT_EVENT: &str = "submit";

/// Payload of the `submit` event, carried as the event `detail`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SubmitEvent {
    pub value: String,
}

impl SubmitEvent {
    /// The event crosses the shadow boundary so host listeners see it.
    pub const COMPOSED: bool = true;
    /// The event does not bubble; it is observable on the host element.
    pub const BUBBLES: bool = false;

    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// `detail` object as JSON: `{"value":"..."}`.
    #[must_use]
    pub fn detail_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_escapes_value() {
        let event = SubmitEvent::new("a \"quoted\" value");
        assert_eq!(event.detail_json(), r#"{"value":"a \"quoted\" value"}"#);
        assert_eq!(SubmitEvent::new("").detail_json(), r#"{"value":""}"#);
    }
}
