#![forbid(unsafe_code)]

//! Rejected input is surfaced through `tracing` rather than silently dropped.

use labeled_input_core::{FloatingLabelInput, NoopFontProvider, RecordingHost};
use tracing_test::traced_test;

fn connected() -> FloatingLabelInput<RecordingHost, NoopFontProvider> {
    let mut widget = FloatingLabelInput::new(RecordingHost::new(), NoopFontProvider);
    widget.connect();
    widget
}

#[traced_test]
#[test]
fn invalid_weight_logs_a_warning() {
    let mut widget = connected();
    let _ = widget.attribute_changed("font-weight", None, Some("bold"));
    assert!(logs_contain("rejected attribute value"));
    assert!(logs_contain("font-weight"));
}

#[traced_test]
#[test]
fn unknown_attribute_logs_a_warning() {
    let mut widget = connected();
    let _ = widget.attribute_changed("autofocus", None, Some(""));
    assert!(logs_contain("ignoring attribute"));
}

#[traced_test]
#[test]
fn font_request_is_logged() {
    let mut widget = FloatingLabelInput::new(RecordingHost::new(), NoopFontProvider);
    widget
        .attribute_changed("font-google", None, Some("Roboto"))
        .unwrap();
    widget.connect();
    assert!(logs_contain("requesting web font"));
    assert!(logs_contain("Roboto:400"));
}
