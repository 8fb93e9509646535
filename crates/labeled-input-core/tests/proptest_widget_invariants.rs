#![forbid(unsafe_code)]

//! Property tests for configuration and rendering invariants.

use labeled_input_core::{
    Attribute, FloatingLabelInput, RecordingFontProvider, RecordingHost, StyleVars, VisualState,
    WidgetConfig,
};
use proptest::prelude::*;

fn attribute_strategy() -> impl Strategy<Value = Attribute> {
    prop::sample::select(Attribute::ALL.to_vec())
}

/// Values a host page might plausibly set, including empty and junk.
fn value_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        (1u16..=1000).prop_map(|n| Some(n.to_string())),
        (0u16..200).prop_map(|n| Some(format!("{n}px"))),
        "[a-zA-Z #(),.0-9-]{1,16}".prop_map(Some),
    ]
}

fn changes_strategy() -> impl Strategy<Value = Vec<(Attribute, Option<String>)>> {
    prop::collection::vec((attribute_strategy(), value_strategy()), 0..24)
}

#[derive(Debug, Clone)]
enum Interaction {
    Input(String),
    Focus,
    Blur,
}

fn interaction_strategy() -> impl Strategy<Value = Interaction> {
    prop_oneof![
        "[a-z]{0,4}".prop_map(Interaction::Input),
        Just(Interaction::Focus),
        Just(Interaction::Blur),
    ]
}

proptest! {
    #[test]
    fn every_field_stays_non_empty(changes in changes_strategy()) {
        let mut config = WidgetConfig::default();
        for (attr, value) in &changes {
            let _ = config.apply(*attr, value.as_deref());
        }
        for attr in Attribute::ALL {
            match config.get(attr) {
                Some(v) => prop_assert!(!v.is_empty(), "{} is empty", attr),
                None => prop_assert_eq!(attr, Attribute::FontGoogle),
            }
        }
    }

    #[test]
    fn render_is_idempotent(changes in changes_strategy()) {
        let mut config = WidgetConfig::default();
        for (attr, value) in &changes {
            let _ = config.apply(*attr, value.as_deref());
        }
        prop_assert_eq!(StyleVars::derive(&config), StyleVars::derive(&config));

        let mut widget =
            FloatingLabelInput::new(RecordingHost::new(), RecordingFontProvider::new());
        for (attr, value) in &changes {
            let _ = widget.attribute_changed(attr.name(), None, value.as_deref());
        }
        widget.connect();
        let first = widget.host().style().clone();
        widget.render();
        prop_assert_eq!(&first, widget.host().style());
    }

    #[test]
    fn reapplying_current_value_is_a_no_op(
        changes in changes_strategy(),
        attr in attribute_strategy(),
    ) {
        let mut widget =
            FloatingLabelInput::new(RecordingHost::new(), RecordingFontProvider::new());
        widget.connect();
        for (a, value) in &changes {
            let _ = widget.attribute_changed(a.name(), None, value.as_deref());
        }
        let renders = widget.render_count();
        let current = widget.config().get(attr);
        let _ = widget.attribute_changed(attr.name(), None, current.as_deref());
        prop_assert_eq!(widget.render_count(), renders);
    }

    #[test]
    fn state_tracks_last_focus_and_value(
        steps in prop::collection::vec(interaction_strategy(), 0..32),
    ) {
        let mut widget =
            FloatingLabelInput::new(RecordingHost::new(), RecordingFontProvider::new());
        widget.connect();
        let mut focused = false;
        let mut text = String::new();
        for step in &steps {
            match step {
                Interaction::Input(v) => {
                    let event = widget.on_input(v);
                    prop_assert_eq!(event.map(|e| e.value), Some(v.clone()));
                    text.clone_from(v);
                }
                Interaction::Focus => {
                    widget.on_focus();
                    focused = true;
                }
                Interaction::Blur => {
                    widget.on_blur();
                    focused = false;
                }
            }
        }
        prop_assert_eq!(widget.is_focused(), focused);
        prop_assert_eq!(widget.has_value(), !text.is_empty());
        prop_assert_eq!(widget.host().has_class("focus"), focused);
        prop_assert_eq!(widget.host().has_class("has-value"), !text.is_empty());
        prop_assert_eq!(
            widget.state().underline_height(),
            if widget.state() == VisualState::empty() { "1px" } else { "2px" }
        );
    }
}
