#![forbid(unsafe_code)]

//! The DOM surface the widget is allowed to mutate.
//!
//! A [`Host`] owns the closed shadow subtree. The widget only ever touches
//! three things through it: custom properties on the host element, the
//! label text, and the state classes on the wrapper.

/// Mutation seam between widget logic and the rendered subtree.
pub trait Host {
    /// Set a custom property (`--name`) scoped to the widget.
    fn set_style_property(&mut self, name: &str, value: &str);

    /// Replace the label's text content.
    fn set_label_text(&mut self, text: &str);

    /// Add (`present = true`) or remove a class on the wrapper.
    fn set_wrapper_class(&mut self, class: &str, present: bool);
}

pub use recording::{HostMutation, RecordingHost};

/// In-memory host for native tests and headless drivers.
mod recording {
    use std::collections::{BTreeMap, BTreeSet};

    use super::Host;

    /// One call made against a [`RecordingHost`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum HostMutation {
        StyleProperty { name: String, value: String },
        LabelText(String),
        WrapperClass { class: String, present: bool },
    }

    /// In-memory host that keeps both the mutation log and the resulting
    /// state of the subtree.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingHost {
        mutations: Vec<HostMutation>,
        style: BTreeMap<String, String>,
        label_text: String,
        classes: BTreeSet<String>,
    }

    impl RecordingHost {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn mutations(&self) -> &[HostMutation] {
            &self.mutations
        }

        #[must_use]
        pub fn mutation_count(&self) -> usize {
            self.mutations.len()
        }

        /// Number of style property writes, counting repeats.
        #[must_use]
        pub fn style_write_count(&self) -> usize {
            self.mutations
                .iter()
                .filter(|m| matches!(m, HostMutation::StyleProperty { .. }))
                .count()
        }

        #[must_use]
        pub fn style_property(&self, name: &str) -> Option<&str> {
            self.style.get(name).map(String::as_str)
        }

        /// Current custom properties, sorted by name.
        #[must_use]
        pub fn style(&self) -> &BTreeMap<String, String> {
            &self.style
        }

        #[must_use]
        pub fn label_text(&self) -> &str {
            &self.label_text
        }

        #[must_use]
        pub fn has_class(&self, class: &str) -> bool {
            self.classes.contains(class)
        }

        pub fn clear_log(&mut self) {
            self.mutations.clear();
        }
    }

    impl Host for RecordingHost {
        fn set_style_property(&mut self, name: &str, value: &str) {
            self.style.insert(name.to_owned(), value.to_owned());
            self.mutations.push(HostMutation::StyleProperty {
                name: name.to_owned(),
                value: value.to_owned(),
            });
        }

        fn set_label_text(&mut self, text: &str) {
            text.clone_into(&mut self.label_text);
            self.mutations.push(HostMutation::LabelText(text.to_owned()));
        }

        fn set_wrapper_class(&mut self, class: &str, present: bool) {
            if present {
                self.classes.insert(class.to_owned());
            } else {
                self.classes.remove(class);
            }
            self.mutations.push(HostMutation::WrapperClass {
                class: class.to_owned(),
                present,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_host_tracks_log_and_state() {
        let mut host = RecordingHost::new();
        host.set_style_property("--font-size", "18px");
        host.set_style_property("--font-size", "20px");
        host.set_wrapper_class("focus", true);
        host.set_label_text("Email");
        host.set_wrapper_class("focus", false);

        assert_eq!(host.style_property("--font-size"), Some("20px"));
        assert_eq!(host.style_write_count(), 2);
        assert_eq!(host.label_text(), "Email");
        assert!(!host.has_class("focus"));
        assert_eq!(host.mutation_count(), 5);

        host.clear_log();
        assert_eq!(host.mutation_count(), 0);
        assert_eq!(host.style_property("--font-size"), Some("20px"));
    }
}
