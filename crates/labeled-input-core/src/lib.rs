#![forbid(unsafe_code)]

//! Core of the `<labeled-input>` floating-label text field.
//!
//! # Role
//! This crate holds everything about the widget that does not need a
//! browser: the typed attribute configuration, the focus/has-value state,
//! the derivation of scoped CSS custom properties, the shadow-root template,
//! and the lifecycle state machine. `labeled-input-web` binds it to the DOM.
//!
//! # Primary pieces
//! - **[`FloatingLabelInput`]**: lifecycle + interaction state machine.
//! - **[`WidgetConfig`]** / **[`Attribute`]**: the ten observed attributes,
//!   mapped to typed fields at a single boundary.
//! - **[`StyleVars`]**: pure render output.
//! - **[`Host`]** / **[`FontProvider`]**: the two injectable seams.
//!
//! # Example
//! ```
//! use labeled_input_core::{FloatingLabelInput, Host, NoopFontProvider};
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl Host for Log {
//!     fn set_style_property(&mut self, name: &str, value: &str) {
//!         self.0.push(format!("{name}={value}"));
//!     }
//!     fn set_label_text(&mut self, text: &str) {
//!         self.0.push(format!("label={text}"));
//!     }
//!     fn set_wrapper_class(&mut self, class: &str, present: bool) {
//!         self.0.push(format!("{class}:{present}"));
//!     }
//! }
//!
//! let mut widget = FloatingLabelInput::new(Log::default(), NoopFontProvider);
//! widget.attribute_changed("label", None, Some("Email")).unwrap();
//! widget.connect();
//! let event = widget.on_input("me@example.com").unwrap();
//! assert_eq!(event.value, "me@example.com");
//! assert!(widget.has_value());
//! ```

pub mod attribute;
pub mod config;
pub mod error;
pub mod event;
pub mod font;
pub mod host;
pub mod state;
pub mod style;
pub mod template;
pub mod widget;

pub use attribute::Attribute;
pub use config::{ConfigParse, CssColor, CssLength, FontWeight, WidgetConfig};
pub use error::WidgetError;
pub use event::{SUBMIT_EVENT, SubmitEvent};
pub use font::{FontProvider, FontRequest, NoopFontProvider, RecordingFontProvider};
pub use host::{Host, HostMutation, RecordingHost};
pub use state::{LabelPose, VisualState};
pub use style::{StyleVar, StyleVars};
pub use widget::{AttributeChange, ConfigureReport, FloatingLabelInput, Lifecycle};
