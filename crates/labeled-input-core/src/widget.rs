#![forbid(unsafe_code)]

//! The floating-label input state machine.
//!
//! [`FloatingLabelInput`] receives the element's lifecycle callbacks and the
//! native input's `input`/`focus`/`blur` events, keeps [`WidgetConfig`] and
//! [`VisualState`] current, and writes the results through a [`Host`].
//!
//! # Design
//!
//! ## Lifecycle
//! `Detached` → `Connected` ⇄ `Disconnected`.
//!
//! ## Invariants
//! 1. The host is only mutated while `Connected`.
//! 2. Every render writes the full set of style properties and the label text.
//! 3. An attribute change that leaves the effective value unchanged never
//!    renders.
//! 4. A given `<family>:<weight>` spec is requested from the font provider at
//!    most once per widget.
//!
//! ## Failure Modes
//! - Unknown attribute names and invalid font weights are reported and
//!   leave the configuration untouched; rendering continues with the
//!   previous values.
//! - Callbacks arriving after disconnect are dropped silently. Font loads
//!   already in flight are abandoned; their completion touches nothing here.

use std::collections::BTreeMap;

use tracing::{debug, debug_span, trace, warn};

use crate::attribute::Attribute;
use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::event::SubmitEvent;
use crate::font::{FontProvider, FontRequest};
use crate::host::Host;
use crate::state::VisualState;
use crate::style::StyleVars;

/// Attachment state of the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lifecycle {
    /// Created but never attached to a page.
    #[default]
    Detached,
    /// Attached; the host may be mutated.
    Connected,
    /// Removed from the page after having been attached.
    Disconnected,
}

/// Outcome of [`FloatingLabelInput::attribute_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeChange {
    /// The effective value did not change; nothing happened.
    Unchanged,
    /// Stored in the config; rendering deferred until connected.
    Stored,
    /// Stored and re-rendered.
    Rendered,
}

/// Summary of a bulk [`FloatingLabelInput::configure`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigureReport {
    /// Attributes whose effective value changed.
    pub changed: Vec<Attribute>,
    /// Per-key problems; the remaining keys were still applied.
    pub errors: Vec<WidgetError>,
    /// Whether a render was performed.
    pub rendered: bool,
}

/// A floating-label text input bound to a host subtree.
pub struct FloatingLabelInput<H, F> {
    host: H,
    fonts: F,
    config: WidgetConfig,
    state: VisualState,
    value: String,
    lifecycle: Lifecycle,
    requested_fonts: Vec<String>,
    render_count: u64,
}

impl<H, F> FloatingLabelInput<H, F>
where
    H: Host,
    F: FontProvider,
{
    /// Create a detached widget with the default configuration.
    pub fn new(host: H, fonts: F) -> Self {
        Self {
            host,
            fonts,
            config: WidgetConfig::default(),
            state: VisualState::empty(),
            value: String::new(),
            lifecycle: Lifecycle::Detached,
            requested_fonts: Vec::new(),
            render_count: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Attach to the page: request the remote font, then render.
    ///
    /// Attributes set before this call are already in the config; unset
    /// ones hold their defaults.
    pub fn connect(&mut self) {
        if self.lifecycle == Lifecycle::Connected {
            return;
        }
        debug!(from = ?self.lifecycle, "labeled-input connected");
        self.lifecycle = Lifecycle::Connected;
        self.request_font();
        self.render();
    }

    /// Detach from the page. Later callbacks become no-ops.
    pub fn disconnect(&mut self) {
        if self.lifecycle != Lifecycle::Connected {
            return;
        }
        debug!(renders = self.render_count, "labeled-input disconnected");
        self.lifecycle = Lifecycle::Disconnected;
    }

    /// Handle an observed attribute change.
    ///
    /// Whether anything changed is decided against the current config, not
    /// `old`: after [`configure`](Self::configure) the element attribute and
    /// the config can disagree, and setting the attribute again must win.
    /// While not connected the value is stored for the next connect.
    pub fn attribute_changed(
        &mut self,
        name: &str,
        old: Option<&str>,
        new: Option<&str>,
    ) -> Result<AttributeChange, WidgetError> {
        trace!(attribute = name, ?old, ?new, "attribute changed");
        let attr = name.parse::<Attribute>().inspect_err(|err| {
            warn!(attribute = name, %err, "ignoring attribute");
        })?;
        if !self.config.apply(attr, new)? {
            trace!(attribute = name, "effective value unchanged");
            return Ok(AttributeChange::Unchanged);
        }
        if !self.is_connected() {
            return Ok(AttributeChange::Stored);
        }
        if attr.affects_font_request() {
            self.request_font();
        }
        self.render();
        Ok(AttributeChange::Rendered)
    }

    /// Apply a JSON object of `attribute-name: value` pairs and render once.
    ///
    /// String values are used as-is, numbers and booleans are stringified,
    /// and `null` restores the default. Unknown keys and invalid values are
    /// reported in [`ConfigureReport::errors`]; a malformed document is an
    /// error.
    ///
    /// The element's attributes are not rewritten. A later attribute change
    /// to any value that differs from the configured one, including the
    /// attribute's current value, replaces it.
    pub fn configure(&mut self, json: &str) -> Result<ConfigureReport, WidgetError> {
        let entries: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| WidgetError::Json(e.to_string()))?;

        let mut report = ConfigureReport::default();
        for (name, value) in entries {
            let raw = match value {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Number(n) => Some(n.to_string()),
                serde_json::Value::Bool(b) => Some(b.to_string()),
                other => {
                    report.errors.push(WidgetError::Json(format!(
                        "{name}: expected string, number, bool, or null, got {other}"
                    )));
                    continue;
                }
            };
            let applied = name
                .parse::<Attribute>()
                .and_then(|attr| Ok((attr, self.config.apply(attr, raw.as_deref())?)));
            match applied {
                Ok((attr, true)) => report.changed.push(attr),
                Ok((_, false)) => {}
                Err(err) => {
                    warn!(attribute = %name, %err, "ignoring configured value");
                    report.errors.push(err);
                }
            }
        }

        if self.is_connected() && !report.changed.is_empty() {
            if report.changed.iter().any(|a| a.affects_font_request()) {
                self.request_font();
            }
            self.render();
            report.rendered = true;
        }
        Ok(report)
    }

    // -----------------------------------------------------------------------
    // Interaction
    // -----------------------------------------------------------------------

    /// The native input's value changed.
    ///
    /// Returns the `submit` event to dispatch, or `None` when not connected.
    #[must_use = "the submit event must be dispatched by the caller"]
    pub fn on_input(&mut self, value: &str) -> Option<SubmitEvent> {
        if !self.is_connected() {
            return None;
        }
        value.clone_into(&mut self.value);
        self.set_flag(VisualState::HAS_VALUE, !value.is_empty());
        Some(SubmitEvent::new(value))
    }

    /// The native input gained focus.
    pub fn on_focus(&mut self) {
        if self.is_connected() {
            self.set_flag(VisualState::FOCUS, true);
        }
    }

    /// The native input lost focus.
    pub fn on_blur(&mut self) {
        if self.is_connected() {
            self.set_flag(VisualState::FOCUS, false);
        }
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Re-apply every derived style property and the label text.
    ///
    /// Returns `false` without touching the host when not connected.
    pub fn render(&mut self) -> bool {
        if !self.is_connected() {
            return false;
        }
        let _span = debug_span!("labeled_input.render", render = self.render_count).entered();
        let vars = StyleVars::derive(&self.config);
        for (name, value) in vars.iter() {
            self.host.set_style_property(name, value);
        }
        self.host.set_label_text(vars.label_text());
        self.render_count += 1;
        true
    }

    fn set_flag(&mut self, flag: VisualState, on: bool) {
        self.state.set(flag, on);
        if let Some(class) = flag.class_name() {
            self.host.set_wrapper_class(class, on);
        }
    }

    fn request_font(&mut self) {
        let Some(spec) = self.config.google_family_spec() else {
            return;
        };
        if self.requested_fonts.contains(&spec) {
            trace!(family = %spec, "font already requested");
            return;
        }
        debug!(family = %spec, "requesting web font");
        self.requested_fonts.push(spec.clone());
        self.fonts.load(FontRequest::google(spec));
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> VisualState {
        self.state
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.state.contains(VisualState::FOCUS)
    }

    #[must_use]
    pub fn has_value(&self) -> bool {
        self.state.contains(VisualState::HAS_VALUE)
    }

    /// Text last reported by the native input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.lifecycle == Lifecycle::Connected
    }

    /// Number of renders performed so far.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }
}
