#![forbid(unsafe_code)]

//! Typed configuration for a single widget instance.
//!
//! # Design
//!
//! All attribute strings enter through [`WidgetConfig::apply`], which is the
//! only place the external kebab-case names are mapped to fields.
//!
//! ## Invariants
//! 1. Every field has a non-empty effective value. `font_google` is the only
//!    optional field; `None` means no remote font is requested.
//! 2. A removed attribute, or one set to `""`, falls back to its default.
//! 3. Lengths and colors are stored verbatim; the styling engine decides
//!    what a malformed value means.
//! 4. `font_weight` is always an integer in `1..=1000`.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::attribute::Attribute;
use crate::error::WidgetError;

pub const DEFAULT_FONT_FALLBACK: &str = "sans-serif";
pub const DEFAULT_FONT_WEIGHT: u16 = 400;
pub const DEFAULT_FONT_SIZE: &str = "18px";
pub const DEFAULT_LABEL_FONT_SIZE: &str = "16px";
pub const DEFAULT_LABEL: &str = "Label";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";
pub const DEFAULT_INPUT_COLOR: &str = "#000000";
pub const DEFAULT_UNDERLINE_COLOR: &str = "rgba(0, 0, 0, 0.75)";
pub const DEFAULT_LABEL_COLOR: &str = "rgba(0, 0, 0, 0.5)";

// ---------------------------------------------------------------------------
// FontWeight
// ---------------------------------------------------------------------------

/// Numeric CSS font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FontWeight(u16);

impl FontWeight {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 1000;

    /// Create a weight, rejecting values outside `1..=1000`.
    #[must_use]
    pub const fn new(weight: u16) -> Option<Self> {
        if weight >= Self::MIN && weight <= Self::MAX {
            Some(Self(weight))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Parse the attribute form (`"700"`, `" 300 "`). Keywords such as
    /// `bold` are not accepted.
    pub fn parse(value: &str) -> Result<Self, WidgetError> {
        value
            .trim()
            .parse::<u16>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| WidgetError::InvalidFontWeight(value.to_owned()))
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self(DEFAULT_FONT_WEIGHT)
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// CssLength / CssColor
// ---------------------------------------------------------------------------

/// A CSS length forwarded verbatim to the style engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CssLength(String);

impl CssLength {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric magnitude with the first `px` unit stripped.
    ///
    /// Returns `None` when the remainder is not a finite number. Surrounding
    /// whitespace is ignored and an empty remainder counts as zero.
    #[must_use]
    pub fn pixel_magnitude(&self) -> Option<f64> {
        let stripped = self.0.replacen("px", "", 1);
        let trimmed = stripped.trim();
        if trimmed.is_empty() {
            return Some(0.0);
        }
        trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A CSS color forwarded verbatim to the style engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CssColor(String);

impl CssColor {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// WidgetConfig
// ---------------------------------------------------------------------------

/// Live configuration of one `<labeled-input>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WidgetConfig {
    font_google: Option<String>,
    font_fallback: String,
    font_weight: FontWeight,
    font_size: CssLength,
    label_font_size: CssLength,
    label: String,
    background_color: CssColor,
    input_color: CssColor,
    underline_color: CssColor,
    label_color: CssColor,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            font_google: None,
            font_fallback: DEFAULT_FONT_FALLBACK.to_owned(),
            font_weight: FontWeight::default(),
            font_size: CssLength::new(DEFAULT_FONT_SIZE),
            label_font_size: CssLength::new(DEFAULT_LABEL_FONT_SIZE),
            label: DEFAULT_LABEL.to_owned(),
            background_color: CssColor::new(DEFAULT_BACKGROUND_COLOR),
            input_color: CssColor::new(DEFAULT_INPUT_COLOR),
            underline_color: CssColor::new(DEFAULT_UNDERLINE_COLOR),
            label_color: CssColor::new(DEFAULT_LABEL_COLOR),
        }
    }
}

/// Result of building a config from raw attributes, with diagnostics.
#[derive(Debug, Clone)]
pub struct ConfigParse {
    pub config: WidgetConfig,
    pub errors: Vec<WidgetError>,
}

impl WidgetConfig {
    /// Build a config from `(name, value)` attribute pairs.
    ///
    /// Unknown names and invalid values are collected in
    /// [`ConfigParse::errors`]; the affected fields keep their defaults.
    #[must_use]
    pub fn from_attributes<'a, I>(attributes: I) -> ConfigParse
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();
        for (name, value) in attributes {
            let result = name
                .parse::<Attribute>()
                .and_then(|attr| config.apply(attr, Some(value)));
            if let Err(err) = result {
                errors.push(err);
            }
        }
        ConfigParse { config, errors }
    }

    /// Apply one attribute value. `None` (attribute removed) and `""` both
    /// restore the default.
    ///
    /// Returns `Ok(true)` when the effective value changed.
    pub fn apply(&mut self, attr: Attribute, value: Option<&str>) -> Result<bool, WidgetError> {
        let value = value.filter(|v| !v.is_empty());
        let changed = match attr {
            Attribute::FontGoogle => replace(&mut self.font_google, value.map(str::to_owned)),
            Attribute::FontFallback => replace(
                &mut self.font_fallback,
                value.unwrap_or(DEFAULT_FONT_FALLBACK).to_owned(),
            ),
            Attribute::FontWeight => {
                let weight = match value {
                    Some(raw) => FontWeight::parse(raw).inspect_err(|err| {
                        warn!(
                            attribute = attr.name(),
                            value = raw,
                            %err,
                            "rejected attribute value"
                        );
                    })?,
                    None => FontWeight::default(),
                };
                replace(&mut self.font_weight, weight)
            }
            Attribute::FontSize => replace(
                &mut self.font_size,
                CssLength::new(value.unwrap_or(DEFAULT_FONT_SIZE)),
            ),
            Attribute::LabelFontSize => replace(
                &mut self.label_font_size,
                CssLength::new(value.unwrap_or(DEFAULT_LABEL_FONT_SIZE)),
            ),
            Attribute::Label => {
                replace(&mut self.label, value.unwrap_or(DEFAULT_LABEL).to_owned())
            }
            Attribute::BackgroundColor => replace(
                &mut self.background_color,
                CssColor::new(value.unwrap_or(DEFAULT_BACKGROUND_COLOR)),
            ),
            Attribute::InputColor => replace(
                &mut self.input_color,
                CssColor::new(value.unwrap_or(DEFAULT_INPUT_COLOR)),
            ),
            Attribute::UnderlineColor => replace(
                &mut self.underline_color,
                CssColor::new(value.unwrap_or(DEFAULT_UNDERLINE_COLOR)),
            ),
            Attribute::LabelColor => replace(
                &mut self.label_color,
                CssColor::new(value.unwrap_or(DEFAULT_LABEL_COLOR)),
            ),
        };
        Ok(changed)
    }

    /// The current attribute value in its markup form.
    #[must_use]
    pub fn get(&self, attr: Attribute) -> Option<String> {
        match attr {
            Attribute::FontGoogle => self.font_google.clone(),
            Attribute::FontFallback => Some(self.font_fallback.clone()),
            Attribute::FontWeight => Some(self.font_weight.to_string()),
            Attribute::FontSize => Some(self.font_size.to_string()),
            Attribute::LabelFontSize => Some(self.label_font_size.to_string()),
            Attribute::Label => Some(self.label.clone()),
            Attribute::BackgroundColor => Some(self.background_color.to_string()),
            Attribute::InputColor => Some(self.input_color.to_string()),
            Attribute::UnderlineColor => Some(self.underline_color.to_string()),
            Attribute::LabelColor => Some(self.label_color.to_string()),
        }
    }

    #[must_use]
    pub fn font_google(&self) -> Option<&str> {
        self.font_google.as_deref()
    }

    #[must_use]
    pub fn font_fallback(&self) -> &str {
        &self.font_fallback
    }

    #[must_use]
    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    #[must_use]
    pub fn font_size(&self) -> &CssLength {
        &self.font_size
    }

    #[must_use]
    pub fn label_font_size(&self) -> &CssLength {
        &self.label_font_size
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn background_color(&self) -> &CssColor {
        &self.background_color
    }

    #[must_use]
    pub fn input_color(&self) -> &CssColor {
        &self.input_color
    }

    #[must_use]
    pub fn underline_color(&self) -> &CssColor {
        &self.underline_color
    }

    #[must_use]
    pub fn label_color(&self) -> &CssColor {
        &self.label_color
    }

    /// `'<google>', <fallback>` when a remote font is configured, otherwise
    /// the fallback alone.
    #[must_use]
    pub fn font_family(&self) -> String {
        match &self.font_google {
            Some(google) => format!("'{google}', {}", self.font_fallback),
            None => self.font_fallback.clone(),
        }
    }

    /// Loader family spec `<family>:<weight>`, if a remote font is configured.
    #[must_use]
    pub fn google_family_spec(&self) -> Option<String> {
        self.font_google
            .as_ref()
            .map(|family| format!("{family}:{}", self.font_weight))
    }

    /// Top padding of the wrapper: the label font size magnitude in pixels.
    #[must_use]
    pub fn padding_top(&self) -> String {
        let magnitude = self.label_font_size.pixel_magnitude().unwrap_or(0.0);
        format!("{magnitude}px")
    }

    /// Serialize the effective configuration as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn replace<T: PartialEq>(slot: &mut T, next: T) -> bool {
    if *slot == next {
        return false;
    }
    *slot = next;
    true
}
