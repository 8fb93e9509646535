#![forbid(unsafe_code)]

//! Error type shared by the configuration boundary and the widget lifecycle.

use std::fmt;

/// Errors reported when an attribute cannot be applied.
///
/// None of these are fatal: the widget keeps its previous configuration and
/// continues to render. Callers that only care about the happy path can
/// ignore them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// The attribute name is not one of the observed attributes.
    UnknownAttribute(String),
    /// `font-weight` was not an integer in `1..=1000`.
    InvalidFontWeight(String),
    /// A JSON configuration object could not be decoded.
    Json(String),
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAttribute(name) => write!(f, "unknown attribute: {name}"),
            Self::InvalidFontWeight(value) => {
                write!(f, "invalid font-weight {value:?} (expected integer 1..=1000)")
            }
            Self::Json(msg) => write!(f, "JSON config error: {msg}"),
        }
    }
}

impl std::error::Error for WidgetError {}
