#![forbid(unsafe_code)]

//! Validation of custom element tag names.
//!
//! Registration throws in the browser for an invalid name; checking first
//! lets `defineLabeledInput` return a readable error instead.

use std::fmt;

pub use labeled_input_core::template::TAG_NAME as DEFAULT_TAG_NAME;

/// Names reserved by the HTML spec even though they contain a hyphen.
const RESERVED: [&str; 8] = [
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagNameError {
    MustStartWithLowercaseLetter(String),
    MissingHyphen(String),
    InvalidCharacter(String, char),
    Reserved(String),
}

impl fmt::Display for TagNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MustStartWithLowercaseLetter(name) => {
                write!(f, "custom element name must start with a-z: {name:?}")
            }
            Self::MissingHyphen(name) => {
                write!(f, "custom element name must contain a hyphen: {name:?}")
            }
            Self::InvalidCharacter(name, c) => {
                write!(f, "invalid character {c:?} in custom element name {name:?}")
            }
            Self::Reserved(name) => write!(f, "custom element name is reserved: {name:?}"),
        }
    }
}

impl std::error::Error for TagNameError {}

/// Check `name` against the valid custom element name production
/// (restricted to ASCII).
pub fn validate_tag_name(name: &str) -> Result<(), TagNameError> {
    let mut chars = name.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_lowercase()) {
        return Err(TagNameError::MustStartWithLowercaseLetter(name.to_owned()));
    }
    if let Some(bad) = chars.find(|&c| {
        !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'))
    }) {
        return Err(TagNameError::InvalidCharacter(name.to_owned(), bad));
    }
    if !name.contains('-') {
        return Err(TagNameError::MissingHyphen(name.to_owned()));
    }
    if RESERVED.contains(&name) {
        return Err(TagNameError::Reserved(name.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_tag_is_valid() {
        assert_eq!(validate_tag_name(DEFAULT_TAG_NAME), Ok(()));
        assert_eq!(validate_tag_name("my-input.v2_x"), Ok(()));
    }

    #[test]
    fn rejects_malformed_names() {
        assert_eq!(
            validate_tag_name("labeledinput"),
            Err(TagNameError::MissingHyphen("labeledinput".into()))
        );
        assert_eq!(
            validate_tag_name("Labeled-input"),
            Err(TagNameError::MustStartWithLowercaseLetter("Labeled-input".into()))
        );
        assert_eq!(
            validate_tag_name("-input"),
            Err(TagNameError::MustStartWithLowercaseLetter("-input".into()))
        );
        assert_eq!(
            validate_tag_name("labeled input"),
            Err(TagNameError::InvalidCharacter("labeled input".into(), ' '))
        );
        assert_eq!(
            validate_tag_name(""),
            Err(TagNameError::MustStartWithLowercaseLetter(String::new()))
        );
    }

    #[test]
    fn rejects_reserved_names() {
        assert_eq!(
            validate_tag_name("font-face"),
            Err(TagNameError::Reserved("font-face".into()))
        );
    }
}
