#![forbid(unsafe_code)]

//! The observed attribute surface of `<labeled-input>`.
//!
//! Attribute names are kebab-case and case-sensitive. [`Attribute::ALL`] is
//! the list handed to the browser as `observedAttributes`; its order is the
//! declaration order of the element (fonts, texts, colors).

use std::fmt;
use std::str::FromStr;

use crate::error::WidgetError;

/// One of the ten host-settable attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    FontGoogle,
    FontFallback,
    FontWeight,
    FontSize,
    LabelFontSize,
    Label,
    BackgroundColor,
    InputColor,
    UnderlineColor,
    LabelColor,
}

impl Attribute {
    /// Every observed attribute, in declaration order.
    pub const ALL: [Self; 10] = [
        // Fonts
        Self::FontGoogle,
        Self::FontFallback,
        Self::FontWeight,
        Self::FontSize,
        Self::LabelFontSize,
        // Texts
        Self::Label,
        // Colors
        Self::BackgroundColor,
        Self::InputColor,
        Self::UnderlineColor,
        Self::LabelColor,
    ];

    /// The kebab-case attribute name as it appears in markup.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FontGoogle => "font-google",
            Self::FontFallback => "font-fallback",
            Self::FontWeight => "font-weight",
            Self::FontSize => "font-size",
            Self::LabelFontSize => "label-font-size",
            Self::Label => "label",
            Self::BackgroundColor => "background-color",
            Self::InputColor => "input-color",
            Self::UnderlineColor => "underline-color",
            Self::LabelColor => "label-color",
        }
    }

    /// Look up an attribute by its exact markup name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.name() == name)
    }

    /// Whether a change to this attribute alters the remote font request.
    #[must_use]
    pub const fn affects_font_request(self) -> bool {
        matches!(self, Self::FontGoogle | Self::FontWeight)
    }

    /// Names of all observed attributes, in declaration order.
    #[must_use]
    pub fn observed_names() -> [&'static str; 10] {
        Self::ALL.map(Self::name)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| WidgetError::UnknownAttribute(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_parse() {
        for attr in Attribute::ALL {
            assert_eq!(Attribute::parse(attr.name()), Some(attr));
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(Attribute::parse("Label"), None);
        assert_eq!(Attribute::parse("FONT-SIZE"), None);
        assert_eq!(Attribute::parse("fontSize"), None);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "placeholder".parse::<Attribute>().unwrap_err();
        assert_eq!(err, WidgetError::UnknownAttribute("placeholder".into()));
    }

    #[test]
    fn observed_names_keep_declaration_order() {
        assert_eq!(
            Attribute::observed_names(),
            [
                "font-google",
                "font-fallback",
                "font-weight",
                "font-size",
                "label-font-size",
                "label",
                "background-color",
                "input-color",
                "underline-color",
                "label-color",
            ]
        );
    }

    #[test]
    fn only_font_family_and_weight_touch_the_font_request() {
        let affecting: Vec<_> = Attribute::ALL
            .into_iter()
            .filter(|a| a.affects_font_request())
            .collect();
        assert_eq!(affecting, vec![Attribute::FontGoogle, Attribute::FontWeight]);
    }
}
