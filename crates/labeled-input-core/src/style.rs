#![forbid(unsafe_code)]

//! Derivation of the scoped CSS custom properties from a [`WidgetConfig`].
//!
//! Rendering is a pure function of the configuration: the same config always
//! yields the same [`StyleVars`], so re-applying them is idempotent.

use std::fmt;

use crate::config::WidgetConfig;

/// A custom property consumed by the widget stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleVar {
    FontFamily,
    FontWeight,
    FontSize,
    LabelFontSize,
    PaddingTop,
    BackgroundColor,
    LabelColor,
    InputColor,
    UnderlineColor,
}

impl StyleVar {
    /// Every property, in the order they are applied.
    pub const ALL: [Self; 9] = [
        Self::FontFamily,
        Self::FontWeight,
        Self::FontSize,
        Self::LabelFontSize,
        Self::PaddingTop,
        Self::BackgroundColor,
        Self::LabelColor,
        Self::InputColor,
        Self::UnderlineColor,
    ];

    /// Property name including the leading `--`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FontFamily => "--font-family",
            Self::FontWeight => "--font-weight",
            Self::FontSize => "--font-size",
            Self::LabelFontSize => "--label-font-size",
            Self::PaddingTop => "--padding-top",
            Self::BackgroundColor => "--background-color",
            Self::LabelColor => "--label-color",
            Self::InputColor => "--input-color",
            Self::UnderlineColor => "--underline-color",
        }
    }

    fn value_for(self, config: &WidgetConfig) -> String {
        match self {
            Self::FontFamily => config.font_family(),
            Self::FontWeight => config.font_weight().to_string(),
            Self::FontSize => config.font_size().to_string(),
            Self::LabelFontSize => config.label_font_size().to_string(),
            Self::PaddingTop => config.padding_top(),
            Self::BackgroundColor => config.background_color().to_string(),
            Self::LabelColor => config.label_color().to_string(),
            Self::InputColor => config.input_color().to_string(),
            Self::UnderlineColor => config.underline_color().to_string(),
        }
    }
}

impl fmt::Display for StyleVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The full set of rendered properties plus the label text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleVars {
    values: Vec<(StyleVar, String)>,
    label_text: String,
}

impl StyleVars {
    /// Compute every derived property from `config`.
    #[must_use]
    pub fn derive(config: &WidgetConfig) -> Self {
        let values = StyleVar::ALL
            .into_iter()
            .map(|var| (var, var.value_for(config)))
            .collect();
        Self {
            values,
            label_text: config.label().to_owned(),
        }
    }

    /// Value of a single property.
    #[must_use]
    pub fn get(&self, var: StyleVar) -> Option<&str> {
        self.values
            .iter()
            .find(|(v, _)| *v == var)
            .map(|(_, value)| value.as_str())
    }

    /// `(name, value)` pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(var, value)| (var.name(), value.as_str()))
    }

    /// Text content of the label element.
    #[must_use]
    pub fn label_text(&self) -> &str {
        &self.label_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_renders_documented_values() {
        let vars = StyleVars::derive(&WidgetConfig::default());
        let rendered: Vec<_> = vars.iter().collect();
        assert_eq!(
            rendered,
            vec![
                ("--font-family", "sans-serif"),
                ("--font-weight", "400"),
                ("--font-size", "18px"),
                ("--label-font-size", "16px"),
                ("--padding-top", "16px"),
                ("--background-color", "#FFFFFF"),
                ("--label-color", "rgba(0, 0, 0, 0.5)"),
                ("--input-color", "#000000"),
                ("--underline-color", "rgba(0, 0, 0, 0.75)"),
            ]
        );
        assert_eq!(vars.label_text(), "Label");
    }

    #[test]
    fn google_font_is_quoted_with_fallback() {
        let mut config = WidgetConfig::default();
        config.apply(Attribute::FontGoogle, Some("Roboto")).unwrap();
        let vars = StyleVars::derive(&config);
        assert_eq!(vars.get(StyleVar::FontFamily), Some("'Roboto', sans-serif"));
    }

    #[test]
    fn label_font_size_drives_padding() {
        let mut config = WidgetConfig::default();
        config.apply(Attribute::LabelFontSize, Some("20px")).unwrap();
        let vars = StyleVars::derive(&config);
        assert_eq!(vars.get(StyleVar::LabelFontSize), Some("20px"));
        assert_eq!(vars.get(StyleVar::PaddingTop), Some("20px"));
    }

    #[test]
    fn derive_is_deterministic() {
        let mut config = WidgetConfig::default();
        config.apply(Attribute::Label, Some("Email")).unwrap();
        assert_eq!(StyleVars::derive(&config), StyleVars::derive(&config));
    }
}
