#![forbid(unsafe_code)]

//! Shadow-root markup and stylesheet.
//!
//! The stylesheet reads every configurable value from the custom properties
//! produced by [`crate::style::StyleVars`]; nothing here changes at runtime.

/// Custom element tag.
pub const TAG_NAME: &str = "labeled-input";

pub const WRAPPER_ID: &str = "labeled-input-wrapper";
pub const INPUT_ID: &str = "labeled-input";
pub const LABEL_ID: &str = "labeled-input-label";

/// Internal structure: wrapper, native input, label.
///
/// `placeholder=" "` keeps `:placeholder-shown` meaningful so the label can
/// float as soon as the field holds text.
pub const MARKUP: &str = r#"
  <div id="labeled-input-wrapper">
    <input id="labeled-input" name="email" type="text" placeholder=" " autocapitalize="none" />
    <label id="labeled-input-label" for="email"></label>
  </div>
"#;

pub const STYLESHEET: &str = r#"
  <style>
    :host {
      font-family: var(--font-family);
      font-weight: var(--font-weight);
    }
    #labeled-input-wrapper {
      position: relative;
      width: 100%;
      padding-top: var(--padding-top);
      display: flex;
      align-items: center;
      background-color: var(--background-color);
    }
    #labeled-input-wrapper::after {
      content: '';
      position: absolute;
      bottom: 0;
      width: 100%;
      background-color: var(--underline-color);
      height: 1px;
      transition: height 0.3s;
    }
    #labeled-input-wrapper.focus::after, #labeled-input-wrapper.has-value::after {
      height: 2px;
    }
    #labeled-input {
      display: block;
      width: 95%;
      border: none;
      outline: none;
      background-color: transparent;
      font-family: var(--font-family);
      font-size: var(--font-size);
      padding: 5px 10px;
      color: var(--input-color);
    }
    #labeled-input:-webkit-autofill,
    #labeled-input:-webkit-autofill:hover,
    #labeled-input:-webkit-autofill:focus,
    #labeled-input:-webkit-autofill:active {
      -webkit-text-fill-color: var(--input-color);
      -webkit-box-shadow: 0 0 0px 1000px rgba(0,0,0,0) inset;
      transition: background-color 5000s ease-in-out 0s;
    }
    #labeled-input-label {
      position: absolute;
      margin-left: 10px;
      transform-origin: center left;
      transition: all 0.3s;
      color: var(--label-color);
      font-size: var(--label-font-size);
    }
    #labeled-input:focus + #labeled-input-label,
    #labeled-input:not(:placeholder-shown) + #labeled-input-label {
      transform: translateY(-110%) scale(0.8);
    }
  </style>
"#;

/// Full shadow-root contents: markup followed by the stylesheet.
#[must_use]
pub fn shadow_html() -> String {
    let mut html = String::with_capacity(MARKUP.len() + STYLESHEET.len());
    html.push_str(MARKUP);
    html.push_str(STYLESHEET);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FOCUS_CLASS, HAS_VALUE_CLASS, LabelPose};
    use crate::style::StyleVar;

    #[test]
    fn markup_contains_every_element_id() {
        for id in [WRAPPER_ID, INPUT_ID, LABEL_ID] {
            assert!(MARKUP.contains(&format!("id=\"{id}\"")), "missing {id}");
        }
    }

    #[test]
    fn stylesheet_consumes_every_style_var() {
        for var in StyleVar::ALL {
            assert!(
                STYLESHEET.contains(&format!("var({})", var.name())),
                "stylesheet never reads {var}"
            );
        }
    }

    #[test]
    fn stylesheet_reacts_to_state_classes_and_pose() {
        assert!(STYLESHEET.contains(&format!(".{FOCUS_CLASS}::after")));
        assert!(STYLESHEET.contains(&format!(".{HAS_VALUE_CLASS}::after")));
        assert!(STYLESHEET.contains(LabelPose::Floating.transform()));
        assert!(STYLESHEET.contains(LabelPose::TRANSITION));
    }

    #[test]
    fn shadow_html_places_markup_before_styles() {
        let html = shadow_html();
        let input = html.find("<input").unwrap();
        let style = html.find("<style>").unwrap();
        assert!(input < style);
    }
}
