#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

//! Browser tests for the registered custom element.

use labeled_input_web::{DEFAULT_TAG_NAME, define_labeled_input, observed_attributes};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn create(tag: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    document
        .create_element(tag)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn style_var(el: &HtmlElement, name: &str) -> String {
    el.style().get_property_value(name).unwrap()
}

#[wasm_bindgen_test]
fn second_definition_reports_false() {
    let _ = define_labeled_input(None);
    assert_eq!(define_labeled_input(None), Ok(false));
}

#[wasm_bindgen_test]
fn invalid_tag_name_is_rejected() {
    assert!(define_labeled_input(Some("nohyphen".into())).is_err());
}

#[wasm_bindgen_test]
fn observed_attribute_list_has_ten_entries() {
    assert_eq!(observed_attributes().length(), 10);
}

#[wasm_bindgen_test]
fn attach_renders_custom_properties() {
    let _ = define_labeled_input(None);
    let el = create(DEFAULT_TAG_NAME);
    el.set_attribute("label-font-size", "20px").unwrap();
    el.set_attribute("font-fallback", "serif").unwrap();

    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    body.append_child(&el).unwrap();

    assert_eq!(style_var(&el, "--padding-top"), "20px");
    assert_eq!(style_var(&el, "--font-family"), "serif");
    assert_eq!(style_var(&el, "--font-size"), "18px");

    el.set_attribute("font-size", "22px").unwrap();
    assert_eq!(style_var(&el, "--font-size"), "22px");

    body.remove_child(&el).unwrap();
    // Detached: changes are stored, not rendered.
    el.set_attribute("font-size", "30px").unwrap();
    assert_eq!(style_var(&el, "--font-size"), "22px");
}

#[wasm_bindgen_test]
fn closed_shadow_root_is_not_exposed() {
    let _ = define_labeled_input(None);
    let el = create(DEFAULT_TAG_NAME);
    assert!(el.shadow_root().is_none());
}
