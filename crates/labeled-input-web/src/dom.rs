#![forbid(unsafe_code)]

//! [`Host`] implementation backed by a closed shadow root.

use labeled_input_core::event::SubmitEvent;
use labeled_input_core::template::{self, INPUT_ID, LABEL_ID, WRAPPER_ID};
use labeled_input_core::{Host, SUBMIT_EVENT};
use js_sys::{Object, Reflect};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CustomEvent, CustomEventInit, Element, EventTarget, HtmlElement, HtmlInputElement, ShadowRoot,
};

/// The element tree of one widget: host element plus shadow internals.
pub(crate) struct DomHost {
    host: HtmlElement,
    wrapper: Element,
    label: Element,
}

impl DomHost {
    /// Stamp the template into `root` and look up the internal elements.
    pub(crate) fn attach(
        host: HtmlElement,
        root: &ShadowRoot,
    ) -> Result<(Self, HtmlInputElement), JsValue> {
        root.set_inner_html(&template::shadow_html());
        let wrapper = find(root, WRAPPER_ID)?;
        let label = find(root, LABEL_ID)?;
        let input = find(root, INPUT_ID)?.dyn_into::<HtmlInputElement>()?;
        Ok((
            Self {
                host,
                wrapper,
                label,
            },
            input,
        ))
    }
}

fn find(root: &ShadowRoot, id: &str) -> Result<Element, JsValue> {
    root.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("template element #{id} missing")))
}

impl Host for DomHost {
    fn set_style_property(&mut self, name: &str, value: &str) {
        if let Err(err) = self.host.style().set_property(name, value) {
            warn!(property = name, ?err, "set_property failed");
        }
    }

    fn set_label_text(&mut self, text: &str) {
        self.label.set_text_content(Some(text));
    }

    fn set_wrapper_class(&mut self, class: &str, present: bool) {
        if let Err(err) = self.wrapper.class_list().toggle_with_force(class, present) {
            warn!(class, ?err, "class toggle failed");
        }
    }
}

/// Dispatch `submit` on `target` with `detail = { value }`.
///
/// Composed so listeners on the host element observe it.
pub(crate) fn dispatch_submit(target: &EventTarget, event: &SubmitEvent) -> Result<bool, JsValue> {
    let detail = Object::new();
    Reflect::set(&detail, &"value".into(), &JsValue::from_str(&event.value))?;

    let init = CustomEventInit::new();
    init.set_detail(&detail);
    init.set_composed(SubmitEvent::COMPOSED);
    init.set_bubbles(SubmitEvent::BUBBLES);

    let custom = CustomEvent::new_with_event_init_dict(SUBMIT_EVENT, &init)?;
    target.dispatch_event(&custom)
}
