#![forbid(unsafe_code)]

//! `wasm-bindgen` exports: element registration and the per-instance object
//! the JS shell forwards lifecycle callbacks to.
//!
//! Only compiled on `wasm32` targets.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Array, Object, Reflect};
use labeled_input_core::{Attribute, FloatingLabelInput};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlElement, HtmlInputElement, ShadowRoot};

use crate::dom::{DomHost, dispatch_submit};
use crate::element_name::{DEFAULT_TAG_NAME, validate_tag_name};
use crate::webfont::WebFontLoader;

type Widget = FloatingLabelInput<DomHost, WebFontLoader>;

#[wasm_bindgen(module = "/js/element.js")]
extern "C" {
    #[wasm_bindgen(js_name = defineElement, catch)]
    fn define_element(tag_name: &str, observed: &Array, factory: &JsValue) -> Result<bool, JsValue>;
}

fn console_error(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(error) = Reflect::get(&console, &"error".into()) else {
        return;
    };
    let Ok(error_fn) = error.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = error_fn.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            console_error(&panic_message(info.location(), info));
        }));
    });
}

fn panic_message(
    location: Option<&std::panic::Location<'_>>,
    info: impl std::fmt::Display,
) -> String {
    match location {
        Some(loc) => format!("labeled-input: panicked at {loc}: {info}"),
        None => format!("labeled-input: panicked: {info}"),
    }
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    install_panic_hook();
}

/// Register the custom element under `tag_name` (default `labeled-input`).
///
/// Returns `false` when the tag is already defined.
#[wasm_bindgen(js_name = defineLabeledInput)]
pub fn define_labeled_input(tag_name: Option<String>) -> Result<bool, JsValue> {
    install_panic_hook();
    let tag_name = tag_name.as_deref().unwrap_or(DEFAULT_TAG_NAME);
    validate_tag_name(tag_name).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let factory = Closure::<dyn FnMut(HtmlElement, ShadowRoot) -> JsValue>::new(
        |host: HtmlElement, root: ShadowRoot| match LabeledInputElement::attach(host, &root) {
            Ok(element) => element.into(),
            Err(err) => {
                console_error(&format!("labeled-input: {err:?}"));
                JsValue::UNDEFINED
            }
        },
    );
    let defined = define_element(tag_name, &observed_attributes(), factory.as_ref())?;
    // The element class outlives this call; so does its factory.
    factory.forget();
    debug!(tag_name, defined, "custom element registration");
    Ok(defined)
}

/// Names of the attributes the element observes.
#[wasm_bindgen(js_name = observedAttributes)]
pub fn observed_attributes() -> Array {
    Attribute::observed_names()
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

/// A DOM event listener owned by Rust.
///
/// Listeners live as long as the element. Disconnect only detaches them, so
/// a callback that synchronously removes or moves the element never drops
/// the closure it is running in.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new(target: &EventTarget, kind: &'static str, callback: Closure<dyn FnMut(Event)>) -> Self {
        Self {
            target: target.clone(),
            kind,
            callback,
        }
    }

    fn add(&self) -> Result<(), JsValue> {
        self.target
            .add_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
    }

    fn remove(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Handlers for the native input's `input`, `focus`, and `blur` events.
fn input_listeners(widget: &Rc<RefCell<Widget>>, input: &HtmlInputElement) -> Vec<Listener> {
    let on_input = {
        let widget = Rc::clone(widget);
        let target = input.clone();
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            let value = target.value();
            // Release the borrow before dispatch: host listeners may set
            // attributes synchronously.
            let event = match widget.try_borrow_mut() {
                Ok(mut w) => w.on_input(&value),
                Err(_) => {
                    warn!("input event while widget busy");
                    None
                }
            };
            if let Some(event) = event
                && let Err(err) = dispatch_submit(&target, &event)
            {
                warn!(?err, "submit dispatch failed");
            }
        })
    };

    let on_focus = {
        let widget = Rc::clone(widget);
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            if let Ok(mut w) = widget.try_borrow_mut() {
                w.on_focus();
            }
        })
    };

    let on_blur = {
        let widget = Rc::clone(widget);
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            if let Ok(mut w) = widget.try_borrow_mut() {
                w.on_blur();
            }
        })
    };

    vec![
        Listener::new(input, "input", on_input),
        Listener::new(input, "focus", on_focus),
        Listener::new(input, "blur", on_blur),
    ]
}

/// One `<labeled-input>` instance, driven by the JS element shell.
#[wasm_bindgen]
pub struct LabeledInputElement {
    widget: Rc<RefCell<Widget>>,
    fonts: WebFontLoader,
    input: HtmlInputElement,
    listeners: Vec<Listener>,
    bound: Cell<bool>,
}

impl LabeledInputElement {
    fn attach(host: HtmlElement, root: &ShadowRoot) -> Result<Self, JsValue> {
        let (dom, input) = DomHost::attach(host, root)?;
        let fonts = WebFontLoader::default();
        let widget = Rc::new(RefCell::new(FloatingLabelInput::new(dom, fonts.clone())));
        let listeners = input_listeners(&widget, &input);
        Ok(Self {
            widget,
            fonts,
            input,
            listeners,
            bound: Cell::new(false),
        })
    }

    fn bind_listeners(&self) -> Result<(), JsValue> {
        if self.bound.get() {
            return Ok(());
        }
        for listener in &self.listeners {
            listener.add()?;
        }
        self.bound.set(true);
        Ok(())
    }

    fn unbind_listeners(&self) {
        if self.bound.replace(false) {
            for listener in &self.listeners {
                listener.remove();
            }
        }
    }

    fn with_widget<R>(&self, f: impl FnOnce(&mut Widget) -> R) -> Option<R> {
        match self.widget.try_borrow_mut() {
            Ok(mut w) => Some(f(&mut w)),
            Err(_) => {
                warn!("re-entrant lifecycle callback ignored");
                None
            }
        }
    }
}

#[wasm_bindgen]
impl LabeledInputElement {
    /// `connectedCallback`: bind input handlers, load the font, render.
    pub fn connected(&self) {
        if let Err(err) = self.bind_listeners() {
            console_error(&format!("labeled-input: failed to bind listeners: {err:?}"));
        }
        self.fonts.set_attached(true);
        self.with_widget(|w| w.connect());
    }

    /// `disconnectedCallback`: unbind handlers; later callbacks are no-ops.
    pub fn disconnected(&self) {
        self.unbind_listeners();
        self.fonts.set_attached(false);
        self.with_widget(|w| w.disconnect());
    }

    /// `attributeChangedCallback`.
    #[wasm_bindgen(js_name = attributeChanged)]
    pub fn attribute_changed(&self, name: &str, old: Option<String>, new: Option<String>) {
        // Rejections are already logged by the widget.
        let _ = self.with_widget(|w| w.attribute_changed(name, old.as_deref(), new.as_deref()));
    }

    /// Apply a JSON object of attribute values and render once.
    ///
    /// Returns `{ changed: string[], errors: string[], rendered: bool }`.
    pub fn configure(&self, json: &str) -> Result<JsValue, JsValue> {
        let report = self
            .with_widget(|w| w.configure(json))
            .ok_or_else(|| JsValue::from_str("widget busy"))?
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let changed: Array = report
            .changed
            .iter()
            .map(|a| JsValue::from_str(a.name()))
            .collect();
        let errors: Array = report
            .errors
            .iter()
            .map(|e| JsValue::from_str(&e.to_string()))
            .collect();
        let obj = Object::new();
        let _ = Reflect::set(&obj, &"changed".into(), &changed.into());
        let _ = Reflect::set(&obj, &"errors".into(), &errors.into());
        let _ = Reflect::set(&obj, &"rendered".into(), &report.rendered.into());
        Ok(obj.into())
    }

    /// Current text of the input.
    pub fn value(&self) -> String {
        self.input.value()
    }

    #[wasm_bindgen(js_name = hasValue)]
    pub fn has_value(&self) -> bool {
        self.with_widget(|w| w.has_value()).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = isFocused)]
    pub fn is_focused(&self) -> bool {
        self.with_widget(|w| w.is_focused()).unwrap_or(false)
    }

    /// Effective configuration as a JSON string.
    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Option<String> {
        self.with_widget(|w| w.config().to_json())
    }
}
