#![forbid(unsafe_code)]

//! [`FontProvider`] that forwards requests to the global `WebFont` loader.
//!
//! If `WebFont` is not defined yet, the loader script is injected once into
//! `<head>`. Requests made before it arrives wait in one shared queue that
//! is replayed by a single `load` listener. If the script fails to load the
//! queue is dropped and later requests are discarded; the configured
//! fallback font stays in effect.
//!
//! A replayed request whose element has been removed from the page in the
//! meantime is held back on that element's loader and issued when it is
//! connected again, so a detached widget never makes the loader touch the
//! document.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Function, JSON, Reflect};
use labeled_input_core::font::{FontProvider, FontRequest, WEBFONT_LOADER_URL};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlScriptElement;

/// Progress of the injected loader script, shared by every element.
enum LoaderScript {
    /// Not injected.
    Absent,
    /// Injected; requests wait for its `load` event.
    Pending(Vec<(WebFontLoader, JsValue)>),
    /// The script ran.
    Loaded,
    /// The script failed to load; requests are discarded.
    Failed,
}

thread_local! {
    static LOADER_SCRIPT: RefCell<LoaderScript> = const { RefCell::new(LoaderScript::Absent) };
}

/// Per-element font provider.
///
/// Clones share state, so the element binding keeps one to report attach
/// and detach while the widget owns another.
#[derive(Debug, Clone, Default)]
pub(crate) struct WebFontLoader {
    attached: Rc<Cell<bool>>,
    held: Rc<RefCell<Vec<JsValue>>>,
}

impl WebFontLoader {
    /// Record whether the element is on the page. Attaching issues any
    /// request held back while detached.
    pub(crate) fn set_attached(&self, attached: bool) {
        self.attached.set(attached);
        if !attached {
            return;
        }
        let held = std::mem::take(&mut *self.held.borrow_mut());
        if held.is_empty() {
            return;
        }
        let Some(webfont) = webfont_global() else {
            debug!(count = held.len(), "WebFont missing; dropping held requests");
            return;
        };
        for config in &held {
            call_load(&webfont, config);
        }
    }

    /// Issue `config` now, or hold it until the element is attached again.
    fn replay(&self, webfont: &JsValue, config: JsValue) {
        if self.attached.get() {
            call_load(webfont, &config);
        } else {
            debug!("element detached; holding font request");
            self.held.borrow_mut().push(config);
        }
    }

    #[cfg(test)]
    fn held_count(&self) -> usize {
        self.held.borrow().len()
    }
}

impl FontProvider for WebFontLoader {
    fn load(&mut self, request: FontRequest) {
        let config = match JSON::parse(&request.to_loader_json()) {
            Ok(config) => config,
            Err(err) => {
                debug!(?err, "font request not representable as JSON");
                return;
            }
        };
        match webfont_global() {
            Some(webfont) => call_load(&webfont, &config),
            None => {
                if let Err(err) = enqueue(self.clone(), config) {
                    debug!(?err, "could not inject web font loader");
                }
            }
        }
    }
}

fn webfont_global() -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &"WebFont".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn call_load(webfont: &JsValue, config: &JsValue) {
    let Ok(load) = Reflect::get(webfont, &"load".into()) else {
        return;
    };
    let Ok(load) = load.dyn_into::<Function>() else {
        return;
    };
    if let Err(err) = load.call1(webfont, config) {
        debug!(?err, "WebFont.load threw");
    }
}

/// Queue a request behind the loader script, injecting it on first use.
fn enqueue(loader: WebFontLoader, config: JsValue) -> Result<(), JsValue> {
    let inject = LOADER_SCRIPT.with(|slot| {
        let mut slot = slot.borrow_mut();
        match &mut *slot {
            LoaderScript::Pending(queue) => {
                queue.push((loader, config));
                false
            }
            LoaderScript::Failed => {
                debug!("web font loader unavailable; request dropped");
                false
            }
            LoaderScript::Loaded => {
                debug!("web font loader ran without defining WebFont; request dropped");
                false
            }
            absent @ LoaderScript::Absent => {
                *absent = LoaderScript::Pending(vec![(loader, config)]);
                true
            }
        }
    });
    if !inject {
        return Ok(());
    }
    inject_script().inspect_err(|_| {
        LOADER_SCRIPT.with(|slot| *slot.borrow_mut() = LoaderScript::Failed);
    })
}

fn inject_script() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let script = document
        .create_element("script")?
        .dyn_into::<HtmlScriptElement>()?;
    script.set_src(WEBFONT_LOADER_URL);
    script.set_async(true);

    // Exactly one of these fires; the other is reclaimed with the script.
    let on_load = Closure::once_into_js(|| script_loaded());
    let on_error = Closure::once_into_js(|| script_failed());
    script.add_event_listener_with_callback("load", on_load.unchecked_ref())?;
    script.add_event_listener_with_callback("error", on_error.unchecked_ref())?;

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("no <head>"))?;
    head.append_child(&script)?;
    debug!(src = WEBFONT_LOADER_URL, "injected web font loader");
    Ok(())
}

fn take_queue(next: LoaderScript) -> Vec<(WebFontLoader, JsValue)> {
    LOADER_SCRIPT.with(|slot| {
        match std::mem::replace(&mut *slot.borrow_mut(), next) {
            LoaderScript::Pending(queue) => queue,
            _ => Vec::new(),
        }
    })
}

fn script_loaded() {
    let queue = take_queue(LoaderScript::Loaded);
    let Some(webfont) = webfont_global() else {
        debug!(dropped = queue.len(), "loader script did not define WebFont");
        return;
    };
    for (loader, config) in queue {
        loader.replay(&webfont, config);
    }
}

fn script_failed() {
    let queue = take_queue(LoaderScript::Failed);
    debug!(dropped = queue.len(), "web font loader failed to load");
}
