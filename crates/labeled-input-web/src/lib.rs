#![forbid(unsafe_code)]

//! WASM frontend for the `<labeled-input>` custom element.
//!
//! This crate binds [`labeled_input_core::FloatingLabelInput`] to the DOM:
//! a small JS shell (`js/element.js`) declares the `HTMLElement` subclass
//! and forwards its lifecycle callbacks to [`LabeledInputElement`], which
//! owns the widget, the closed shadow root, and the input listeners.
//!
//! ```js
//! import init, { defineLabeledInput } from './labeled_input_web.js';
//! await init();
//! defineLabeledInput();
//! document.querySelector('labeled-input')
//!   .addEventListener('submit', (e) => console.log(e.detail.value));
//! ```

pub mod element_name;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
mod webfont;

#[cfg(target_arch = "wasm32")]
pub use wasm::{LabeledInputElement, define_labeled_input, observed_attributes};

pub use element_name::{DEFAULT_TAG_NAME, TagNameError, validate_tag_name};
