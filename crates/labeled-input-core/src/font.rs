#![forbid(unsafe_code)]

//! Remote web-font loading behind an injectable capability.
//!
//! The widget never waits on a font: [`FontProvider::load`] is
//! fire-and-forget and its outcome is never observed. The configured
//! fallback family is always part of `--font-family`, so a failed load
//! degrades to the local font.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

/// Script that defines the global `WebFont` loader.
pub const WEBFONT_LOADER_URL: &str =
    "https://ajax.googleapis.com/ajax/libs/webfont/1.6.26/webfont.js";

/// A request for one or more hosted font families (`"<family>:<weight>"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FontRequest {
    pub families: Vec<String>,
}

#[derive(Serialize)]
struct LoaderConfig<'a> {
    google: &'a FontRequest,
}

impl FontRequest {
    /// Request a single family spec such as `Roboto:400`.
    #[must_use]
    pub fn google(spec: impl Into<String>) -> Self {
        Self {
            families: vec![spec.into()],
        }
    }

    /// Loader configuration object: `{"google":{"families":[...]}}`.
    #[must_use]
    pub fn to_loader_json(&self) -> String {
        serde_json::to_string(&LoaderConfig { google: self }).unwrap_or_default()
    }
}

/// Capability to load hosted fonts.
pub trait FontProvider {
    /// Issue a request. Must not block and must not report failure.
    fn load(&mut self, request: FontRequest);
}

impl<P: FontProvider + ?Sized> FontProvider for Box<P> {
    fn load(&mut self, request: FontRequest) {
        (**self).load(request);
    }
}

/// Discards every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFontProvider;

impl FontProvider for NoopFontProvider {
    fn load(&mut self, _request: FontRequest) {}
}

/// Records requests for later inspection. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingFontProvider {
    requests: Rc<RefCell<Vec<FontRequest>>>,
}

impl RecordingFontProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request issued so far.
    #[must_use]
    pub fn requests(&self) -> Vec<FontRequest> {
        self.requests.borrow().clone()
    }

    /// Flattened list of requested family specs.
    #[must_use]
    pub fn families(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .flat_map(|r| r.families.iter().cloned())
            .collect()
    }
}

impl FontProvider for RecordingFontProvider {
    fn load(&mut self, request: FontRequest) {
        self.requests.borrow_mut().push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_json_wraps_families_under_google() {
        let request = FontRequest::google("Roboto:400");
        assert_eq!(
            request.to_loader_json(),
            r#"{"google":{"families":["Roboto:400"]}}"#
        );
    }

    #[test]
    fn recording_provider_clones_share_log() {
        let recorder = RecordingFontProvider::new();
        let mut boxed: Box<dyn FontProvider> = Box::new(recorder.clone());
        boxed.load(FontRequest::google("Lato:300"));
        assert_eq!(recorder.families(), vec!["Lato:300".to_string()]);
        assert_eq!(recorder.requests().len(), 1);
    }
}
