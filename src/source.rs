//! Where vocabulary text comes from.

use std::future::Future;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::LoadError;

/// Bundled starter vocabulary, shipped inside the wasm module.
pub const BUILTIN_VOCABULARY: &str = include_str!("../data/vocabulary.json");

/// An async provider of raw vocabulary JSON.
pub trait VocabularySource {
    fn fetch(&self) -> impl Future<Output = Result<String, LoadError>>;
}

/// Vocabulary already held in memory.
#[derive(Clone, Debug)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_VOCABULARY)
    }
}

impl VocabularySource for StaticSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.text.clone())
    }
}

/// Browser `fetch` of a vocabulary file (e.g. `data/vocabulary.json`). No
/// timeout and no retry: a failed request fails the load.
#[derive(Clone, Debug)]
pub struct FetchSource {
    url: String,
}

impl FetchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn js_error(err: JsValue) -> LoadError {
    LoadError::Fetch(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl VocabularySource for FetchSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        let win = web_sys::window().ok_or_else(|| LoadError::Fetch("no window".into()))?;
        let resp_value = JsFuture::from(win.fetch_with_str(&self.url))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;
        if !resp.ok() {
            return Err(LoadError::HttpStatus { status: resp.status() });
        }
        let body = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        body.as_string()
            .ok_or_else(|| LoadError::Fetch("response body is not text".into()))
    }
}
