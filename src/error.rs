//! Error types for vocabulary loading and engine configuration.
//!
//! Only failures the caller has to act on live here. Conditions the engine
//! recovers from on its own (unsupported language, missing translation, too
//! few distractors) are reported as [`crate::Notice`]s instead.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("vocabulary fetch failed: {0}")]
    Fetch(String),
    #[error("vocabulary fetch returned HTTP {status}")]
    HttpStatus { status: u16 },
    #[error("vocabulary is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("vocabulary must be a JSON array of entries")]
    NotAList,
    #[error("vocabulary entry #{index} is malformed: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate vocabulary id '{0}'")]
    DuplicateId(String),
    #[error("vocabulary mixes translation-map entries with legacy pre-baked entries")]
    MixedSchema,
    #[error("vocabulary is empty")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    Validation(String),
}

impl From<LoadError> for JsValue {
    fn from(err: LoadError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
