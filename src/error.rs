//! Error types for the greeting core and its browser bindings.

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors raised while wiring the greeting to the page or loading its config.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GreetingError {
    /// An element the page is expected to provide could not be found.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// JavaScript interop error.
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// Rejected or unparsable configuration.
    #[error("invalid config: {0}")]
    Config(String),
}

impl From<JsValue> for GreetingError {
    fn from(js_val: JsValue) -> Self {
        let message = js_val
            .as_string()
            .unwrap_or_else(|| format!("{js_val:?}"));
        GreetingError::JavaScript(message)
    }
}

impl From<GreetingError> for JsValue {
    fn from(err: GreetingError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Error> for GreetingError {
    fn from(err: serde_json::Error) -> Self {
        GreetingError::Config(err.to_string())
    }
}

/// Result type for greeting operations.
pub type GreetingResult<T> = Result<T, GreetingError>;

/// Why the audio host refused to start playback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The host rejected `play()`, usually an autoplay policy.
    #[error("playback rejected: {0}")]
    Rejected(String),

    /// The audio element has no source to play.
    #[error("audio unavailable")]
    Unavailable,
}
