//! Valentine greeting core crate.
//!
//! A five-screen greeting (opening, typed message, letter, surprise, final)
//! with decorative particles, a confetti burst, a cursor trail and background
//! music. The state machine and entity bookkeeping live in [`greeting`] and
//! run natively; [`dom`] binds them to the page when compiled to wasm.

use wasm_bindgen::prelude::*;

pub mod clock;
pub mod config;
pub mod dom;
pub mod entities;
pub mod error;
pub mod greeting;
pub mod logging;
pub mod navigator;
pub mod playback;
pub mod rng;
pub mod typing;

pub use config::GreetingConfig;
pub use error::{GreetingError, GreetingResult, PlaybackError};
pub use greeting::{Greeting, ViewState};
pub use navigator::{Navigator, Screen};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Wire the greeting to the current page using the built-in message and timings.
#[wasm_bindgen]
pub fn start_greeting() -> Result<(), JsValue> {
    dom::start(GreetingConfig::default())?;
    Ok(())
}

/// Like [`start_greeting`], with a JSON object overriding any config field.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_greeting_with_config(json: &str) -> Result<(), JsValue> {
    let config = GreetingConfig::from_json(json)?;
    dom::start(config)?;
    Ok(())
}

pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
