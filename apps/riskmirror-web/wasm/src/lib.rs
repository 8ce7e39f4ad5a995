//! Risk Mirror - browser controller for the finance/health analyzer page
//!
//! State and decisions live in `riskmirror-core`; this crate binds them to
//! the DOM, `fetch` and `alert`.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { RiskMirrorApp } from './pkg/riskmirror_wasm.js';
//!
//! await init();                     // card animation starts here
//!
//! const app = new RiskMirrorApp();
//! app.installGlobals();             // onclick="showForm('finance')" etc.
//!
//! // or wire handlers directly
//! form.addEventListener('submit', (e) => app.submitForm(e, 'health'));
//! ```

pub mod animator;
pub mod app;
pub mod dom;
pub mod fetch;

use riskmirror_core::ControllerConfig;
use wasm_bindgen::prelude::*;

pub use app::RiskMirrorApp;
pub use fetch::FetchTransport;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Risk Mirror WASM initialized".into());

    let config = ControllerConfig::default();
    animator::animate_when_ready(&config.card_selector, &config.stagger)
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Replay the card entrance animation, e.g. after the cards were re-rendered
#[wasm_bindgen(js_name = animateCards)]
pub fn animate_cards(config_json: Option<String>) -> Result<u32, JsValue> {
    let config = match config_json {
        Some(json) => ControllerConfig::from_json(&json).map_err(dom::to_js)?,
        None => ControllerConfig::default(),
    };
    let document = dom::document().map_err(dom::to_js)?;
    animator::animate_cards(&document, &config.card_selector, &config.stagger)
}
