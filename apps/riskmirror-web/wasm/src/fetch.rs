//! `window.fetch` transport for the analysis endpoint

use crate::dom::js_error_message;
use riskmirror_core::{RiskMirrorError, Transport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn transport_error(err: JsValue) -> RiskMirrorError {
    RiskMirrorError::Transport(js_error_message(&err))
}

/// POSTs JSON with `fetch` and returns the body text for any status
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, RiskMirrorError> {
        let window =
            web_sys::window().ok_or_else(|| RiskMirrorError::Transport("No window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(url, &opts).map_err(transport_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(transport_error)?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport_error)?;
        let response: Response = response.dyn_into().map_err(transport_error)?;

        if !response.ok() {
            web_sys::console::log_1(
                &format!("Analysis endpoint returned status {}", response.status()).into(),
            );
        }

        let text = JsFuture::from(response.text().map_err(transport_error)?)
            .await
            .map_err(transport_error)?;
        text.as_string()
            .ok_or_else(|| RiskMirrorError::Transport("Response body is not text".to_string()))
    }
}
