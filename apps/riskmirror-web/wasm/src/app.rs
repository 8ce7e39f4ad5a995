//! JS-facing page controller

use crate::dom::{
    self, to_js, BrowserAnalysisView, BrowserNotifier, ButtonControl, ElementPanel,
};
use crate::fetch::FetchTransport;
use js_sys::{Promise, Reflect};
use riskmirror_core::{
    ControllerConfig, Domain, PanelSet, RiskMirrorController, RiskMirrorError,
};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::Event;

type BrowserController =
    RiskMirrorController<ElementPanel, BrowserAnalysisView, FetchTransport, BrowserNotifier>;

/// Risk Mirror page controller.
///
/// Resolves the panel, analysis and download elements once at construction
/// and keeps them for the lifetime of the page.
#[wasm_bindgen]
#[derive(Clone)]
pub struct RiskMirrorApp {
    controller: Rc<BrowserController>,
}

impl RiskMirrorApp {
    fn build(config: ControllerConfig) -> Result<Self, RiskMirrorError> {
        let document = dom::document()?;
        let panels = PanelSet::try_from_fn(|panel| {
            dom::require_element(&document, panel.element_id()).map(ElementPanel::new)
        })?;
        let analysis = BrowserAnalysisView::from_document(&document)?;

        let controller = RiskMirrorController::new(
            panels,
            analysis,
            FetchTransport::new(),
            BrowserNotifier,
            config,
        );
        controller.view().sync()?;

        Ok(Self {
            controller: Rc::new(controller),
        })
    }
}

#[wasm_bindgen]
impl RiskMirrorApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<RiskMirrorApp, JsValue> {
        Self::build(ControllerConfig::default()).map_err(to_js)
    }

    /// Construct with a partial JSON override of the default settings
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<RiskMirrorApp, JsValue> {
        let config = ControllerConfig::from_json(config_json).map_err(to_js)?;
        Self::build(config).map_err(to_js)
    }

    #[wasm_bindgen(js_name = showForm)]
    pub fn show_form(&self, domain: &str) -> Result<(), JsValue> {
        let domain: Domain = domain.parse().map_err(to_js)?;
        self.controller.show_form(domain).map_err(to_js)
    }

    #[wasm_bindgen(js_name = backToMenu)]
    pub fn back_to_menu(&self) -> Result<(), JsValue> {
        self.controller.back_to_menu().map_err(to_js)
    }

    /// Element id of the visible panel
    #[wasm_bindgen(js_name = activePanel)]
    pub fn active_panel(&self) -> String {
        self.controller.active_panel().element_id().to_string()
    }

    /// Handle a domain form's submit event.
    ///
    /// Resolves with `"success"`, `"application_error"` or
    /// `"transport_error"`; user-facing notifications are already shown.
    #[wasm_bindgen(js_name = submitForm)]
    pub fn submit_form(&self, event: &Event, domain: &str) -> Result<Promise, JsValue> {
        event.prevent_default();

        let domain: Domain = domain.parse().map_err(to_js)?;
        let document = dom::document().map_err(to_js)?;
        let form = dom::require_element(&document, domain.form_element_id()).map_err(to_js)?;
        let fields = dom::collect_form_fields(&form).map_err(to_js)?;
        let button = ButtonControl::find_in(&form).map_err(to_js)?;

        let controller = Rc::clone(&self.controller);
        Ok(future_to_promise(async move {
            let outcome = controller.submit(domain, fields, &button).await;
            Ok(JsValue::from_str(outcome.kind()))
        }))
    }

    /// Most recent successful analysis as a plain object, or `null`
    #[wasm_bindgen(js_name = lastReport)]
    pub fn last_report(&self) -> Result<JsValue, JsValue> {
        match self.controller.last_report() {
            Some(report) => serde_wasm_bindgen::to_value(&report)
                .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e))),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = lastRiskScore)]
    pub fn last_risk_score(&self) -> Option<f64> {
        self.controller.last_report().and_then(|r| r.risk_score)
    }

    #[wasm_bindgen(js_name = lastPdfLink)]
    pub fn last_pdf_link(&self) -> Option<String> {
        self.controller.last_report().map(|r| r.pdf_link)
    }

    /// Active settings as JSON
    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.controller.config())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Expose `showForm`, `backToMenu` and `submitForm` on `window` for the
    /// page's inline `onclick` / `onsubmit` handlers
    #[wasm_bindgen(js_name = installGlobals)]
    pub fn install_globals(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("No window")?;

        let app = self.clone();
        let show_form = Closure::<dyn Fn(String)>::new(move |domain: String| {
            if let Err(e) = app.show_form(&domain) {
                web_sys::console::error_1(&e);
            }
        });
        Reflect::set(&window, &"showForm".into(), show_form.as_ref())?;
        show_form.forget();

        let app = self.clone();
        let back_to_menu = Closure::<dyn Fn()>::new(move || {
            if let Err(e) = app.back_to_menu() {
                web_sys::console::error_1(&e);
            }
        });
        Reflect::set(&window, &"backToMenu".into(), back_to_menu.as_ref())?;
        back_to_menu.forget();

        let app = self.clone();
        let submit_form =
            Closure::<dyn Fn(Event, String) -> JsValue>::new(move |event: Event, domain: String| {
                match app.submit_form(&event, &domain) {
                    Ok(promise) => promise.into(),
                    Err(e) => {
                        web_sys::console::error_1(&e);
                        JsValue::UNDEFINED
                    }
                }
            });
        Reflect::set(&window, &"submitForm".into(), submit_form.as_ref())?;
        submit_form.forget();

        Ok(())
    }
}
