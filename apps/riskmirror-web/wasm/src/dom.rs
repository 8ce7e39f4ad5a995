//! `web-sys` implementations of the controller's page seams

use riskmirror_core::{AnalysisView, Notifier, PanelHandle, RiskMirrorError, SubmitControl};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Node,
};

pub const FIELD_SELECTOR: &str = "input, select, textarea";
pub const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;
pub const ANALYSIS_CONTENT_ID: &str = "analysis-content";
pub const DOWNLOAD_BUTTON_ID: &str = "download-pdf-btn";

/// Best-effort readable message for a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}

pub(crate) fn dom_error(err: JsValue) -> RiskMirrorError {
    RiskMirrorError::Dom(js_error_message(&err))
}

pub(crate) fn to_js(err: RiskMirrorError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

pub fn document() -> Result<Document, RiskMirrorError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| RiskMirrorError::Dom("No document object available".to_string()))
}

pub fn require_element(document: &Document, id: &str) -> Result<Element, RiskMirrorError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| RiskMirrorError::Dom(format!("Missing element #{}", id)))
}

/// A top-level panel element
pub struct ElementPanel(Element);

impl ElementPanel {
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &Element {
        &self.0
    }
}

impl PanelHandle for ElementPanel {
    fn add_class(&self, class: &str) -> Result<(), RiskMirrorError> {
        self.0.class_list().add_1(class).map_err(dom_error)
    }

    fn remove_class(&self, class: &str) -> Result<(), RiskMirrorError> {
        self.0.class_list().remove_1(class).map_err(dom_error)
    }
}

/// The `button[type="submit"]` of a domain form
pub struct ButtonControl(HtmlButtonElement);

impl ButtonControl {
    pub fn find_in(form: &Element) -> Result<Self, RiskMirrorError> {
        let element = form
            .query_selector(SUBMIT_BUTTON_SELECTOR)
            .map_err(dom_error)?
            .ok_or_else(|| {
                RiskMirrorError::Dom(format!("Form #{} has no submit button", form.id()))
            })?;
        element
            .dyn_into::<HtmlButtonElement>()
            .map(Self)
            .map_err(|_| RiskMirrorError::Dom("Submit control is not a <button>".to_string()))
    }
}

impl SubmitControl for ButtonControl {
    fn label(&self) -> String {
        self.0.inner_html()
    }

    fn set_label(&self, label: &str) {
        self.0.set_inner_html(label);
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.set_disabled(disabled);
    }
}

/// `#analysis-content` and `#download-pdf-btn`
pub struct BrowserAnalysisView {
    content: HtmlElement,
    download: Element,
}

impl BrowserAnalysisView {
    pub fn from_document(document: &Document) -> Result<Self, RiskMirrorError> {
        let content = require_element(document, ANALYSIS_CONTENT_ID)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| {
                RiskMirrorError::Dom(format!("#{} is not an HTML element", ANALYSIS_CONTENT_ID))
            })?;
        let download = require_element(document, DOWNLOAD_BUTTON_ID)?;
        Ok(Self { content, download })
    }
}

impl AnalysisView for BrowserAnalysisView {
    fn set_content(&self, text: &str) -> Result<(), RiskMirrorError> {
        self.content.set_inner_text(text);
        Ok(())
    }

    fn set_download_target(&self, href: &str) -> Result<(), RiskMirrorError> {
        self.download.set_attribute("href", href).map_err(dom_error)
    }
}

/// `window.alert` for users, the console for developers
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            web_sys::console::error_1(&message.into());
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            web_sys::console::error_1(&e);
        }
    }

    fn log_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
    }

    fn log_warning(&self, message: &str) {
        web_sys::console::warn_1(&message.into());
    }
}

/// `(id, value)` of every input, select and textarea in `form`, in document order
pub fn collect_form_fields(form: &Element) -> Result<Vec<(String, String)>, RiskMirrorError> {
    let nodes = form.query_selector_all(FIELD_SELECTOR).map_err(dom_error)?;
    let mut fields = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(field) = nodes.item(index).as_ref().and_then(field_entry) {
            fields.push(field);
        }
    }
    Ok(fields)
}

fn field_entry(node: &Node) -> Option<(String, String)> {
    if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
        return Some((input.id(), input.value()));
    }
    if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
        return Some((select.id(), select.value()));
    }
    if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
        return Some((area.id(), area.value()));
    }
    None
}
