//! In-memory implementations of the page seams for unit tests

use crate::error::RiskMirrorError;
use crate::lock::SubmitControl;
use crate::submit::{AnalysisView, Notifier, Transport};
use crate::view::{PanelHandle, VISIBLE_CLASS};
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct FakePanel {
    classes: RefCell<BTreeSet<String>>,
}

impl FakePanel {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    pub fn is_visible(&self) -> bool {
        self.has_class(VISIBLE_CLASS)
    }
}

impl PanelHandle for FakePanel {
    fn add_class(&self, class: &str) -> Result<(), RiskMirrorError> {
        self.classes.borrow_mut().insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), RiskMirrorError> {
        self.classes.borrow_mut().remove(class);
        Ok(())
    }
}

#[derive(Debug)]
pub struct FakeButton {
    label: RefCell<String>,
    disabled: Cell<bool>,
}

impl FakeButton {
    pub fn new(label: &str) -> Self {
        Self {
            label: RefCell::new(label.to_string()),
            disabled: Cell::new(false),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }
}

impl SubmitControl for FakeButton {
    fn label(&self) -> String {
        self.label.borrow().clone()
    }

    fn set_label(&self, label: &str) {
        *self.label.borrow_mut() = label.to_string();
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }
}

#[derive(Debug, Default)]
pub struct FakeAnalysisView {
    content: RefCell<Option<String>>,
    download_target: RefCell<Option<String>>,
    fail: Cell<bool>,
}

impl FakeAnalysisView {
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    pub fn download_target(&self) -> Option<String> {
        self.download_target.borrow().clone()
    }

    pub fn fail_writes(&self) {
        self.fail.set(true);
    }
}

impl AnalysisView for FakeAnalysisView {
    fn set_content(&self, text: &str) -> Result<(), RiskMirrorError> {
        if self.fail.get() {
            return Err(RiskMirrorError::Dom("content element detached".to_string()));
        }
        *self.content.borrow_mut() = Some(text.to_string());
        Ok(())
    }

    fn set_download_target(&self, href: &str) -> Result<(), RiskMirrorError> {
        *self.download_target.borrow_mut() = Some(href.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeNotifier {
    alerts: RefCell<Vec<String>>,
    logs: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
}

impl FakeNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn logs(&self) -> Vec<String> {
        self.logs.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }
}

impl Notifier for FakeNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn log_error(&self, message: &str) {
        self.logs.borrow_mut().push(message.to_string());
    }

    fn log_warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}

/// Replays a canned response and records every request
pub struct FakeTransport {
    response: Result<String, RiskMirrorError>,
    requests: RefCell<Vec<(String, String)>>,
    watched: Option<Rc<FakeButton>>,
    observed: RefCell<Vec<(bool, String)>>,
}

impl FakeTransport {
    pub fn responding(body: &str) -> Self {
        Self::with_response(Ok(body.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_response(Err(RiskMirrorError::Transport(message.to_string())))
    }

    fn with_response(response: Result<String, RiskMirrorError>) -> Self {
        Self {
            response,
            requests: RefCell::new(Vec::new()),
            watched: None,
            observed: RefCell::new(Vec::new()),
        }
    }

    /// Record the button's `(disabled, label)` state at request time
    pub fn observing(mut self, button: Rc<FakeButton>) -> Self {
        self.watched = Some(button);
        self
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.borrow().clone()
    }

    pub fn observed(&self) -> Vec<(bool, String)> {
        self.observed.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, RiskMirrorError> {
        self.requests.borrow_mut().push((url.to_string(), body));
        if let Some(button) = &self.watched {
            self.observed
                .borrow_mut()
                .push((button.is_disabled(), button.label()));
        }
        self.response.clone()
    }
}
