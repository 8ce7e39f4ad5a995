//! Controller settings, overridable from the page as JSON

use crate::animate::StaggerSchedule;
use crate::error::RiskMirrorError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "/analyze";
pub const DEFAULT_LOADING_LABEL: &str = r#"<div class="loading-animation"></div> Analyzing..."#;
pub const DEFAULT_GENERIC_ERROR: &str = "An error occurred during analysis. Please try again.";
pub const DEFAULT_CARD_SELECTOR: &str = ".analyzer-card";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Analysis endpoint, relative to the page
    pub endpoint: String,
    /// Markup shown in the submit button while a request is pending
    pub loading_label: String,
    /// Notification for transport and parse failures
    pub generic_error_message: String,
    /// Prefix for server-reported errors
    pub application_error_prefix: String,
    pub card_selector: String,
    pub stagger: StaggerSchedule,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            loading_label: DEFAULT_LOADING_LABEL.to_string(),
            generic_error_message: DEFAULT_GENERIC_ERROR.to_string(),
            application_error_prefix: "Error: ".to_string(),
            card_selector: DEFAULT_CARD_SELECTOR.to_string(),
            stagger: StaggerSchedule::default(),
        }
    }
}

impl ControllerConfig {
    /// Parse a (possibly partial) JSON override; missing keys keep defaults
    pub fn from_json(json: &str) -> Result<Self, RiskMirrorError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| RiskMirrorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RiskMirrorError> {
        if self.endpoint.trim().is_empty() {
            return Err(RiskMirrorError::Config("endpoint must not be empty".to_string()));
        }
        if self.card_selector.trim().is_empty() {
            return Err(RiskMirrorError::Config(
                "card_selector must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn application_error_text(&self, message: &str) -> String {
        format!("{}{}", self.application_error_prefix, message)
    }
}
