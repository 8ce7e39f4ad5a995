//! Analysis domains and the page panels they map to

use crate::error::RiskMirrorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Analysis category chosen from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Finance,
    Health,
}

impl Domain {
    pub const ALL: [Domain; 2] = [Domain::Finance, Domain::Health];

    /// Wire name, as sent in the `domain` field of an analysis request
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Finance => "finance",
            Domain::Health => "health",
        }
    }

    /// The panel that hosts this domain's form
    pub fn form_panel(&self) -> Panel {
        match self {
            Domain::Finance => Panel::FinanceForm,
            Domain::Health => Panel::HealthForm,
        }
    }

    /// Id of the `<form>` element inside the panel (`financeForm`, `healthForm`)
    pub fn form_element_id(&self) -> &'static str {
        match self {
            Domain::Finance => "financeForm",
            Domain::Health => "healthForm",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = RiskMirrorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "finance" => Ok(Domain::Finance),
            "health" => Ok(Domain::Health),
            other => Err(RiskMirrorError::UnknownDomain(other.to_string())),
        }
    }
}

/// Top-level page section; at most one is visible at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Panel {
    MainMenu,
    FinanceForm,
    HealthForm,
    AnalysisPreview,
}

impl Panel {
    pub const ALL: [Panel; 4] = [
        Panel::MainMenu,
        Panel::FinanceForm,
        Panel::HealthForm,
        Panel::AnalysisPreview,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            Panel::MainMenu => "main-menu",
            Panel::FinanceForm => "finance-form",
            Panel::HealthForm => "health-form",
            Panel::AnalysisPreview => "analysis-preview",
        }
    }

    /// The domain whose form lives in this panel, if any
    pub fn domain(&self) -> Option<Domain> {
        match self {
            Panel::FinanceForm => Some(Domain::Finance),
            Panel::HealthForm => Some(Domain::Health),
            Panel::MainMenu | Panel::AnalysisPreview => None,
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}
