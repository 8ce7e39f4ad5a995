//! View switching between the page's mutually exclusive panels
//!
//! Visibility is a two-class convention (`visible` / `hidden`); the
//! stylesheet transitions between the two states. The currently shown panel
//! is tracked as a single [`Panel`] value; every switch conceals all other
//! panels before revealing the target.

use crate::domain::{Domain, Panel};
use crate::error::RiskMirrorError;
use std::cell::Cell;

pub const VISIBLE_CLASS: &str = "visible";
pub const HIDDEN_CLASS: &str = "hidden";

/// A panel element whose class list can be edited
pub trait PanelHandle {
    fn add_class(&self, class: &str) -> Result<(), RiskMirrorError>;

    fn remove_class(&self, class: &str) -> Result<(), RiskMirrorError>;

    fn reveal(&self) -> Result<(), RiskMirrorError> {
        self.remove_class(HIDDEN_CLASS)?;
        self.add_class(VISIBLE_CLASS)
    }

    fn conceal(&self) -> Result<(), RiskMirrorError> {
        self.remove_class(VISIBLE_CLASS)?;
        self.add_class(HIDDEN_CLASS)
    }
}

/// One handle per [`Panel`]
#[derive(Debug, Clone)]
pub struct PanelSet<H> {
    pub main_menu: H,
    pub finance_form: H,
    pub health_form: H,
    pub analysis_preview: H,
}

impl<H> PanelSet<H> {
    /// Build a set by resolving each panel through `lookup`
    pub fn try_from_fn<F>(mut lookup: F) -> Result<Self, RiskMirrorError>
    where
        F: FnMut(Panel) -> Result<H, RiskMirrorError>,
    {
        Ok(Self {
            main_menu: lookup(Panel::MainMenu)?,
            finance_form: lookup(Panel::FinanceForm)?,
            health_form: lookup(Panel::HealthForm)?,
            analysis_preview: lookup(Panel::AnalysisPreview)?,
        })
    }

    pub fn get(&self, panel: Panel) -> &H {
        match panel {
            Panel::MainMenu => &self.main_menu,
            Panel::FinanceForm => &self.finance_form,
            Panel::HealthForm => &self.health_form,
            Panel::AnalysisPreview => &self.analysis_preview,
        }
    }
}

pub struct ViewSwitcher<H: PanelHandle> {
    panels: PanelSet<H>,
    active: Cell<Panel>,
}

impl<H: PanelHandle> ViewSwitcher<H> {
    /// Wrap the panel handles. The page is assumed to start on the main
    /// menu; call [`ViewSwitcher::sync`] to force the DOM into that state.
    pub fn new(panels: PanelSet<H>) -> Self {
        Self {
            panels,
            active: Cell::new(Panel::MainMenu),
        }
    }

    pub fn active(&self) -> Panel {
        self.active.get()
    }

    pub fn panels(&self) -> &PanelSet<H> {
        &self.panels
    }

    /// Show `target` and hide every other panel
    pub fn show(&self, target: Panel) -> Result<(), RiskMirrorError> {
        for panel in Panel::ALL {
            if panel != target {
                self.panels.get(panel).conceal()?;
            }
        }
        self.panels.get(target).reveal()?;

        let previous = self.active.replace(target);
        tracing::debug!(from = %previous, to = %target, "switched panel");
        Ok(())
    }

    pub fn show_form(&self, domain: Domain) -> Result<(), RiskMirrorError> {
        self.show(domain.form_panel())
    }

    pub fn back_to_menu(&self) -> Result<(), RiskMirrorError> {
        self.show(Panel::MainMenu)
    }

    /// Re-apply the classes for the currently active panel
    pub fn sync(&self) -> Result<(), RiskMirrorError> {
        self.show(self.active.get())
    }
}
