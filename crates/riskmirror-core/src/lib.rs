//! Risk Mirror page controller logic
//!
//! Platform-independent half of the Risk Mirror analyzer page:
//! - `view`: switching between the main menu, the two domain forms and the
//!   analysis preview
//! - `submit`: building the form payload, posting it to `/analyze` and
//!   rendering the outcome
//! - `animate`: the staggered card entrance schedule
//!
//! DOM access, `fetch` and `alert` sit behind the traits in `view`, `lock`
//! and `submit`; the wasm app implements them over `web-sys`.

pub mod animate;
pub mod config;
pub mod domain;
pub mod error;
pub mod lock;
pub mod payload;
pub mod response;
pub mod submit;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use animate::{CardStyle, StaggerSchedule};
pub use config::ControllerConfig;
pub use domain::{Domain, Panel};
pub use error::RiskMirrorError;
pub use lock::{SubmitControl, SubmitLock};
pub use payload::{strip_field_prefix, AnalyzeRequest, FormPayload};
pub use response::{classify, AnalysisReport, AnalyzeResponse, SubmitOutcome};
pub use submit::{AnalysisView, Notifier, RiskMirrorController, Transport};
pub use view::{PanelHandle, PanelSet, ViewSwitcher, HIDDEN_CLASS, VISIBLE_CLASS};
