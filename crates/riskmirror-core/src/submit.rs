//! Form submission: payload, request, and rendering of the outcome

use crate::config::ControllerConfig;
use crate::domain::{Domain, Panel};
use crate::error::RiskMirrorError;
use crate::lock::{SubmitControl, SubmitLock};
use crate::payload::{AnalyzeRequest, FormPayload};
use crate::response::{classify, AnalysisReport, SubmitOutcome};
use crate::view::{PanelHandle, PanelSet, ViewSwitcher};
use std::cell::RefCell;

/// Sends a JSON body and returns the response body text.
///
/// Implementations return the body for any HTTP status; only failures to
/// reach the server or read the body are errors.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, RiskMirrorError>;
}

/// Blocking user notifications and developer logging
pub trait Notifier {
    fn alert(&self, message: &str);

    fn log_error(&self, message: &str);

    fn log_warning(&self, message: &str);
}

/// Content area and download control of the analysis preview
pub trait AnalysisView {
    /// Write `text` as plain text, never as markup
    fn set_content(&self, text: &str) -> Result<(), RiskMirrorError>;

    fn set_download_target(&self, href: &str) -> Result<(), RiskMirrorError>;
}

/// Page controller combining the view switcher and the form submitter
pub struct RiskMirrorController<H, V, T, N>
where
    H: PanelHandle,
{
    view: ViewSwitcher<H>,
    analysis: V,
    transport: T,
    notifier: N,
    config: ControllerConfig,
    last_report: RefCell<Option<AnalysisReport>>,
}

impl<H, V, T, N> RiskMirrorController<H, V, T, N>
where
    H: PanelHandle,
    V: AnalysisView,
    T: Transport,
    N: Notifier,
{
    pub fn new(
        panels: PanelSet<H>,
        analysis: V,
        transport: T,
        notifier: N,
        config: ControllerConfig,
    ) -> Self {
        Self {
            view: ViewSwitcher::new(panels),
            analysis,
            transport,
            notifier,
            config,
            last_report: RefCell::new(None),
        }
    }

    pub fn view(&self) -> &ViewSwitcher<H> {
        &self.view
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn active_panel(&self) -> Panel {
        self.view.active()
    }

    pub fn show_form(&self, domain: Domain) -> Result<(), RiskMirrorError> {
        self.view.show_form(domain)
    }

    pub fn back_to_menu(&self) -> Result<(), RiskMirrorError> {
        self.view.back_to_menu()
    }

    /// Most recent successful analysis
    pub fn last_report(&self) -> Option<AnalysisReport> {
        self.last_report.borrow().clone()
    }

    /// Submit one domain form.
    ///
    /// `fields` are the `(element id, value)` pairs of the form's inputs in
    /// document order. `control` stays disabled until the outcome has been
    /// rendered.
    pub async fn submit<I, K, S, C>(&self, domain: Domain, fields: I, control: &C) -> SubmitOutcome
    where
        I: IntoIterator<Item = (K, S)>,
        K: AsRef<str>,
        S: Into<String>,
        C: SubmitControl + ?Sized,
    {
        let request = AnalyzeRequest::new(domain, FormPayload::from_fields(fields));
        for key in request.data.overwritten_keys() {
            self.notifier.log_warning(&format!(
                "Form field `{}` was set more than once; the later value is sent",
                key
            ));
        }
        let _lock = SubmitLock::acquire(control, &self.config.loading_label);

        tracing::debug!(
            %domain,
            fields = request.data.len(),
            endpoint = %self.config.endpoint,
            "submitting analysis request"
        );

        let outcome = match self.send(&request).await {
            Ok(body) => classify(&body),
            Err(e) => SubmitOutcome::TransportError(e.to_string()),
        };
        let outcome = self.render(outcome);

        tracing::debug!(%domain, outcome = outcome.kind(), "analysis request finished");
        outcome
    }

    async fn send(&self, request: &AnalyzeRequest) -> Result<String, RiskMirrorError> {
        let body = request.to_json()?;
        self.transport.post_json(&self.config.endpoint, body).await
    }

    /// Apply an outcome to the page. A success that cannot be displayed is
    /// downgraded to a transport error.
    fn render(&self, outcome: SubmitOutcome) -> SubmitOutcome {
        let outcome = match outcome {
            SubmitOutcome::Success(report) => match self.present(&report) {
                Ok(()) => {
                    *self.last_report.borrow_mut() = Some(report.clone());
                    SubmitOutcome::Success(report)
                }
                Err(e) => SubmitOutcome::TransportError(e.to_string()),
            },
            other => other,
        };

        match &outcome {
            SubmitOutcome::Success(_) => {}
            SubmitOutcome::ApplicationError(message) => {
                self.notifier
                    .alert(&self.config.application_error_text(message));
            }
            SubmitOutcome::TransportError(detail) => {
                tracing::warn!(%detail, "analysis request failed");
                self.notifier
                    .log_error(&format!("Analysis request failed: {}", detail));
                self.notifier.alert(&self.config.generic_error_message);
            }
        }
        outcome
    }

    fn present(&self, report: &AnalysisReport) -> Result<(), RiskMirrorError> {
        self.analysis.set_content(&report.analysis)?;
        self.analysis.set_download_target(&report.pdf_link)?;
        self.view.show(Panel::AnalysisPreview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        FakeAnalysisView, FakeButton, FakeNotifier, FakePanel, FakeTransport,
    };
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    type TestController =
        RiskMirrorController<FakePanel, FakeAnalysisView, FakeTransport, FakeNotifier>;

    fn controller(transport: FakeTransport) -> TestController {
        let panels = PanelSet::try_from_fn(|_| Ok(FakePanel::default())).unwrap();
        let controller = RiskMirrorController::new(
            panels,
            FakeAnalysisView::default(),
            transport,
            FakeNotifier::default(),
            ControllerConfig::default(),
        );
        controller.view().sync().unwrap();
        controller
    }

    #[tokio::test]
    async fn test_success_shows_analysis_preview() {
        let ctl = controller(FakeTransport::responding(
            r#"{"analysis": "X", "pdf_link": "/p.pdf"}"#,
        ));
        ctl.show_form(Domain::Finance).unwrap();
        let button = FakeButton::new("Analyze");

        let outcome = ctl.submit(Domain::Finance, [("name", "Ana")], &button).await;

        assert!(outcome.is_success());
        assert_eq!(ctl.active_panel(), Panel::AnalysisPreview);
        assert!(ctl.view().panels().analysis_preview.is_visible());
        assert!(!ctl.view().panels().finance_form.is_visible());
        assert_eq!(ctl.analysis.content(), Some("X".to_string()));
        assert_eq!(ctl.analysis.download_target(), Some("/p.pdf".to_string()));
        assert!(ctl.notifier.alerts().is_empty());
        assert!(!button.is_disabled());
        assert_eq!(button.label(), "Analyze");
    }

    #[tokio::test]
    async fn test_request_body_and_endpoint() {
        let ctl = controller(FakeTransport::responding(
            r#"{"analysis": "a", "pdf_link": "/p"}"#,
        ));
        let button = FakeButton::new("Analyze");

        ctl.submit(
            Domain::Health,
            [("h_age", "42"), ("h_name", "Ana"), ("smoker", "no")],
            &button,
        )
        .await;

        let requests = ctl.transport.requests();
        assert_eq!(requests.len(), 1);
        let (url, body) = &requests[0];
        assert_eq!(url, "/analyze");
        let body: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "domain": "health",
                "data": {"age": "42", "name": "Ana", "smoker": "no"}
            })
        );
        assert!(ctl.notifier.warnings().is_empty());
    }

    #[tokio::test]
    async fn test_request_body_keeps_field_order() {
        let ctl = controller(FakeTransport::responding(
            r#"{"analysis": "a", "pdf_link": "/p"}"#,
        ));
        let button = FakeButton::new("Analyze");

        ctl.submit(
            Domain::Finance,
            [("name", "Ana"), ("income", "52000"), ("age", "30"), ("h_income", "61000")],
            &button,
        )
        .await;

        let requests = ctl.transport.requests();
        assert_eq!(
            requests[0].1,
            r#"{"domain":"finance","data":{"name":"Ana","income":"61000","age":"30"}}"#
        );
        let warnings = ctl.notifier.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("`income`"));
    }

    #[tokio::test]
    async fn test_application_error_keeps_form() {
        let ctl = controller(FakeTransport::responding(r#"{"error": "bad input"}"#));
        ctl.show_form(Domain::Health).unwrap();
        let button = FakeButton::new("Analyze");

        let outcome = ctl.submit(Domain::Health, [("h_age", "x")], &button).await;

        assert_eq!(outcome, SubmitOutcome::ApplicationError("bad input".to_string()));
        assert_eq!(ctl.active_panel(), Panel::HealthForm);
        assert!(ctl.view().panels().health_form.is_visible());
        assert!(!ctl.view().panels().analysis_preview.is_visible());
        let alerts = ctl.notifier.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("bad input"));
        assert_eq!(ctl.analysis.content(), None);
        assert!(!button.is_disabled());
    }

    #[tokio::test]
    async fn test_network_failure_shows_generic_message() {
        let ctl = controller(FakeTransport::failing("connection refused"));
        ctl.show_form(Domain::Finance).unwrap();
        let button = FakeButton::new("Analyze");

        let outcome = ctl.submit(Domain::Finance, [("name", "Ana")], &button).await;

        assert_eq!(outcome.kind(), "transport_error");
        assert_eq!(ctl.active_panel(), Panel::FinanceForm);
        assert_eq!(
            ctl.notifier.alerts(),
            vec![ControllerConfig::default().generic_error_message]
        );
        let logs = ctl.notifier.logs();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].contains("connection refused"));
        assert!(!button.is_disabled());
        assert_eq!(button.label(), "Analyze");
    }

    #[tokio::test]
    async fn test_non_json_response_is_transport_error() {
        let ctl = controller(FakeTransport::responding("<h1>502 Bad Gateway</h1>"));
        ctl.show_form(Domain::Finance).unwrap();
        let button = FakeButton::new("Analyze");

        let outcome = ctl.submit(Domain::Finance, Vec::<(String, String)>::new(), &button).await;

        assert_eq!(outcome.kind(), "transport_error");
        assert_eq!(ctl.active_panel(), Panel::FinanceForm);
        assert_eq!(ctl.notifier.alerts().len(), 1);
    }

    #[tokio::test]
    async fn test_button_locked_while_request_pending() {
        let button = Rc::new(FakeButton::new("Analyze"));
        let ctl = controller(
            FakeTransport::responding(r#"{"error": "x"}"#).observing(Rc::clone(&button)),
        );

        ctl.submit(Domain::Finance, [("name", "Ana")], &*button).await;

        assert_eq!(
            ctl.transport.observed(),
            vec![(true, ControllerConfig::default().loading_label)]
        );
        assert!(!button.is_disabled());
    }

    #[tokio::test]
    async fn test_display_failure_downgrades_to_transport_error() {
        let ctl = controller(FakeTransport::responding(
            r#"{"analysis": "X", "pdf_link": "/p.pdf"}"#,
        ));
        ctl.analysis.fail_writes();
        ctl.show_form(Domain::Finance).unwrap();
        let button = FakeButton::new("Analyze");

        let outcome = ctl.submit(Domain::Finance, [("name", "Ana")], &button).await;

        assert_eq!(outcome.kind(), "transport_error");
        assert_eq!(ctl.active_panel(), Panel::FinanceForm);
        assert!(ctl.last_report().is_none());
        assert!(!button.is_disabled());
    }

    #[tokio::test]
    async fn test_last_report_tracks_latest_success() {
        let ctl = controller(FakeTransport::responding(
            r#"{"analysis": "X", "pdf_link": "/p.pdf", "risk_score": 5.5}"#,
        ));
        assert!(ctl.last_report().is_none());
        let button = FakeButton::new("Analyze");

        ctl.submit(Domain::Health, [("h_age", "40")], &button).await;

        let report = ctl.last_report().unwrap();
        assert_eq!(report.risk_score, Some(5.5));
        assert_eq!(report.pdf_link, "/p.pdf");
    }

    #[tokio::test]
    async fn test_custom_endpoint() {
        let panels = PanelSet::try_from_fn(|_| Ok(FakePanel::default())).unwrap();
        let config = ControllerConfig::from_json(r#"{"endpoint": "/v2/analyze"}"#).unwrap();
        let ctl = RiskMirrorController::new(
            panels,
            FakeAnalysisView::default(),
            FakeTransport::responding(r#"{"analysis": "a", "pdf_link": "/p"}"#),
            FakeNotifier::default(),
            config,
        );

        ctl.submit(Domain::Finance, [("name", "Ana")], &FakeButton::new("Go"))
            .await;

        assert_eq!(ctl.transport.requests()[0].0, "/v2/analyze");
    }
}
