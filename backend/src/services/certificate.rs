//! Certificate status service: dashboard, alerts feed and ad hoc classification

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{
    alerts_feed, classify_raw, parse_certificate_date, summarize, Alert, CertificateState, Clock,
    DashboardSummary, Language, Priority, StatusClassification,
};

use crate::error::{AppError, AppResult};
use crate::store::RosterStore;

/// Alerts shown on the dashboard below the overview
pub const DASHBOARD_ALERT_LIMIT: usize = 5;

/// Certificate status service
#[derive(Clone)]
pub struct CertificateService {
    roster: Arc<RosterStore>,
    clock: Arc<dyn Clock>,
}

/// Classification plus the copy a screen needs to render it
#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
    #[serde(flatten)]
    pub status: StatusClassification,
    pub state_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_label: Option<String>,
    pub description: String,
    pub badge: String,
    pub remaining_fraction: f64,
}

impl StatusView {
    pub fn new(status: StatusClassification, lang: Language) -> Self {
        Self {
            status,
            state_label: status.state.label(lang).to_string(),
            priority_label: status.priority.map(|p| p.label(lang).to_string()),
            description: status.describe(lang),
            badge: status.short_label(),
            remaining_fraction: status.remaining_fraction(),
        }
    }
}

/// Alert row with rendered copy
#[derive(Debug, Clone, Serialize)]
pub struct AlertView {
    #[serde(flatten)]
    pub alert: Alert,
    pub view: StatusView,
}

impl AlertView {
    pub fn new(alert: Alert, lang: Language) -> Self {
        let view = StatusView::new(alert.status, lang);
        Self { alert, view }
    }
}

/// Dashboard payload
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub company_name: String,
    pub today: NaiveDate,
    #[serde(flatten)]
    pub summary: DashboardSummary,
    pub alerts: Vec<AlertView>,
    pub total_alerts: usize,
}

/// Input for classifying a single expiry date
#[derive(Debug, Deserialize)]
pub struct ClassifyInput {
    pub valid_until: Option<String>,
    /// Overrides the server's notion of today, as `YYYY-MM-DD`
    pub today: Option<String>,
}

/// Classification result for an ad hoc request
#[derive(Debug, Serialize)]
pub struct ClassifyResult {
    pub today: NaiveDate,
    #[serde(flatten)]
    pub view: StatusView,
}

impl CertificateService {
    /// Create a new CertificateService instance
    pub fn new(roster: Arc<RosterStore>, clock: Arc<dyn Clock>) -> Self {
        Self { roster, clock }
    }

    /// Dashboard overview for the employer
    pub fn dashboard(&self, company_name: &str, lang: Language) -> DashboardView {
        let today = self.clock.today();
        let summary = summarize(self.roster.employees(), today);
        let alerts = alerts_feed(self.roster.employees(), today);
        let total_alerts = alerts.len();

        tracing::debug!(
            %today,
            compliance_rate = summary.compliance_rate,
            total_alerts,
            "Computed dashboard"
        );

        DashboardView {
            company_name: company_name.to_string(),
            today,
            summary,
            alerts: alerts
                .into_iter()
                .take(DASHBOARD_ALERT_LIMIT)
                .map(|a| AlertView::new(a, lang))
                .collect(),
            total_alerts,
        }
    }

    /// Ranked alerts feed, optionally narrowed to one priority or state
    pub fn alerts(
        &self,
        priority: Option<Priority>,
        state: Option<CertificateState>,
        lang: Language,
    ) -> Vec<AlertView> {
        let today = self.clock.today();

        let alerts: Vec<AlertView> = alerts_feed(self.roster.employees(), today)
            .into_iter()
            .filter(|a| priority.map_or(true, |p| a.status.priority == Some(p)))
            .filter(|a| state.map_or(true, |s| a.status.state == s))
            .map(|a| AlertView::new(a, lang))
            .collect();

        tracing::debug!(%today, count = alerts.len(), ?priority, ?state, "Listed alerts");
        alerts
    }

    /// Classify one expiry date supplied by the caller
    pub fn classify(&self, input: ClassifyInput, lang: Language) -> AppResult<ClassifyResult> {
        let today = parse_certificate_date("today", input.today.as_deref())
            .map_err(|err| AppError::Validation {
                field: "today".to_string(),
                message: err.to_string(),
                message_nl: "Ongeldige datum voor vandaag (verwacht JJJJ-MM-DD)".to_string(),
            })?
            .unwrap_or_else(|| self.clock.today());
        let status = classify_raw(input.valid_until.as_deref(), today)?;

        Ok(ClassifyResult {
            today,
            view: StatusView::new(status, lang),
        })
    }
}
