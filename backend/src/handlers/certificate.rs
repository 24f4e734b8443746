//! HTTP handlers for certificate status endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{CertificateState, Language, Priority};

use crate::error::{AppError, AppResult};
use crate::handlers::LangQuery;
use crate::services::certificate::{
    AlertView, CertificateService, ClassifyInput, ClassifyResult, DashboardView,
};
use crate::AppState;

/// Dashboard overview
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(lang): Query<LangQuery>,
) -> Json<DashboardView> {
    let service = CertificateService::new(state.roster, state.clock);
    Json(service.dashboard(&state.config.reporting.company_name, lang.language()))
}

/// Query parameters for the alerts feed
#[derive(Debug, Deserialize)]
pub struct AlertsQuery {
    pub priority: Option<String>,
    pub state: Option<String>,
    pub lang: Option<String>,
}

/// Ranked alerts feed
pub async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertsQuery>,
) -> AppResult<Json<Vec<AlertView>>> {
    let priority = query
        .priority
        .as_deref()
        .map(|raw| {
            raw.parse::<Priority>().map_err(|message| AppError::Validation {
                field: "priority".to_string(),
                message,
                message_nl: "Onbekende prioriteit".to_string(),
            })
        })
        .transpose()?;

    let certificate_state = query
        .state
        .as_deref()
        .map(|raw| {
            raw.parse::<CertificateState>().map_err(|message| AppError::Validation {
                field: "state".to_string(),
                message,
                message_nl: "Onbekende certificaatstatus".to_string(),
            })
        })
        .transpose()?;

    let lang = query
        .lang
        .as_deref()
        .map(Language::from_code)
        .unwrap_or_default();

    let service = CertificateService::new(state.roster, state.clock);
    Ok(Json(service.alerts(priority, certificate_state, lang)))
}

/// Classify a single expiry date
pub async fn classify_certificate(
    State(state): State<AppState>,
    Query(lang): Query<LangQuery>,
    Json(input): Json<ClassifyInput>,
) -> AppResult<Json<ClassifyResult>> {
    let service = CertificateService::new(state.roster, state.clock);
    let result = service.classify(input, lang.language())?;
    Ok(Json(result))
}
