//! HTTP handlers for employee endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{Language, PaginatedResponse, Pagination, RosterQuery, StatusFilter};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::handlers::LangQuery;
use crate::services::employee::{
    EmployeeDetail, EmployeeListItem, EmployeeService, PassShare, ScanResult,
};
use crate::AppState;

/// Query parameters for listing employees
#[derive(Debug, Deserialize)]
pub struct ListEmployeesQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub lang: Option<String>,
}

/// List employees with their headline certificate status
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListEmployeesQuery>,
) -> AppResult<Json<PaginatedResponse<EmployeeListItem>>> {
    let status = match query.status.as_deref() {
        Some(raw) => raw.parse::<StatusFilter>().map_err(|message| AppError::Validation {
            field: "status".to_string(),
            message,
            message_nl: "Onbekend statusfilter".to_string(),
        })?,
        None => StatusFilter::All,
    };

    let roster_query = RosterQuery {
        search: query.search,
        status,
    };
    let pagination = Pagination::new(query.page, query.per_page);
    let lang = query
        .lang
        .as_deref()
        .map(Language::from_code)
        .unwrap_or_default();

    let service = EmployeeService::new(state.roster, state.clock);
    Ok(Json(service.list_employees(&roster_query, &pagination, lang)))
}

/// Get an employee with all certificates
pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Query(lang): Query<LangQuery>,
) -> AppResult<Json<EmployeeDetail>> {
    let service = EmployeeService::new(state.roster, state.clock);
    let employee = service.get_employee(employee_id, lang.language())?;
    Ok(Json(employee))
}

/// Share link for an employee's pass
pub async fn get_pass_share(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Query(lang): Query<LangQuery>,
) -> AppResult<Json<PassShare>> {
    let service = EmployeeService::new(state.roster, state.clock);
    let share = service.pass_share(employee_id, lang.language())?;
    Ok(Json(share))
}

/// Input for a scanned QR code
#[derive(Debug, Deserialize)]
pub struct ScanInput {
    pub payload: String,
}

/// Resolve a scanned QR payload to an employee
pub async fn scan_pass(
    State(state): State<AppState>,
    Query(lang): Query<LangQuery>,
    Json(input): Json<ScanInput>,
) -> AppResult<Json<ScanResult>> {
    let service = EmployeeService::new(state.roster, state.clock);
    let result = service.scan(&input.payload, lang.language())?;
    Ok(Json(result))
}
