//! Employee service: roster list, detail, pass sharing and QR lookups

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use shared::{
    filter_roster, interpret_scan, pass_link, Certificate, CertificateType, Clock, Employee,
    Language, PaginatedResponse, Pagination, RosterQuery, ScanOutcome,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::certificate::StatusView;
use crate::store::RosterStore;

/// Employee service
#[derive(Clone)]
pub struct EmployeeService {
    roster: Arc<RosterStore>,
    clock: Arc<dyn Clock>,
}

/// Row in the employee list
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeListItem {
    pub id: Uuid,
    pub name: String,
    pub initial: Option<char>,
    pub company: String,
    /// Type of the employee's current certificate
    pub certificate_type: Option<CertificateType>,
    pub valid_until: Option<NaiveDate>,
    pub status: Option<StatusView>,
}

/// Certificate with its status on the detail screen
#[derive(Debug, Clone, Serialize)]
pub struct CertificateView {
    #[serde(flatten)]
    pub certificate: Certificate,
    pub status: StatusView,
}

/// Employee detail screen
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeDetail {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub pass_link: String,
    pub certificates: Vec<CertificateView>,
}

/// Share sheet content for an employee's pass
#[derive(Debug, Clone, Serialize)]
pub struct PassShare {
    pub employee_id: Uuid,
    pub title: String,
    pub message: String,
    pub link: String,
}

/// Result of looking up a scanned QR payload
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub outcome: ScanOutcome,
    pub employee: EmployeeDetail,
}

impl EmployeeService {
    /// Create a new EmployeeService instance
    pub fn new(roster: Arc<RosterStore>, clock: Arc<dyn Clock>) -> Self {
        Self { roster, clock }
    }

    /// List employees matching a search and status filter
    pub fn list_employees(
        &self,
        query: &RosterQuery,
        pagination: &Pagination,
        lang: Language,
    ) -> PaginatedResponse<EmployeeListItem> {
        let today = self.clock.today();
        let matches = filter_roster(self.roster.employees(), query, today);

        tracing::debug!(
            %today,
            search = ?query.search,
            status = ?query.status,
            matches = matches.len(),
            "Filtered roster"
        );

        let items = matches
            .into_iter()
            .map(|employee| list_item(employee, today, lang))
            .collect();

        pagination.paginate(items)
    }

    /// Get an employee with every certificate classified
    pub fn get_employee(&self, employee_id: Uuid, lang: Language) -> AppResult<EmployeeDetail> {
        let employee = self.find(employee_id)?;
        Ok(detail(employee, self.clock.today(), lang))
    }

    /// Share sheet content for an employee's pass
    pub fn pass_share(&self, employee_id: Uuid, lang: Language) -> AppResult<PassShare> {
        let employee = self.find(employee_id)?;
        let link = pass_link(employee.id);

        let (title, message) = match lang {
            Language::Dutch => (
                format!("VCA-pas van {}", employee.name),
                format!("VCA-pas van {}: {}", employee.name, link),
            ),
            Language::English => (
                format!("VCA pass of {}", employee.name),
                format!("VCA pass of {}: {}", employee.name, link),
            ),
        };

        Ok(PassShare {
            employee_id: employee.id,
            title,
            message,
            link,
        })
    }

    /// Resolve a decoded QR payload to an employee
    pub fn scan(&self, payload: &str, lang: Language) -> AppResult<ScanResult> {
        match interpret_scan(payload) {
            ScanOutcome::Pass { employee_id } => {
                tracing::debug!(%employee_id, "Scanned VCA pass");
                let employee = self.get_employee(employee_id, lang)?;
                Ok(ScanResult {
                    outcome: ScanOutcome::Pass { employee_id },
                    employee,
                })
            }
            ScanOutcome::UnreadablePass | ScanOutcome::Unrecognized => {
                tracing::warn!(payload, "Scanned code is not a readable VCA pass");
                Err(AppError::UnrecognizedPass(payload.to_string()))
            }
        }
    }

    fn find(&self, employee_id: Uuid) -> AppResult<&Employee> {
        self.roster
            .find(employee_id)
            .ok_or_else(|| AppError::NotFound("Employee".to_string()))
    }
}

fn list_item(employee: &Employee, today: NaiveDate, lang: Language) -> EmployeeListItem {
    let current = employee.current_certificate();

    EmployeeListItem {
        id: employee.id,
        name: employee.name.clone(),
        initial: employee.initial(),
        company: employee.company.clone(),
        certificate_type: current.map(|c| c.certificate_type.clone()),
        valid_until: current.map(|c| c.valid_until),
        status: current.map(|c| StatusView::new(c.status_at(today), lang)),
    }
}

fn detail(employee: &Employee, today: NaiveDate, lang: Language) -> EmployeeDetail {
    EmployeeDetail {
        id: employee.id,
        name: employee.name.clone(),
        email: employee.email.clone(),
        phone: employee.phone.clone(),
        company: employee.company.clone(),
        pass_link: pass_link(employee.id),
        certificates: employee
            .certificate_statuses(today)
            .into_iter()
            .map(|(certificate, status)| CertificateView {
                certificate: certificate.clone(),
                status: StatusView::new(status, lang),
            })
            .collect(),
    }
}
