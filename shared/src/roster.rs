//! Roster views built on the status engine
//!
//! Dashboard counts, the searchable employee list and the alerts feed. All
//! functions take `today` explicitly and never cache a classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CertificateType, Employee};
use crate::status::{compliance_rate, rank_alerts, CertificateState, StatusClassification};

/// Status filter chips on the employee list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Valid,
    ExpiringSoon,
    Expired,
}

impl StatusFilter {
    /// Whether an employee with this headline status passes the filter
    pub fn matches(&self, headline: Option<&StatusClassification>) -> bool {
        match (self, headline) {
            (StatusFilter::All, _) => true,
            (_, None) => false,
            (StatusFilter::Valid, Some(s)) => s.state == CertificateState::Valid,
            (StatusFilter::ExpiringSoon, Some(s)) => s.state == CertificateState::ExpiringSoon,
            (StatusFilter::Expired, Some(s)) => s.state == CertificateState::Expired,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" | "alle" => Ok(StatusFilter::All),
            "valid" | "geldig" => Ok(StatusFilter::Valid),
            "expiring_soon" | "verloopt_binnenkort" => Ok(StatusFilter::ExpiringSoon),
            "expired" | "verlopen" => Ok(StatusFilter::Expired),
            other => Err(format!("Unknown status filter: {}", other)),
        }
    }
}

/// Search text plus status filter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub status: StatusFilter,
}

impl RosterQuery {
    fn matches_search(&self, employee: &Employee) -> bool {
        let needle = match self.search.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_lowercase(),
            _ => return true,
        };

        employee.name.to_lowercase().contains(&needle)
            || employee
                .certificates
                .iter()
                .any(|c| c.certificate_type.label().to_lowercase().contains(&needle))
    }
}

/// Employees matching `query`, in roster order
pub fn filter_roster<'a>(
    employees: &'a [Employee],
    query: &RosterQuery,
    today: NaiveDate,
) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|e| query.matches_search(e))
        .filter(|e| query.status.matches(e.headline_status(today).as_ref()))
        .collect()
}

/// Figures for the dashboard overview and compliance ring
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_employees: usize,
    /// Employees whose current certificate is valid
    pub certified: usize,
    pub expiring_soon: usize,
    pub expired: usize,
    /// Employees holding no certificate at all
    pub uncertified: usize,
    pub total_certificates: usize,
    /// Percentage of all certificates that are valid
    pub compliance_rate: u8,
}

/// Compute the dashboard figures for `employees` on `today`
pub fn summarize(employees: &[Employee], today: NaiveDate) -> DashboardSummary {
    let mut summary = DashboardSummary {
        total_employees: employees.len(),
        certified: 0,
        expiring_soon: 0,
        expired: 0,
        uncertified: 0,
        total_certificates: 0,
        compliance_rate: 100,
    };

    for employee in employees {
        match employee.headline_status(today).map(|s| s.state) {
            Some(CertificateState::Valid) => summary.certified += 1,
            Some(CertificateState::ExpiringSoon) => summary.expiring_soon += 1,
            Some(CertificateState::Expired) => summary.expired += 1,
            None => summary.uncertified += 1,
        }
    }

    let statuses: Vec<StatusClassification> = employees
        .iter()
        .flat_map(|e| e.certificates.iter().map(|c| c.status_at(today)))
        .collect();

    summary.total_certificates = statuses.len();
    summary.compliance_rate = compliance_rate(&statuses);
    summary
}

/// One row of the alerts feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    pub employee_id: Uuid,
    pub employee_name: String,
    pub certificate_id: Uuid,
    pub certificate_type: CertificateType,
    pub valid_until: NaiveDate,
    pub status: StatusClassification,
}

/// Every expiring or expired certificate on the roster, most urgent first
pub fn alerts_feed(employees: &[Employee], today: NaiveDate) -> Vec<Alert> {
    let entries = employees.iter().flat_map(|employee| {
        employee
            .certificate_statuses(today)
            .into_iter()
            .map(move |(cert, status)| {
                (
                    Alert {
                        employee_id: employee.id,
                        employee_name: employee.name.clone(),
                        certificate_id: cert.id,
                        certificate_type: cert.certificate_type.clone(),
                        valid_until: cert.valid_until,
                        status,
                    },
                    status,
                )
            })
    });

    rank_alerts(entries).into_iter().map(|(alert, _)| alert).collect()
}
