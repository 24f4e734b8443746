//! Error types for certificate and employee records

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// A certificate record that cannot be classified
///
/// Raised synchronously when the validity window is missing or malformed.
/// This is a data-integrity problem upstream and is never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidCertificateError {
    #[error("Certificate has no valid_until date")]
    MissingValidUntil,

    #[error("Certificate has no valid_from date")]
    MissingValidFrom,

    #[error("Certificate {field} is not a YYYY-MM-DD date: {value:?}")]
    UnparsableDate { field: &'static str, value: String },

    #[error("Certificate valid_until {valid_until} must be after valid_from {valid_from}")]
    InvalidValidityWindow {
        valid_from: NaiveDate,
        valid_until: NaiveDate,
    },
}

/// An employee record that cannot be turned into a domain [`crate::Employee`]
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Employee {employee_id}: {source}")]
    Certificate {
        employee_id: Uuid,
        #[source]
        source: InvalidCertificateError,
    },

    #[error("Employee {employee_id}: {source}")]
    Contact {
        employee_id: Uuid,
        #[source]
        source: validator::ValidationErrors,
    },
}
