//! Employee models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::RecordError;
use crate::models::{Certificate, CertificateRecord};
use crate::status::StatusClassification;
use crate::validation::{validate_dutch_phone_field, validate_not_blank};

/// An employee whose VCA passes are tracked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "EmployeeRecord")]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub certificates: Vec<Certificate>,
}

impl Employee {
    /// The certificate that expires last, i.e. the pass the employee works on
    ///
    /// Ties go to the certificate listed first.
    pub fn current_certificate(&self) -> Option<&Certificate> {
        self.certificates
            .iter()
            .reduce(|best, cert| if cert.valid_until > best.valid_until { cert } else { best })
    }

    /// Status shown on the employee's list badge
    pub fn headline_status(&self, today: NaiveDate) -> Option<StatusClassification> {
        self.current_certificate().map(|cert| cert.status_at(today))
    }

    /// Every certificate paired with its status, in holding order
    pub fn certificate_statuses(
        &self,
        today: NaiveDate,
    ) -> Vec<(&Certificate, StatusClassification)> {
        self.certificates
            .iter()
            .map(|cert| (cert, cert.status_at(today)))
            .collect()
    }

    /// First letter of the name, used for the avatar
    pub fn initial(&self) -> Option<char> {
        self.name.trim().chars().next().map(|c| c.to_ascii_uppercase())
    }
}

/// Employee as delivered by an upstream store
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmployeeRecord {
    pub id: Uuid,
    #[validate(custom = "validate_not_blank")]
    #[serde(alias = "naam")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(custom = "validate_dutch_phone_field")]
    #[serde(alias = "telefoon")]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub certificates: Vec<CertificateRecord>,
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = RecordError;

    fn try_from(record: EmployeeRecord) -> Result<Self, Self::Error> {
        record.validate().map_err(|source| RecordError::Contact {
            employee_id: record.id,
            source,
        })?;

        let certificates = record
            .certificates
            .into_iter()
            .map(Certificate::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| RecordError::Certificate {
                employee_id: record.id,
                source,
            })?;

        Ok(Employee {
            id: record.id,
            name: record.name.trim().to_string(),
            email: record.email,
            phone: record.phone,
            company: record.company,
            certificates,
        })
    }
}
