//! Certificate models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::InvalidCertificateError;
use crate::status::{classify, parse_certificate_date, StatusClassification};

/// A safety certificate held by an employee
///
/// Deserializing goes through [`CertificateRecord`], so a `Certificate`
/// always has a parsed validity window with `valid_until > valid_from`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "CertificateRecord")]
pub struct Certificate {
    pub id: Uuid,
    pub certificate_type: CertificateType,
    pub certificate_number: String,
    pub issuer: String,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
}

impl Certificate {
    pub fn new(
        id: Uuid,
        certificate_type: CertificateType,
        certificate_number: impl Into<String>,
        issuer: impl Into<String>,
        valid_from: NaiveDate,
        valid_until: NaiveDate,
    ) -> Result<Self, InvalidCertificateError> {
        if valid_until <= valid_from {
            return Err(InvalidCertificateError::InvalidValidityWindow {
                valid_from,
                valid_until,
            });
        }

        Ok(Self {
            id,
            certificate_type,
            certificate_number: certificate_number.into(),
            issuer: issuer.into(),
            valid_from,
            valid_until,
        })
    }

    /// Status of this certificate as seen on `today`
    pub fn status_at(&self, today: NaiveDate) -> StatusClassification {
        classify(self.valid_until, today)
    }
}

/// Certificate as delivered by an upstream store, dates still unparsed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub id: Uuid,
    #[serde(alias = "type")]
    pub certificate_type: CertificateType,
    #[serde(alias = "certificaat_nummer")]
    pub certificate_number: String,
    #[serde(alias = "uitgever")]
    pub issuer: String,
    #[serde(default, alias = "geldig_van")]
    pub valid_from: Option<String>,
    #[serde(default, alias = "geldig_tot")]
    pub valid_until: Option<String>,
}

impl TryFrom<CertificateRecord> for Certificate {
    type Error = InvalidCertificateError;

    fn try_from(record: CertificateRecord) -> Result<Self, Self::Error> {
        // valid_until is checked first; it is the field classification depends on
        let valid_until = parse_certificate_date("valid_until", record.valid_until.as_deref())?
            .ok_or(InvalidCertificateError::MissingValidUntil)?;
        let valid_from = parse_certificate_date("valid_from", record.valid_from.as_deref())?
            .ok_or(InvalidCertificateError::MissingValidFrom)?;

        Certificate::new(
            record.id,
            record.certificate_type,
            record.certificate_number,
            record.issuer,
            valid_from,
            valid_until,
        )
    }
}

/// Kind of VCA certificate
///
/// Labels outside the known set are kept verbatim as `Custom`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum CertificateType {
    VcaBasis,
    VcaVol,
    VcaVolPetrochemie,
    Custom(String),
}

impl CertificateType {
    pub fn label(&self) -> &str {
        match self {
            CertificateType::VcaBasis => "VCA BASIS",
            CertificateType::VcaVol => "VCA VOL",
            CertificateType::VcaVolPetrochemie => "VCA VOL Petrochemie",
            CertificateType::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for CertificateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<String> for CertificateType {
    fn from(label: String) -> Self {
        let normalized = label
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_uppercase();

        match normalized.as_str() {
            "VCA BASIS" | "B-VCA" => CertificateType::VcaBasis,
            "VCA VOL" | "VOL-VCA" => CertificateType::VcaVol,
            "VCA VOL PETROCHEMIE" | "VCA-P" => CertificateType::VcaVolPetrochemie,
            _ => CertificateType::Custom(label),
        }
    }
}

impl From<&str> for CertificateType {
    fn from(label: &str) -> Self {
        CertificateType::from(label.to_string())
    }
}

impl From<CertificateType> for String {
    fn from(certificate_type: CertificateType) -> Self {
        match certificate_type {
            CertificateType::Custom(name) => name,
            known => known.label().to_string(),
        }
    }
}
