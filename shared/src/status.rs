//! Certificate status engine
//!
//! The single source of truth for how a certificate's validity window maps
//! to a lifecycle state, a signed day count and an alert priority. Every
//! consumer (backend, WASM bindings, roster views) goes through here so the
//! 30/60/90 day policy is applied identically everywhere.
//!
//! All functions are pure: no clock is read, `today` is always passed in.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::InvalidCertificateError;
use crate::types::Language;

/// Certificates expiring within this many days are `ExpiringSoon`
pub const EXPIRING_SOON_DAYS: i64 = 90;

/// Upper bound (inclusive) of the `Medium` priority band
pub const MEDIUM_PRIORITY_DAYS: i64 = 60;

/// Upper bound (inclusive) of the `High` priority band
pub const HIGH_PRIORITY_DAYS: i64 = 30;

/// Horizon used for the validity progress bar
pub const PROGRESS_HORIZON_DAYS: i64 = 365;

/// Date format used on the wire
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lifecycle state of a certificate on a given day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CertificateState {
    Valid,
    /// Within 90 days of expiration, including the expiry day itself
    ExpiringSoon,
    Expired,
}

impl CertificateState {
    pub fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (CertificateState::Valid, Language::Dutch) => "Geldig",
            (CertificateState::ExpiringSoon, Language::Dutch) => "Verloopt binnenkort",
            (CertificateState::Expired, Language::Dutch) => "Verlopen",
            (CertificateState::Valid, Language::English) => "Valid",
            (CertificateState::ExpiringSoon, Language::English) => "Expiring soon",
            (CertificateState::Expired, Language::English) => "Expired",
        }
    }
}

impl std::fmt::Display for CertificateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(Language::English))
    }
}

impl std::str::FromStr for CertificateState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "valid" | "geldig" => Ok(CertificateState::Valid),
            "expiring_soon" | "verloopt_binnenkort" => Ok(CertificateState::ExpiringSoon),
            "expired" | "verlopen" => Ok(CertificateState::Expired),
            other => Err(format!("Unknown certificate state: {}", other)),
        }
    }
}

/// Alert priority, ordered from least to most urgent
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Priority::Critical, Language::Dutch) => "Kritiek",
            (Priority::High, Language::Dutch) => "Hoog",
            (Priority::Medium, Language::Dutch) => "Medium",
            (Priority::Low, Language::Dutch) => "Laag",
            (Priority::Critical, Language::English) => "Critical",
            (Priority::High, Language::English) => "High",
            (Priority::Medium, Language::English) => "Medium",
            (Priority::Low, Language::English) => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(Language::English))
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" | "kritiek" => Ok(Priority::Critical),
            "high" | "hoog" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" | "laag" => Ok(Priority::Low),
            other => Err(format!("Unknown priority: {}", other)),
        }
    }
}

/// Status of one certificate relative to one day
///
/// Ephemeral: recompute whenever `today` or `valid_until` changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusClassification {
    /// `valid_until - today` in whole days, negative once expired
    pub days_left: i64,
    pub state: CertificateState,
    /// `None` for valid certificates, which are not alertable
    pub priority: Option<Priority>,
}

impl StatusClassification {
    /// Classification for a certificate `days_left` days from expiry
    pub fn from_days_left(days_left: i64) -> Self {
        let state = if days_left < 0 {
            CertificateState::Expired
        } else if days_left <= EXPIRING_SOON_DAYS {
            CertificateState::ExpiringSoon
        } else {
            CertificateState::Valid
        };

        let priority = match state {
            CertificateState::Expired => Some(Priority::Critical),
            CertificateState::ExpiringSoon => Some(match days_left {
                d if d <= HIGH_PRIORITY_DAYS => Priority::High,
                d if d <= MEDIUM_PRIORITY_DAYS => Priority::Medium,
                _ => Priority::Low,
            }),
            CertificateState::Valid => None,
        };

        Self {
            days_left,
            state,
            priority,
        }
    }

    pub fn is_alert(&self) -> bool {
        self.state != CertificateState::Valid
    }

    /// Fraction of the one-year horizon still remaining, in `0.0..=1.0`
    pub fn remaining_fraction(&self) -> f64 {
        let fraction = self.days_left as f64 / PROGRESS_HORIZON_DAYS as f64;
        fraction.clamp(0.0, 1.0)
    }

    /// Countdown copy for alert rows
    pub fn describe(&self, lang: Language) -> String {
        let days = self.days_left.unsigned_abs();
        match (lang, self.days_left.signum()) {
            (Language::Dutch, -1) => format!("{} {} geleden verlopen", days, dutch_days(days)),
            (Language::Dutch, 0) => "Verloopt vandaag".to_string(),
            (Language::Dutch, _) => format!("Verloopt over {} {}", days, dutch_days(days)),
            (Language::English, -1) => format!("Expired {} {} ago", days, english_days(days)),
            (Language::English, 0) => "Expires today".to_string(),
            (Language::English, _) => format!("Expires in {} {}", days, english_days(days)),
        }
    }

    /// Compact badge used on dashboard cards
    pub fn short_label(&self) -> String {
        if self.days_left < 0 {
            format!("{}d verlopen", self.days_left.unsigned_abs())
        } else {
            format!("{}d resterend", self.days_left)
        }
    }
}

fn dutch_days(days: u64) -> &'static str {
    if days == 1 {
        "dag"
    } else {
        "dagen"
    }
}

fn english_days(days: u64) -> &'static str {
    if days == 1 {
        "day"
    } else {
        "days"
    }
}

/// Classify a certificate expiring on `valid_until` as seen on `today`
pub fn classify(valid_until: NaiveDate, today: NaiveDate) -> StatusClassification {
    StatusClassification::from_days_left((valid_until - today).num_days())
}

/// Classify a possibly missing expiry date, failing fast when it is absent
pub fn classify_checked(
    valid_until: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<StatusClassification, InvalidCertificateError> {
    let valid_until = valid_until.ok_or(InvalidCertificateError::MissingValidUntil)?;
    Ok(classify(valid_until, today))
}

/// Classify a textual `YYYY-MM-DD` expiry date
pub fn classify_raw(
    valid_until: Option<&str>,
    today: NaiveDate,
) -> Result<StatusClassification, InvalidCertificateError> {
    let valid_until = parse_certificate_date("valid_until", valid_until)?
        .ok_or(InvalidCertificateError::MissingValidUntil)?;
    Ok(classify(valid_until, today))
}

/// Parse an optional wire date; blank strings count as missing
pub fn parse_certificate_date(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, InvalidCertificateError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Some)
            .map_err(|_| InvalidCertificateError::UnparsableDate {
                field,
                value: value.to_string(),
            }),
    }
}

/// Order alertable entries by urgency
///
/// Valid entries are dropped. The rest are sorted by priority (critical
/// first), then by `days_left` ascending. The sort is stable, so entries
/// that tie on both keep their input order.
pub fn rank_alerts<T>(
    entries: impl IntoIterator<Item = (T, StatusClassification)>,
) -> Vec<(T, StatusClassification)> {
    let mut alerts: Vec<_> = entries
        .into_iter()
        .filter(|(_, status)| status.is_alert())
        .collect();

    alerts.sort_by(|(_, a), (_, b)| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.days_left.cmp(&b.days_left))
    });

    alerts
}

/// Percentage of certificates currently valid, rounded to a whole percent
///
/// An empty collection is vacuously fully compliant and yields `100`.
pub fn compliance_rate(classifications: &[StatusClassification]) -> u8 {
    if classifications.is_empty() {
        return 100;
    }

    let valid = classifications
        .iter()
        .filter(|c| c.state == CertificateState::Valid)
        .count();

    let rate = Decimal::from(valid as u64 * 100) / Decimal::from(classifications.len() as u64);
    rate.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(0)
}
