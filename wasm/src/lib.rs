//! WebAssembly module for VCA Paspoort
//!
//! Provides client-side computation for:
//! - Certificate status classification
//! - Alert ranking and compliance rate
//! - Countdown copy for alert rows
//! - QR pass links and scan interpretation
//!
//! Structured values cross the boundary as JSON strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{Clock, Language, StatusClassification, SystemClock};
use uuid::Uuid;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::status::*;

/// An arbitrary caller item paired with its classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankEntry {
    pub item: serde_json::Value,
    pub status: StatusClassification,
}

/// Classify an expiry date; `today` defaults to the device's local date
#[wasm_bindgen]
pub fn classify_certificate(
    valid_until: Option<String>,
    today: Option<String>,
) -> Result<String, JsValue> {
    classify_json(valid_until.as_deref(), today.as_deref()).map_err(to_js_error)
}

/// Rank a JSON array of `{ item, status }` entries, most urgent first
#[wasm_bindgen]
pub fn rank_alerts_json(entries_json: &str) -> Result<String, JsValue> {
    rank_json(entries_json).map_err(to_js_error)
}

/// Compliance percentage for a JSON array of classifications
#[wasm_bindgen]
pub fn compliance_rate_json(statuses_json: &str) -> Result<u8, JsValue> {
    compliance_json(statuses_json).map_err(to_js_error)
}

/// Countdown copy for a day count in "nl" or "en"
#[wasm_bindgen]
pub fn describe_days_left(days_left: i32, lang: &str) -> String {
    StatusClassification::from_days_left(days_left.into()).describe(Language::from_code(lang))
}

/// Interpret a decoded QR payload
#[wasm_bindgen]
pub fn interpret_scan_payload(payload: &str) -> String {
    let outcome = shared::interpret_scan(payload);
    serde_json::to_string(&outcome).unwrap_or_default()
}

/// Public pass link for an employee id
#[wasm_bindgen]
pub fn employee_pass_link(employee_id: &str) -> Result<String, JsValue> {
    Uuid::parse_str(employee_id.trim())
        .map(shared::pass_link)
        .map_err(|e| to_js_error(format!("Invalid employee id: {}", e)))
}

fn classify_json(valid_until: Option<&str>, today: Option<&str>) -> Result<String, String> {
    let today = shared::parse_certificate_date("today", today)
        .map_err(|e| e.to_string())?
        .unwrap_or_else(device_today);

    let status = shared::classify_raw(valid_until, today).map_err(|e| e.to_string())?;
    serde_json::to_string(&status).map_err(|e| e.to_string())
}

fn rank_json(entries_json: &str) -> Result<String, String> {
    let entries: Vec<RankEntry> = serde_json::from_str(entries_json)
        .map_err(|e| format!("Invalid entries JSON: {}", e))?;

    let ranked: Vec<RankEntry> = shared::rank_alerts(entries.into_iter().map(|e| (e.item, e.status)))
        .into_iter()
        .map(|(item, status)| RankEntry { item, status })
        .collect();

    serde_json::to_string(&ranked).map_err(|e| e.to_string())
}

fn compliance_json(statuses_json: &str) -> Result<u8, String> {
    let statuses: Vec<StatusClassification> = serde_json::from_str(statuses_json)
        .map_err(|e| format!("Invalid statuses JSON: {}", e))?;
    Ok(shared::compliance_rate(&statuses))
}

#[cfg(target_arch = "wasm32")]
fn device_today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_else(|| SystemClock::default().today())
}

#[cfg(not(target_arch = "wasm32"))]
fn device_today() -> NaiveDate {
    SystemClock::default().today()
}

fn to_js_error(message: impl Into<String>) -> JsValue {
    let value = JsValue::from_str(&message.into());
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&value);
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_json() {
        let json = classify_json(Some("2026-03-18"), Some("2026-02-18")).unwrap();
        let status: StatusClassification = serde_json::from_str(&json).unwrap();

        assert_eq!(status.days_left, 28);
        assert_eq!(status.priority, Some(Priority::High));
        assert!(json.contains("\"state\":\"expiring_soon\""));
    }

    #[test]
    fn test_classify_json_errors() {
        assert!(classify_json(None, Some("2026-02-18")).unwrap_err().contains("valid_until"));
        assert!(classify_json(Some("18-03-2026"), None).is_err());
        assert!(classify_json(Some("2026-03-18"), Some("morgen")).unwrap_err().contains("today"));
    }

    #[test]
    fn test_classify_json_defaults_today() {
        assert!(classify_json(Some("2026-03-18"), None).is_ok());
        assert!(classify_json(Some("2026-03-18"), Some("")).is_ok());
    }

    #[test]
    fn test_rank_json_keeps_items() {
        let entries = r#"[
            {"item": "linda", "status": {"days_left": 186, "state": "valid", "priority": null}},
            {"item": "peter", "status": {"days_left": 28, "state": "expiring_soon", "priority": "high"}},
            {"item": {"id": 3}, "status": {"days_left": -4, "state": "expired", "priority": "critical"}}
        ]"#;

        let ranked: Vec<RankEntry> = serde_json::from_str(&rank_json(entries).unwrap()).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].item, serde_json::json!({"id": 3}));
        assert_eq!(ranked[1].item, serde_json::json!("peter"));
    }

    #[test]
    fn test_compliance_json() {
        let statuses = r#"[
            {"days_left": 186, "state": "valid", "priority": null},
            {"days_left": -4, "state": "expired", "priority": "critical"}
        ]"#;

        assert_eq!(compliance_json(statuses).unwrap(), 50);
        assert_eq!(compliance_json("[]").unwrap(), 100);
        assert!(compliance_json("{}").is_err());
    }

    #[test]
    fn test_describe_days_left() {
        assert_eq!(describe_days_left(28, "nl"), "Verloopt over 28 dagen");
        assert_eq!(describe_days_left(-4, "en"), "Expired 4 days ago");
        assert_eq!(describe_days_left(0, "nl"), "Verloopt vandaag");
    }

    #[test]
    fn test_interpret_scan_payload() {
        let id = "0b6f4d0e-32f1-4a44-8a7a-1d2b3c4d5e6f";
        let link = shared::pass_link(Uuid::parse_str(id).unwrap());

        let json = interpret_scan_payload(&link);
        assert!(json.contains("\"kind\":\"pass\""));
        assert!(json.contains(id));
        assert_eq!(interpret_scan_payload("hello"), r#"{"kind":"unrecognized"}"#);
    }
}
