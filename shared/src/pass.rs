//! VCA pass share links and QR payload interpretation
//!
//! Decoding the QR image happens on the device; this only reads the text
//! the camera produced.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Host serving the public pass pages
pub const PASS_HOST: &str = "vcapaspoort.nl";

const EMPLOYEE_SEGMENT: &str = "medewerker";

/// Public link to an employee's pass, as encoded in the QR code
pub fn pass_link(employee_id: Uuid) -> String {
    format!("https://{}/{}/{}/pas", PASS_HOST, EMPLOYEE_SEGMENT, employee_id)
}

/// What a scanned QR payload turned out to be
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// A pass link naming an employee
    Pass { employee_id: Uuid },
    /// Looks like a pass link but carries no readable employee id
    UnreadablePass,
    /// Not a VCA pass code
    Unrecognized,
}

/// Classify a decoded QR payload
pub fn interpret_scan(payload: &str) -> ScanOutcome {
    let payload = payload.trim();
    if !payload.contains(PASS_HOST) && !payload.contains(EMPLOYEE_SEGMENT) {
        return ScanOutcome::Unrecognized;
    }

    let marker = format!("{}/", EMPLOYEE_SEGMENT);
    payload
        .find(&marker)
        .map(|idx| &payload[idx + marker.len()..])
        .and_then(|rest| rest.split(['/', '?', '#']).next())
        .and_then(|segment| Uuid::parse_str(segment).ok())
        .map(|employee_id| ScanOutcome::Pass { employee_id })
        .unwrap_or(ScanOutcome::UnreadablePass)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "0b6f4d0e-32f1-4a44-8a7a-1d2b3c4d5e6f";

    #[test]
    fn test_pass_link_round_trips_through_scan() {
        let id = Uuid::parse_str(ID).unwrap();
        let link = pass_link(id);

        assert_eq!(link, format!("https://vcapaspoort.nl/medewerker/{}/pas", ID));
        assert_eq!(interpret_scan(&link), ScanOutcome::Pass { employee_id: id });
    }

    #[test]
    fn test_scan_without_host_or_trailing_path() {
        let id = Uuid::parse_str(ID).unwrap();
        assert_eq!(
            interpret_scan(&format!("medewerker/{}", ID)),
            ScanOutcome::Pass { employee_id: id }
        );
        assert_eq!(
            interpret_scan(&format!("https://vcapaspoort.nl/medewerker/{}?ref=qr", ID)),
            ScanOutcome::Pass { employee_id: id }
        );
    }

    #[test]
    fn test_scan_pass_host_without_id() {
        assert_eq!(
            interpret_scan("https://vcapaspoort.nl/over-ons"),
            ScanOutcome::UnreadablePass
        );
        assert_eq!(
            interpret_scan("https://vcapaspoort.nl/medewerker/42/pas"),
            ScanOutcome::UnreadablePass
        );
    }

    #[test]
    fn test_scan_foreign_code() {
        assert_eq!(interpret_scan("https://example.com/menu"), ScanOutcome::Unrecognized);
        assert_eq!(interpret_scan(""), ScanOutcome::Unrecognized);
    }
}
