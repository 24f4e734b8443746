//! Roster view tests
//!
//! Dashboard figures, list search/filter and the alerts feed over a small
//! construction-company roster, seen on 2026-02-18.

use chrono::NaiveDate;
use proptest::prelude::*;
use shared::{
    alerts_feed, filter_roster, summarize, Certificate, CertificateState, CertificateType,
    Employee, Priority, RosterQuery, StatusFilter,
};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2026, 2, 18)
}

fn certificate(kind: &str, valid_from: NaiveDate, valid_until: NaiveDate) -> Certificate {
    Certificate::new(
        Uuid::new_v4(),
        CertificateType::from(kind),
        format!("VCA-{}", valid_from.format("%Y%m%d")),
        "SSVV",
        valid_from,
        valid_until,
    )
    .unwrap()
}

fn employee(name: &str, certificates: Vec<Certificate>) -> Employee {
    Employee {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@bouwbedrijf.nl", name.to_lowercase().replace(' ', ".")),
        phone: "06-12345678".to_string(),
        company: "Bouwbedrijf Janssen B.V.".to_string(),
        certificates,
    }
}

fn single(name: &str, kind: &str, valid_until: NaiveDate) -> Employee {
    employee(name, vec![certificate(kind, date(2023, 1, 1), valid_until)])
}

fn roster() -> Vec<Employee> {
    vec![
        employee(
            "Peter Janssen",
            vec![
                certificate("VCA VOL", date(2023, 3, 18), date(2026, 3, 18)),
                certificate("VCA BASIS", date(2021, 3, 18), date(2024, 3, 18)),
            ],
        ),
        single("Maria de Groot", "VCA BASIS", date(2026, 4, 5)),
        single("Kees van Dam", "VCA VOL", date(2026, 2, 14)),
        single("Linda Smits", "VCA BASIS", date(2026, 8, 22)),
        single("Tom Vermeer", "VCA VOL", date(2027, 1, 10)),
        single("Annelies Bakker", "VCA VOL", date(2027, 3, 25)),
        single("Roel Hendriks", "VCA BASIS", date(2026, 11, 8)),
        single("Sandra Pietersen", "VCA VOL Petrochemie", date(2027, 6, 15)),
        employee("Jan de Vries", vec![]),
    ]
}

fn names(employees: &[&Employee]) -> Vec<String> {
    employees.iter().map(|e| e.name.clone()).collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Dashboard counts employees by their current certificate
    #[test]
    fn test_dashboard_summary() {
        let summary = summarize(&roster(), today());

        assert_eq!(summary.total_employees, 9);
        assert_eq!(summary.certified, 5);
        assert_eq!(summary.expiring_soon, 2);
        assert_eq!(summary.expired, 1);
        assert_eq!(summary.uncertified, 1);
        assert_eq!(summary.total_certificates, 9);
        // 5 of 9 certificates valid
        assert_eq!(summary.compliance_rate, 56);
    }

    /// An empty roster reads as fully compliant
    #[test]
    fn test_dashboard_empty_roster() {
        let summary = summarize(&[], today());

        assert_eq!(summary.total_employees, 0);
        assert_eq!(summary.total_certificates, 0);
        assert_eq!(summary.compliance_rate, 100);
    }

    /// The alerts feed covers every certificate, superseded ones included
    #[test]
    fn test_alerts_feed_order() {
        let alerts = alerts_feed(&roster(), today());
        let rows: Vec<(String, i64)> = alerts
            .iter()
            .map(|a| (a.employee_name.clone(), a.status.days_left))
            .collect();

        assert_eq!(
            rows,
            vec![
                ("Peter Janssen".to_string(), -702),
                ("Kees van Dam".to_string(), -4),
                ("Peter Janssen".to_string(), 28),
                ("Maria de Groot".to_string(), 46),
            ]
        );
        assert_eq!(alerts[0].certificate_type, CertificateType::VcaBasis);
        assert_eq!(alerts[2].status.priority, Some(Priority::High));
        assert_eq!(alerts[3].status.priority, Some(Priority::Medium));
    }

    /// No alerts when everything is valid
    #[test]
    fn test_alerts_feed_empty() {
        let roster = vec![single("Tom Vermeer", "VCA VOL", date(2027, 1, 10))];
        assert!(alerts_feed(&roster, today()).is_empty());
    }

    /// Search matches names case-insensitively
    #[test]
    fn test_search_by_name() {
        let roster = roster();
        let query = RosterQuery {
            search: Some("JANS".to_string()),
            status: StatusFilter::All,
        };

        assert_eq!(names(&filter_roster(&roster, &query, today())), vec!["Peter Janssen"]);
    }

    /// Search matches any held certificate type
    #[test]
    fn test_search_by_certificate_type() {
        let roster = roster();
        let query = RosterQuery {
            search: Some("basis".to_string()),
            status: StatusFilter::All,
        };

        assert_eq!(
            names(&filter_roster(&roster, &query, today())),
            vec!["Peter Janssen", "Maria de Groot", "Linda Smits", "Roel Hendriks"]
        );
    }

    /// Status filter applies to the headline status
    #[test]
    fn test_status_filters() {
        let roster = roster();
        let run = |status| {
            let query = RosterQuery { search: None, status };
            names(&filter_roster(&roster, &query, today()))
        };

        assert_eq!(run(StatusFilter::Expired), vec!["Kees van Dam"]);
        assert_eq!(run(StatusFilter::ExpiringSoon), vec!["Peter Janssen", "Maria de Groot"]);
        assert_eq!(run(StatusFilter::Valid).len(), 5);
        assert_eq!(run(StatusFilter::All).len(), 9);
    }

    /// Search and filter combine
    #[test]
    fn test_search_and_filter() {
        let roster = roster();
        let query = RosterQuery {
            search: Some("vca vol".to_string()),
            status: StatusFilter::Valid,
        };

        assert_eq!(
            names(&filter_roster(&roster, &query, today())),
            vec!["Tom Vermeer", "Annelies Bakker", "Sandra Pietersen"]
        );
    }

    /// Blank search is no search
    #[test]
    fn test_blank_search() {
        let roster = roster();
        let query = RosterQuery {
            search: Some("   ".to_string()),
            status: StatusFilter::All,
        };
        assert_eq!(filter_roster(&roster, &query, today()).len(), 9);
    }

    /// Filter chips parse from English and Dutch keys
    #[test]
    fn test_status_filter_parsing() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!("".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!("geldig".parse::<StatusFilter>(), Ok(StatusFilter::Valid));
        assert_eq!(
            "verloopt_binnenkort".parse::<StatusFilter>(),
            Ok(StatusFilter::ExpiringSoon)
        );
        assert_eq!("EXPIRED".parse::<StatusFilter>(), Ok(StatusFilter::Expired));
        assert!("pending".parse::<StatusFilter>().is_err());
    }

    /// Headline status moves as the day advances
    #[test]
    fn test_headline_recomputed_per_day() {
        let kees = single("Kees van Dam", "VCA VOL", date(2026, 2, 14));

        let before = kees.headline_status(date(2026, 2, 1)).unwrap();
        let after = kees.headline_status(today()).unwrap();

        assert_eq!(before.state, CertificateState::ExpiringSoon);
        assert_eq!(after.state, CertificateState::Expired);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for a roster of single-certificate employees
    fn roster_strategy() -> impl Strategy<Value = Vec<Employee>> {
        prop::collection::vec(-400i64..=800, 0..25).prop_map(|offsets| {
            offsets
                .into_iter()
                .enumerate()
                .map(|(i, offset)| {
                    single(
                        &format!("Medewerker {}", i),
                        "VCA VOL",
                        today() + chrono::Duration::days(offset),
                    )
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Headline counts partition the roster
        #[test]
        fn prop_summary_partitions_roster(roster in roster_strategy()) {
            let s = summarize(&roster, today());
            prop_assert_eq!(
                s.certified + s.expiring_soon + s.expired + s.uncertified,
                s.total_employees
            );
        }

        /// Status filters partition the certified roster
        #[test]
        fn prop_filters_partition(roster in roster_strategy()) {
            let count = |status| {
                filter_roster(&roster, &RosterQuery { search: None, status }, today()).len()
            };
            prop_assert_eq!(
                count(StatusFilter::Valid) + count(StatusFilter::ExpiringSoon) + count(StatusFilter::Expired),
                count(StatusFilter::All)
            );
        }

        /// Alerts feed never lists a valid certificate
        #[test]
        fn prop_alerts_feed_only_alerts(roster in roster_strategy()) {
            let alerts = alerts_feed(&roster, today());
            prop_assert!(alerts.iter().all(|a| a.status.state != CertificateState::Valid));
        }
    }
}
