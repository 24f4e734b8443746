//! Read-only employee roster loaded from a JSON seed file
//!
//! Records are validated once at startup; a malformed record aborts the
//! load and names the employee it belongs to.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context};
use shared::{Employee, EmployeeRecord};
use uuid::Uuid;

/// Immutable roster shared by all requests
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    employees: Vec<Employee>,
}

impl RosterStore {
    pub fn new(employees: Vec<Employee>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for employee in &employees {
            if !seen.insert(employee.id) {
                bail!("Duplicate employee id in roster: {}", employee.id);
            }
        }
        Ok(Self { employees })
    }

    /// Load and validate the roster at `path`
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster seed {}", path.display()))?;

        let store = Self::from_json(&raw)
            .with_context(|| format!("Invalid roster seed {}", path.display()))?;

        tracing::info!(
            employees = store.employees.len(),
            certificates = store.certificate_count(),
            "Roster loaded from {}",
            path.display()
        );

        Ok(store)
    }

    /// Parse and validate a JSON array of employee records
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let records: Vec<EmployeeRecord> =
            serde_json::from_str(raw).context("Roster is not a JSON array of employees")?;

        let employees = records
            .into_iter()
            .map(Employee::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(employees)
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn find(&self, id: Uuid) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn certificate_count(&self) -> usize {
        self.employees.iter().map(|e| e.certificates.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = include_str!("../seed/roster.json");

    #[test]
    fn test_bundled_seed_is_valid() {
        let store = RosterStore::from_json(SEED).unwrap();
        assert_eq!(store.len(), 9);
        assert_eq!(store.certificate_count(), 9);
    }

    #[test]
    fn test_find_by_id() {
        let store = RosterStore::from_json(SEED).unwrap();
        let first = store.employees()[0].clone();

        assert_eq!(store.find(first.id), Some(&first));
        assert!(store.find(Uuid::nil()).is_none());
    }

    #[test]
    fn test_missing_valid_until_names_employee() {
        let raw = r#"[{
            "id": "0b6f4d0e-32f1-4a44-8a7a-1d2b3c4d5e6f",
            "name": "Kees van Dam",
            "email": "kees.vandam@bouwbedrijf.nl",
            "phone": "06-98765432",
            "certificates": [{
                "id": "6f1c2a56-8a0e-4d43-9a55-3c1f0c0b7a11",
                "certificate_type": "VCA VOL",
                "certificate_number": "VCA-VOL-2023-000003",
                "issuer": "SSVV",
                "valid_from": "2023-02-14"
            }]
        }]"#;

        let err = RosterStore::from_json(raw).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("0b6f4d0e-32f1-4a44-8a7a-1d2b3c4d5e6f"), "{}", message);
        assert!(message.contains("valid_until"), "{}", message);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let store = RosterStore::from_json(SEED).unwrap();
        let mut employees = store.employees().to_vec();
        employees.push(employees[0].clone());

        assert!(RosterStore::new(employees).is_err());
    }

    #[test]
    fn test_not_an_array() {
        assert!(RosterStore::from_json("{}").is_err());
    }
}
