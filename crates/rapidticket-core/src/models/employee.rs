//! Employee snapshot returned by the lookup endpoint

use serde::{Deserialize, Serialize};

/// Read-only copy of an employee record. Replaced wholesale on every
/// successful lookup and never edited client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub emp_id: String,
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub reporting_to: Option<String>,
}

impl Employee {
    /// Default manager to seed the reporting-to field with, if the backend
    /// supplied a non-blank one.
    pub fn default_manager(&self) -> Option<&str> {
        self.reporting_to
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "emp_id": "EMP-1001",
            "username": "prainila",
            "full_name": "Prainila S",
            "department": "IT",
            "reporting_to": "Murugan R"
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.emp_id, "EMP-1001");
        assert_eq!(employee.default_manager(), Some("Murugan R"));
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let json = r#"{"emp_id": "EMP-7", "username": "raj", "full_name": "Raj"}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.department.is_empty());
        assert!(employee.reporting_to.is_none());
        assert_eq!(employee.default_manager(), None);
    }

    #[test]
    fn test_blank_manager_is_ignored() {
        let json = r#"{"emp_id": "EMP-7", "username": "raj", "full_name": "Raj", "reporting_to": "  "}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.default_manager(), None);
    }

    #[test]
    fn test_null_manager() {
        let json = r#"{"emp_id": "EMP-7", "username": "raj", "full_name": "Raj", "reporting_to": null}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.reporting_to.is_none());
    }
}
