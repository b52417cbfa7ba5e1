//! Draft ticket and submission payload

use crate::models::Employee;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Managers a ticket can be reported to.
pub const REPORTING_MANAGERS: [&str; 4] = ["Murugan R", "Venkatesan K", "Nagarajan M", "Rajkumar"];

/// Ticket being composed by the user. An empty `reporting_to` means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftTicket {
    pub issue_text: String,
    pub reporting_to: String,
}

impl DraftTicket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that a ticket may be submitted for the given employee snapshot.
    ///
    /// Checks run in a fixed order and the first failure wins.
    pub fn validate_for(&self, employee: Option<&Employee>) -> Result<()> {
        if employee.is_none() {
            return Err(Error::Validation(
                "Please enter a valid employee.".to_string(),
            ));
        }

        if self.issue_text.trim().is_empty() {
            return Err(Error::Validation(
                "Please describe the issue before submitting.".to_string(),
            ));
        }

        if self.reporting_to.trim().is_empty() {
            return Err(Error::Validation(
                "Please select who you're reporting to.".to_string(),
            ));
        }

        Ok(())
    }

    /// Select the next (or previous) manager from [`REPORTING_MANAGERS`].
    ///
    /// An unset or unknown value moves to the first entry going forward and
    /// the last entry going backward.
    pub fn cycle_reporting_to(&mut self, forward: bool) {
        let len = REPORTING_MANAGERS.len();
        let current = REPORTING_MANAGERS
            .iter()
            .position(|name| *name == self.reporting_to);

        let next = match (current, forward) {
            (Some(idx), true) => (idx + 1) % len,
            (Some(idx), false) => (idx + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };

        self.reporting_to = REPORTING_MANAGERS[next].to_string();
    }

    pub fn clear(&mut self) {
        self.issue_text.clear();
        self.reporting_to.clear();
    }
}

/// Body of `POST /api/tickets`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketSubmission {
    pub emp_id: String,
    pub username: String,
    pub full_name: String,
    pub department: String,
    pub reporting_to: String,
    pub issue_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl TicketSubmission {
    /// Build the payload from a validated draft.
    pub fn new(employee: &Employee, draft: &DraftTicket, ip_address: Option<String>) -> Self {
        Self {
            emp_id: employee.emp_id.clone(),
            username: employee.username.clone(),
            full_name: employee.full_name.clone(),
            department: employee.department.clone(),
            reporting_to: draft.reporting_to.clone(),
            issue_text: draft.issue_text.clone(),
            ip_address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> Employee {
        Employee {
            emp_id: "EMP-1001".to_string(),
            username: "prainila".to_string(),
            full_name: "Prainila S".to_string(),
            department: "IT".to_string(),
            reporting_to: Some("Murugan R".to_string()),
        }
    }

    fn filled_draft() -> DraftTicket {
        DraftTicket {
            issue_text: "Printer offline".to_string(),
            reporting_to: "Rajkumar".to_string(),
        }
    }

    #[test]
    fn test_validate_requires_employee() {
        let err = filled_draft().validate_for(None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Please enter a valid employee."
        );
    }

    #[test]
    fn test_validate_rejects_blank_issue() {
        let mut draft = filled_draft();
        draft.issue_text = "   \n\t".to_string();
        let emp = employee();
        match draft.validate_for(Some(&emp)) {
            Err(Error::Validation(msg)) => {
                assert_eq!(msg, "Please describe the issue before submitting.")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_unset_manager() {
        let mut draft = filled_draft();
        draft.reporting_to.clear();
        let emp = employee();
        match draft.validate_for(Some(&emp)) {
            Err(Error::Validation(msg)) => assert_eq!(msg, "Please select who you're reporting to."),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_employee_checked_before_fields() {
        let draft = DraftTicket::new();
        match draft.validate_for(None) {
            Err(Error::Validation(msg)) => assert_eq!(msg, "Please enter a valid employee."),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_ok() {
        let emp = employee();
        assert!(filled_draft().validate_for(Some(&emp)).is_ok());
    }

    #[test]
    fn test_cycle_reporting_to_wraps() {
        let mut draft = DraftTicket::new();
        draft.cycle_reporting_to(true);
        assert_eq!(draft.reporting_to, "Murugan R");

        draft.cycle_reporting_to(false);
        assert_eq!(draft.reporting_to, "Rajkumar");

        draft.cycle_reporting_to(true);
        assert_eq!(draft.reporting_to, "Murugan R");
    }

    #[test]
    fn test_cycle_from_unknown_manager() {
        let mut draft = DraftTicket {
            issue_text: String::new(),
            reporting_to: "Someone Else".to_string(),
        };
        draft.cycle_reporting_to(false);
        assert_eq!(draft.reporting_to, "Rajkumar");
    }

    #[test]
    fn test_submission_omits_missing_ip() {
        let submission = TicketSubmission::new(&employee(), &filled_draft(), None);
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("ip_address").is_none());
        assert_eq!(json["emp_id"], "EMP-1001");
        assert_eq!(json["reporting_to"], "Rajkumar");
        assert_eq!(json["issue_text"], "Printer offline");
    }

    #[test]
    fn test_submission_includes_ip() {
        let submission =
            TicketSubmission::new(&employee(), &filled_draft(), Some("10.0.0.5".to_string()));
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["ip_address"], "10.0.0.5");
    }
}
