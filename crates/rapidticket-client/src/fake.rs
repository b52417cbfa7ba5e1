//! In-memory [`TicketApi`] used by the unit tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rapidticket_core::models::{Employee, TicketSubmission};

use crate::api::TicketApi;
use crate::{Error, Result};

#[derive(Default)]
pub(crate) struct FakeApi {
    employees: HashMap<String, Employee>,
    delays: HashMap<String, Duration>,
    ip: Option<String>,
    submit_failure: Option<Option<String>>,
    lookups: Mutex<Vec<String>>,
    submissions: Mutex<Vec<TicketSubmission>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees
            .insert(employee.username.clone(), employee.clone());
        self.employees.insert(employee.emp_id.clone(), employee);
        self
    }

    pub fn with_delay(mut self, key: &str, delay: Duration) -> Self {
        self.delays.insert(key.to_string(), delay);
        self
    }

    pub fn with_ip(mut self, ip: &str) -> Self {
        self.ip = Some(ip.to_string());
        self
    }

    /// Make every submission fail, optionally with a backend message.
    pub fn with_submit_failure(mut self, message: Option<&str>) -> Self {
        self.submit_failure = Some(message.map(str::to_string));
        self
    }

    pub fn lookup_keys(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn submitted(&self) -> Vec<TicketSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

pub(crate) fn employee(emp_id: &str, username: &str, reporting_to: Option<&str>) -> Employee {
    Employee {
        emp_id: emp_id.to_string(),
        username: username.to_string(),
        full_name: format!("{} Full Name", username),
        department: "IT".to_string(),
        reporting_to: reporting_to.map(str::to_string),
    }
}

#[async_trait]
impl TicketApi for FakeApi {
    async fn fetch_ip(&self) -> Result<String> {
        self.ip.clone().ok_or(Error::Api {
            status: 503,
            message: None,
        })
    }

    async fn find_employee(&self, key: &str) -> Result<Employee> {
        self.lookups.lock().unwrap().push(key.to_string());

        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }

        self.employees
            .get(key)
            .cloned()
            .ok_or_else(|| Error::NotFound(key.to_string()))
    }

    async fn submit_ticket(&self, submission: &TicketSubmission) -> Result<()> {
        if let Some(message) = &self.submit_failure {
            return Err(Error::Api {
                status: 500,
                message: message.clone(),
            });
        }

        self.submissions.lock().unwrap().push(submission.clone());
        Ok(())
    }
}
