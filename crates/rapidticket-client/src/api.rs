//! Backend operations used by the ticket form

use async_trait::async_trait;
use rapidticket_core::models::{Employee, TicketSubmission};

use crate::Result;

/// The three backend calls the form needs. Implemented over HTTP by
/// [`crate::TicketDeskClient`]; tests substitute in-memory fakes.
#[async_trait]
pub trait TicketApi: Send + Sync {
    /// Client IP as seen by the IP endpoint. May be empty.
    async fn fetch_ip(&self) -> Result<String>;

    /// Look up an employee by emp ID or username.
    async fn find_employee(&self, key: &str) -> Result<Employee>;

    /// Save the ticket and trigger the notification email.
    async fn submit_ticket(&self, submission: &TicketSubmission) -> Result<()>;
}
