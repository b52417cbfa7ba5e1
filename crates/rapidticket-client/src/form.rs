//! Ticket form state
//!
//! Owns everything the ticket screen shows and edits. Background work
//! (debounce timers, backend calls) runs on spawned tasks that report back
//! through [`DeskEvent`]s; only [`TicketForm::handle_event`] mutates state in
//! response, so the owner's event loop is the single writer.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rapidticket_core::models::{DraftTicket, Employee, StatusMessage, TicketSubmission};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::TicketApi;
use crate::events::{DeskEvent, LookupResolved};
use crate::lookup::{DebouncedLookup, LookupSchedule};
use crate::Result;

/// Shown in place of the IP when the IP endpoint fails.
pub const IP_UNAVAILABLE: &str = "Unavailable";

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";
pub const SUBMIT_SUCCEEDED: &str = "Ticket submitted successfully and email sent!";
pub const SUBMIT_FAILED: &str = "Submit failed";

pub struct TicketForm {
    api: Arc<dyn TicketApi>,
    events: mpsc::UnboundedSender<DeskEvent>,
    lookup: DebouncedLookup,
    key: String,
    employee: Option<Employee>,
    draft: DraftTicket,
    ip: Option<String>,
    status: Option<StatusMessage>,
    submitting: bool,
}

impl TicketForm {
    /// Create a form and the receiver its background tasks report to.
    pub fn new(
        api: Arc<dyn TicketApi>,
        quiet_period: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<DeskEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let lookup = DebouncedLookup::new(api.clone(), events.clone(), quiet_period);

        let form = Self {
            api,
            events,
            lookup,
            key: String::new(),
            employee: None,
            draft: DraftTicket::new(),
            ip: None,
            status: None,
            submitting: false,
        };

        (form, rx)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn employee(&self) -> Option<&Employee> {
        self.employee.as_ref()
    }

    pub fn draft(&self) -> &DraftTicket {
        &self.draft
    }

    /// `None` until the IP read finishes.
    pub fn ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn is_searching(&self) -> bool {
        self.lookup.is_loading()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_loading(&self) -> bool {
        self.is_searching() || self.submitting
    }

    pub fn has_pending_lookup(&self) -> bool {
        self.lookup.has_pending()
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.employee.is_some()
    }

    /// Fetch the client IP once. The result arrives as
    /// [`DeskEvent::IpResolved`].
    pub fn load_ip(&self) {
        let api = self.api.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let ip = match api.fetch_ip().await {
                Ok(ip) => ip,
                Err(e) => {
                    warn!("Failed to fetch client IP: {}", e);
                    IP_UNAVAILABLE.to_string()
                }
            };
            let _ = events.send(DeskEvent::IpResolved(ip));
        });
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
        if self.lookup.key_changed(&self.key) == LookupSchedule::Cleared {
            self.employee = None;
        }
    }

    pub fn push_key_char(&mut self, c: char) {
        let mut key = std::mem::take(&mut self.key);
        key.push(c);
        self.set_key(key);
    }

    pub fn pop_key_char(&mut self) {
        let mut key = std::mem::take(&mut self.key);
        key.pop();
        self.set_key(key);
    }

    pub fn set_issue_text(&mut self, text: impl Into<String>) {
        self.draft.issue_text = text.into();
    }

    pub fn push_issue_char(&mut self, c: char) {
        self.draft.issue_text.push(c);
    }

    pub fn pop_issue_char(&mut self) {
        self.draft.issue_text.pop();
    }

    pub fn set_reporting_to(&mut self, manager: impl Into<String>) {
        self.draft.reporting_to = manager.into();
    }

    pub fn cycle_reporting_to(&mut self, forward: bool) {
        self.draft.cycle_reporting_to(forward);
    }

    pub fn clear_reporting_to(&mut self) {
        self.draft.reporting_to.clear();
    }

    /// Whether quitting now would discard user input.
    pub fn has_unsaved_input(&self) -> bool {
        !self.draft.issue_text.trim().is_empty()
    }

    /// Validate and send the ticket. Returns `false` when nothing was sent,
    /// either because a lookup or submission is still running or because the
    /// draft failed validation (the reason is left in the status).
    pub fn submit(&mut self) -> bool {
        if self.is_loading() {
            debug!(searching = self.is_searching(), "Submission ignored while loading");
            return false;
        }

        if let Err(e) = self.draft.validate_for(self.employee.as_ref()) {
            let text = match e {
                rapidticket_core::Error::Validation(msg) => msg,
                other => other.to_string(),
            };
            debug!(reason = %text, "Submission rejected");
            self.status = Some(StatusMessage::error(text));
            return false;
        }

        let Some(employee) = self.employee.as_ref() else {
            return false;
        };

        let ip_address = self
            .ip
            .clone()
            .filter(|ip| !ip.trim().is_empty() && ip != IP_UNAVAILABLE);
        let submission = TicketSubmission::new(employee, &self.draft, ip_address);

        info!(emp_id = %submission.emp_id, reporting_to = %submission.reporting_to, "Submitting ticket");
        self.submitting = true;

        let api = self.api.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.submit_ticket(&submission).await;
            let _ = events.send(DeskEvent::SubmitFinished(result));
        });

        true
    }

    pub fn handle_event(&mut self, event: DeskEvent) {
        match event {
            DeskEvent::IpResolved(ip) => {
                debug!(ip = %ip, "Client IP resolved");
                self.ip = Some(ip);
            }
            DeskEvent::LookupDue(due) => {
                self.lookup.fire(due);
            }
            DeskEvent::LookupResolved(resolved) => self.apply_lookup(resolved),
            DeskEvent::SubmitFinished(result) => self.apply_submit(result),
        }
    }

    /// Drop the status message once it is older than `ttl`.
    pub fn expire_status(&mut self, ttl: chrono::Duration) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| status.is_expired(Utc::now(), ttl))
        {
            self.status = None;
        }
    }

    fn apply_lookup(&mut self, resolved: LookupResolved) {
        if !self.lookup.complete(&resolved) {
            return;
        }

        match resolved.result {
            Ok(employee) => {
                info!(emp_id = %employee.emp_id, "Employee loaded");
                self.draft.reporting_to = employee.default_manager().unwrap_or_default().to_string();
                self.employee = Some(employee);
                self.status = None;
            }
            Err(e) => {
                debug!(key = %resolved.key, "Lookup failed: {}", e);
                self.employee = None;
                self.status = Some(StatusMessage::error(EMPLOYEE_NOT_FOUND));
            }
        }
    }

    fn apply_submit(&mut self, result: Result<()>) {
        self.submitting = false;

        match result {
            Ok(()) => {
                info!("Ticket submitted");
                self.status = Some(StatusMessage::success(SUBMIT_SUCCEEDED));
                self.draft.clear();
                self.key.clear();
                self.employee = None;
                self.lookup.cancel();
            }
            Err(e) => {
                warn!("Ticket submission failed: {}", e);
                let text = e.api_message().unwrap_or(SUBMIT_FAILED).to_string();
                self.status = Some(StatusMessage::error(text));
            }
        }
    }
}
