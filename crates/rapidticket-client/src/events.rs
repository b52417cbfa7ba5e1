//! Events sent from background tasks back to the form owner

use rapidticket_core::models::Employee;

use crate::Result;

/// A debounce timer elapsed for `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupDue {
    pub generation: u64,
    pub key: String,
}

/// An employee read finished.
#[derive(Debug)]
pub struct LookupResolved {
    pub generation: u64,
    pub key: String,
    pub result: Result<Employee>,
}

#[derive(Debug)]
pub enum DeskEvent {
    IpResolved(String),
    LookupDue(LookupDue),
    LookupResolved(LookupResolved),
    SubmitFinished(Result<()>),
}
