pub mod config;
pub mod employee;
pub mod status;
pub mod ticket;

pub use config::{ApiConfig, Config, IpSource, LookupConfig, UiConfig};
pub use employee::Employee;
pub use status::{StatusKind, StatusMessage};
pub use ticket::{DraftTicket, TicketSubmission, REPORTING_MANAGERS};
