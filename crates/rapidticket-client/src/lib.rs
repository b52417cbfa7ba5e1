//! Rapid Ticket Client Library
//!
//! HTTP access to the ticket backend plus the form state that drives the
//! employee lookup and ticket submission.

pub mod api;
pub mod client;
pub mod error;
pub mod events;
pub mod form;
pub mod lookup;

#[cfg(test)]
mod fake;

pub use api::TicketApi;
pub use client::TicketDeskClient;
pub use error::{Error, Result};
pub use events::{DeskEvent, LookupDue, LookupResolved};
pub use form::TicketForm;
pub use lookup::{DebouncedLookup, LookupSchedule};
