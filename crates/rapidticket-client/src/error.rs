//! Error types for the ticket backend client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Core error: {0}")]
    Core(#[from] rapidticket_core::Error),
}

impl Error {
    /// Message supplied by the backend in a `{ "message": ... }` error body.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Error::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
