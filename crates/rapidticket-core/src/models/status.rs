//! Transient status messages shown to the user

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Outcome of the latest user-visible action. Each new attempt replaces the
/// previous message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, text)
    }

    /// Whether the message is older than `ttl` at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.created_at >= ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(StatusMessage::success("b").kind, StatusKind::Success);
        assert_eq!(StatusMessage::error("c").kind, StatusKind::Error);
    }

    #[test]
    fn test_expiry() {
        let msg = StatusMessage::error("Employee not found");
        let ttl = Duration::seconds(6);
        assert!(!msg.is_expired(msg.created_at + Duration::seconds(5), ttl));
        assert!(msg.is_expired(msg.created_at + Duration::seconds(6), ttl));
    }
}
