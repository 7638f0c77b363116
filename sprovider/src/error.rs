//! Answer client error kinds and error value helpers.
//!
//! ```rust
//! use sprovider::{AnswerError, AnswerErrorKind};
//!
//! let status = AnswerError::status(503, "service unavailable");
//! assert_eq!(status.kind, AnswerErrorKind::Status);
//! assert_eq!(status.status, Some(503));
//! assert!(status.is_transport_failure());
//!
//! let malformed = AnswerError::malformed_payload("expected a JSON object");
//! assert!(!malformed.is_transport_failure());
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerErrorKind {
    InvalidRequest,
    Transport,
    Status,
    MalformedPayload,
    Timeout,
}

impl AnswerErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Transport => "transport",
            Self::Status => "status",
            Self::MalformedPayload => "malformed_payload",
            Self::Timeout => "timeout",
        }
    }
}

impl Display for AnswerErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerError {
    pub kind: AnswerErrorKind,
    pub message: String,
    pub status: Option<u16>,
}

impl AnswerError {
    pub fn new(kind: AnswerErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(AnswerErrorKind::InvalidRequest, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(AnswerErrorKind::Transport, message)
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            ..Self::new(AnswerErrorKind::Status, message)
        }
    }

    pub fn malformed_payload(message: impl Into<String>) -> Self {
        Self::new(AnswerErrorKind::MalformedPayload, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(AnswerErrorKind::Timeout, message)
    }

    /// Network-level failures and non-success responses.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self.kind,
            AnswerErrorKind::Transport | AnswerErrorKind::Status | AnswerErrorKind::Timeout
        )
    }
}

impl Display for AnswerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{:?} ({status}): {}", self.kind, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for AnswerError {}
