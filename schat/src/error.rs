//! Exchange-layer errors surfaced to the presentation layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExchangeErrorKind {
    SelectionRequired,
    UnknownTopic,
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeError {
    pub kind: ExchangeErrorKind,
    pub message: String,
}

impl ExchangeError {
    pub fn new(kind: ExchangeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn selection_required(message: impl Into<String>) -> Self {
        Self::new(ExchangeErrorKind::SelectionRequired, message)
    }

    pub fn unknown_topic(message: impl Into<String>) -> Self {
        Self::new(ExchangeErrorKind::UnknownTopic, message)
    }

    pub fn busy(message: impl Into<String>) -> Self {
        Self::new(ExchangeErrorKind::Busy, message)
    }

    /// The caller should prompt the user to pick a topic first.
    pub fn requires_selection(&self) -> bool {
        self.kind == ExchangeErrorKind::SelectionRequired
    }
}

impl Display for ExchangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ExchangeError {}
