//! Transcript message, topic, and session snapshot types.

use chrono::{DateTime, Utc};
use scommon::{MessageId, TopicId};
use sprovider::AnswerErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub origin: Origin,
    pub created_at: DateTime<Utc>,
    pub pending: bool,
}

impl Message {
    pub fn user(id: MessageId, text: impl Into<String>) -> Self {
        Self::new(id, Origin::User, text, false)
    }

    pub fn bot(id: MessageId, text: impl Into<String>) -> Self {
        Self::new(id, Origin::Bot, text, false)
    }

    pub fn pending_bot(id: MessageId, text: impl Into<String>) -> Self {
        Self::new(id, Origin::Bot, text, true)
    }

    fn new(id: MessageId, origin: Origin, text: impl Into<String>, pending: bool) -> Self {
        Self {
            id,
            text: text.into(),
            origin,
            created_at: Utc::now(),
            pending,
        }
    }

    pub fn is_bot(&self) -> bool {
        self.origin == Origin::Bot
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: TopicId,
    pub display_name: String,
}

impl Topic {
    pub fn new(id: impl Into<TopicId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Opening bot message seeded into a fresh transcript for this topic.
    pub fn greeting(&self) -> String {
        format!(
            "Hi! I'm your {} assistant. How can I help you today?",
            self.display_name
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExchangeState {
    #[default]
    Idle,
    AwaitingResponse,
}

/// Why a submission left the transcript untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmitRejection {
    EmptyInput,
    Busy,
    SelectionRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The placeholder was replaced with the formatted answer.
    Answered,
    /// The placeholder was replaced with the apology text.
    Apologized(AnswerErrorKind),
    Ignored(SubmitRejection),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub active_topic: Option<Topic>,
    pub transcript: Vec<Message>,
    pub state: ExchangeState,
}

impl SessionSnapshot {
    pub fn is_awaiting_response(&self) -> bool {
        self.state == ExchangeState::AwaitingResponse
    }

    /// Whether the input surface should accept a submission right now.
    pub fn can_submit(&self) -> bool {
        self.active_topic.is_some() && self.state == ExchangeState::Idle
    }

    pub fn pending_count(&self) -> usize {
        self.transcript.iter().filter(|message| message.pending).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_names_the_topic() {
        let topic = Topic::new("math101", "Mathematics 101");
        assert_eq!(
            topic.greeting(),
            "Hi! I'm your Mathematics 101 assistant. How can I help you today?"
        );
    }

    #[test]
    fn message_constructors_set_origin_and_pending() {
        let user = Message::user(MessageId::new(1), "hi");
        let pending = Message::pending_bot(MessageId::new(2), "Thinking...");

        assert_eq!(user.origin, Origin::User);
        assert!(!user.pending);
        assert!(pending.is_bot());
        assert!(pending.pending);
    }

    #[test]
    fn snapshot_reports_submit_readiness() {
        let mut snapshot = SessionSnapshot::default();
        assert!(!snapshot.can_submit());

        snapshot.active_topic = Some(Topic::new("physics201", "Physics 201"));
        assert!(snapshot.can_submit());

        snapshot.state = ExchangeState::AwaitingResponse;
        assert!(snapshot.is_awaiting_response());
        assert!(!snapshot.can_submit());
    }
}
