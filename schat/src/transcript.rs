//! Ordered message log with a single trailing pending placeholder.
//!
//! ```rust
//! use schat::Transcript;
//!
//! let mut transcript = Transcript::new();
//! transcript.reset("Hi!");
//! transcript.append_user("What is a vector?");
//! transcript.append_pending_bot("Thinking...");
//! assert_eq!(transcript.len(), 3);
//!
//! assert!(transcript.resolve_pending("A quantity with direction."));
//! assert_eq!(transcript.len(), 3);
//! assert!(transcript.pending().is_none());
//! ```

use scommon::MessageId;

use crate::Message;

/// Messages only ever grow at the end. The one exception is the pending bot
/// placeholder, which is always last and is replaced in place when resolved.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: MessageId,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self, greeting: impl Into<String>) {
        self.messages.clear();
        let id = self.allocate_id();
        self.messages.push(Message::bot(id, greeting));
    }

    /// Returns `None` without touching the log when `text` is blank or a
    /// placeholder is still outstanding.
    pub fn append_user(&mut self, text: impl Into<String>) -> Option<MessageId> {
        let text = text.into();
        if text.trim().is_empty() || self.pending().is_some() {
            return None;
        }

        let id = self.allocate_id();
        self.messages.push(Message::user(id, text));
        Some(id)
    }

    pub fn append_pending_bot(&mut self, placeholder: impl Into<String>) -> Option<MessageId> {
        if self.pending().is_some() {
            return None;
        }

        let id = self.allocate_id();
        self.messages.push(Message::pending_bot(id, placeholder));
        Some(id)
    }

    /// Swaps the pending placeholder for a settled bot message at the same
    /// index. Returns `false` when nothing is pending.
    pub fn resolve_pending(&mut self, final_text: impl Into<String>) -> bool {
        let Some(index) = self.messages.iter().rposition(|message| message.pending) else {
            return false;
        };

        let id = self.allocate_id();
        self.messages[index] = Message::bot(id, final_text);
        true
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn pending(&self) -> Option<&Message> {
        self.messages.last().filter(|message| message.pending)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Origin;

    #[test]
    fn reset_replaces_everything_with_greeting() {
        let mut transcript = Transcript::new();
        transcript.reset("first");
        transcript.append_user("question");
        transcript.reset("second");

        assert_eq!(transcript.len(), 1);
        let greeting = &transcript.messages()[0];
        assert_eq!(greeting.text, "second");
        assert_eq!(greeting.origin, Origin::Bot);
        assert!(!greeting.pending);
    }

    #[test]
    fn append_user_ignores_blank_text() {
        let mut transcript = Transcript::new();
        assert_eq!(transcript.append_user("   \t"), None);
        assert!(transcript.is_empty());

        let id = transcript.append_user("  padded  ").expect("non-blank appends");
        assert_eq!(transcript.messages()[0].id, id);
        assert_eq!(transcript.messages()[0].text, "  padded  ");
    }

    #[test]
    fn only_one_pending_placeholder_at_a_time() {
        let mut transcript = Transcript::new();
        transcript.append_user("q");
        assert!(transcript.append_pending_bot("Thinking...").is_some());
        assert!(transcript.append_pending_bot("Thinking...").is_none());
        assert!(transcript.append_user("another").is_none());

        let pending: Vec<_> = transcript.messages().iter().filter(|m| m.pending).collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(transcript.pending().map(|m| m.text.as_str()), Some("Thinking..."));
    }

    #[test]
    fn resolve_pending_keeps_position_and_assigns_fresh_id() {
        let mut transcript = Transcript::new();
        transcript.reset("hello");
        transcript.append_user("q");
        let placeholder = transcript
            .append_pending_bot("Thinking...")
            .expect("placeholder appends");

        assert!(transcript.resolve_pending("answer"));
        assert_eq!(transcript.len(), 3);

        let resolved = transcript.last().expect("last message");
        assert_eq!(resolved.text, "answer");
        assert_eq!(resolved.origin, Origin::Bot);
        assert!(!resolved.pending);
        assert!(resolved.id > placeholder);
    }

    #[test]
    fn resolve_without_pending_is_a_no_op() {
        let mut transcript = Transcript::new();
        transcript.reset("hello");

        assert!(!transcript.resolve_pending("stray"));
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].text, "hello");
    }

    #[test]
    fn ids_increase_across_resets() {
        let mut transcript = Transcript::new();
        transcript.reset("one");
        let first = transcript.messages()[0].id;
        transcript.reset("two");
        let second = transcript.messages()[0].id;

        assert!(second > first);
    }
}
