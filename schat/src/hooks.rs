//! Lifecycle hooks for topic selection and question exchanges.
//!
//! ```rust
//! use schat::{ExchangeHooks, NoopExchangeHooks};
//!
//! fn assert_hooks_trait(_hooks: &dyn ExchangeHooks) {}
//!
//! let hooks = NoopExchangeHooks;
//! assert_hooks_trait(&hooks);
//! ```

use std::time::Duration;

use scommon::TopicId;
use sprovider::AnswerError;

use crate::{ExchangeError, SubmitRejection, Topic};

pub trait ExchangeHooks: Send + Sync {
    fn on_topic_selected(&self, _topic: &Topic) {}

    fn on_topic_rejected(&self, _topic_id: &str, _error: &ExchangeError) {}

    fn on_submit_rejected(&self, _topic: Option<&TopicId>, _reason: SubmitRejection) {}

    fn on_exchange_start(&self, _topic: &TopicId, _question: &str) {}

    fn on_exchange_success(&self, _topic: &TopicId, _elapsed: Duration) {}

    /// The error is for diagnostics only; the user sees the apology text.
    fn on_exchange_failure(&self, _topic: &TopicId, _error: &AnswerError, _elapsed: Duration) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopExchangeHooks;

impl ExchangeHooks for NoopExchangeHooks {}
