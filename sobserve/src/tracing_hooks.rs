//! Tracing-based observability hooks for topic selection and question exchanges.
//!
//! ```rust
//! use schat::ExchangeHooks;
//! use sobserve::TracingExchangeHooks;
//!
//! fn accepts_exchange_hooks(_hooks: &dyn ExchangeHooks) {}
//!
//! let hooks = TracingExchangeHooks;
//! accepts_exchange_hooks(&hooks);
//! ```

use std::time::Duration;

use schat::{ExchangeError, ExchangeHooks, SubmitRejection, Topic};
use scommon::TopicId;
use sprovider::AnswerError;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingExchangeHooks;

impl ExchangeHooks for TracingExchangeHooks {
    fn on_topic_selected(&self, topic: &Topic) {
        tracing::info!(
            phase = "topic",
            event = "selected",
            topic = %topic.id,
            display_name = %topic.display_name
        );
    }

    fn on_topic_rejected(&self, topic_id: &str, error: &ExchangeError) {
        tracing::warn!(
            phase = "topic",
            event = "rejected",
            topic = topic_id,
            error_kind = ?error.kind,
            error = %error
        );
    }

    fn on_submit_rejected(&self, topic: Option<&TopicId>, reason: SubmitRejection) {
        tracing::debug!(
            phase = "exchange",
            event = "submit_rejected",
            topic = topic.map(TopicId::as_str),
            reason = ?reason
        );
    }

    fn on_exchange_start(&self, topic: &TopicId, question: &str) {
        tracing::info!(
            phase = "exchange",
            event = "start",
            topic = %topic,
            question_chars = question.chars().count() as u64
        );
    }

    fn on_exchange_success(&self, topic: &TopicId, elapsed: Duration) {
        tracing::info!(
            phase = "exchange",
            event = "success",
            topic = %topic,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_exchange_failure(&self, topic: &TopicId, error: &AnswerError, elapsed: Duration) {
        tracing::error!(
            phase = "exchange",
            event = "failure",
            topic = %topic,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = %error.kind,
            status = error.status,
            transport_failure = error.is_transport_failure(),
            error = %error
        );
    }
}
