//! Metrics-based observability hooks for topic selection and question exchanges.
//!
//! ```rust
//! use schat::ExchangeHooks;
//! use sobserve::MetricsExchangeHooks;
//!
//! fn accepts_exchange_hooks(_hooks: &dyn ExchangeHooks) {}
//!
//! let hooks = MetricsExchangeHooks;
//! accepts_exchange_hooks(&hooks);
//! ```

use std::time::Duration;

use schat::{ExchangeError, ExchangeHooks, SubmitRejection, Topic};
use scommon::TopicId;
use sprovider::AnswerError;

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsExchangeHooks;

impl ExchangeHooks for MetricsExchangeHooks {
    fn on_topic_selected(&self, topic: &Topic) {
        metrics::counter!(
            "scholar_topic_selected_total",
            "topic" => topic.id.to_string()
        )
        .increment(1);
    }

    fn on_topic_rejected(&self, _topic_id: &str, error: &ExchangeError) {
        metrics::counter!(
            "scholar_topic_rejected_total",
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }

    fn on_submit_rejected(&self, _topic: Option<&TopicId>, reason: SubmitRejection) {
        metrics::counter!(
            "scholar_exchange_submit_rejected_total",
            "reason" => format!("{reason:?}")
        )
        .increment(1);
    }

    fn on_exchange_start(&self, topic: &TopicId, _question: &str) {
        metrics::counter!(
            "scholar_exchange_start_total",
            "topic" => topic.to_string()
        )
        .increment(1);
    }

    fn on_exchange_success(&self, topic: &TopicId, elapsed: Duration) {
        metrics::counter!(
            "scholar_exchange_success_total",
            "topic" => topic.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "scholar_exchange_duration_seconds",
            "topic" => topic.to_string(),
            "outcome" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_exchange_failure(&self, topic: &TopicId, error: &AnswerError, elapsed: Duration) {
        metrics::counter!(
            "scholar_exchange_failure_total",
            "topic" => topic.to_string(),
            "error_kind" => error.kind.as_str()
        )
        .increment(1);
        metrics::histogram!(
            "scholar_exchange_duration_seconds",
            "topic" => topic.to_string(),
            "outcome" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}
