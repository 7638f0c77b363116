use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use schat::{ExchangeError, ExchangeHooks, SubmitRejection, Topic};
use scommon::TopicId;
use sprovider::AnswerError;

/// Wraps exchange hooks so a panicking observer never unwinds into the controller.
pub struct SafeExchangeHooks<H> {
    inner: H,
}

impl<H> SafeExchangeHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ExchangeHooks for SafeExchangeHooks<H>
where
    H: ExchangeHooks,
{
    fn on_topic_selected(&self, topic: &Topic) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_topic_selected(topic)));
    }

    fn on_topic_rejected(&self, topic_id: &str, error: &ExchangeError) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_topic_rejected(topic_id, error)
        }));
    }

    fn on_submit_rejected(&self, topic: Option<&TopicId>, reason: SubmitRejection) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_submit_rejected(topic, reason)
        }));
    }

    fn on_exchange_start(&self, topic: &TopicId, question: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_exchange_start(topic, question)
        }));
    }

    fn on_exchange_success(&self, topic: &TopicId, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_exchange_success(topic, elapsed)
        }));
    }

    fn on_exchange_failure(&self, topic: &TopicId, error: &AnswerError, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_exchange_failure(topic, error, elapsed)
        }));
    }
}
