use std::sync::{Arc, Mutex};
use std::time::Duration;

use schat::{
    ExchangeController, ExchangeError, ExchangeHooks, SubmitRejection, Topic,
};
use scommon::TopicId;
use sprovider::{AnswerError, ScriptedAnswerClient};

use crate::{MetricsExchangeHooks, SafeExchangeHooks, TracingExchangeHooks};

fn sample_topic() -> Topic {
    Topic::new("math101", "Mathematics 101")
}

fn exercise_all_callbacks(hooks: &dyn ExchangeHooks) {
    let topic = sample_topic();
    let answer_error = AnswerError::status(503, "unavailable");
    let exchange_error = ExchangeError::busy("answer pending");

    hooks.on_topic_selected(&topic);
    hooks.on_topic_rejected("art999", &exchange_error);
    hooks.on_submit_rejected(None, SubmitRejection::SelectionRequired);
    hooks.on_submit_rejected(Some(&topic.id), SubmitRejection::Busy);
    hooks.on_exchange_start(&topic.id, "What is a limit?");
    hooks.on_exchange_success(&topic.id, Duration::from_millis(15));
    hooks.on_exchange_failure(&topic.id, &answer_error, Duration::from_millis(30));
}

#[test]
fn tracing_hooks_smoke_test_all_callbacks() {
    exercise_all_callbacks(&TracingExchangeHooks);
}

#[test]
fn metrics_hooks_smoke_test_all_callbacks() {
    exercise_all_callbacks(&MetricsExchangeHooks);
}

#[derive(Default, Clone)]
struct RecordingExchangeHooks {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl ExchangeHooks for RecordingExchangeHooks {
    fn on_topic_selected(&self, _topic: &Topic) {
        self.events.lock().expect("events lock").push("selected");
    }

    fn on_topic_rejected(&self, _topic_id: &str, _error: &ExchangeError) {
        self.events.lock().expect("events lock").push("topic_rejected");
    }

    fn on_submit_rejected(&self, _topic: Option<&TopicId>, _reason: SubmitRejection) {
        self.events
            .lock()
            .expect("events lock")
            .push("submit_rejected");
    }

    fn on_exchange_start(&self, _topic: &TopicId, _question: &str) {
        self.events.lock().expect("events lock").push("start");
    }

    fn on_exchange_success(&self, _topic: &TopicId, _elapsed: Duration) {
        self.events.lock().expect("events lock").push("success");
    }

    fn on_exchange_failure(&self, _topic: &TopicId, _error: &AnswerError, _elapsed: Duration) {
        self.events.lock().expect("events lock").push("failure");
    }
}

struct PanicExchangeHooks;

impl ExchangeHooks for PanicExchangeHooks {
    fn on_topic_selected(&self, _topic: &Topic) {
        panic!("selected panic");
    }

    fn on_topic_rejected(&self, _topic_id: &str, _error: &ExchangeError) {
        panic!("topic_rejected panic");
    }

    fn on_submit_rejected(&self, _topic: Option<&TopicId>, _reason: SubmitRejection) {
        panic!("submit_rejected panic");
    }

    fn on_exchange_start(&self, _topic: &TopicId, _question: &str) {
        panic!("start panic");
    }

    fn on_exchange_success(&self, _topic: &TopicId, _elapsed: Duration) {
        panic!("success panic");
    }

    fn on_exchange_failure(&self, _topic: &TopicId, _error: &AnswerError, _elapsed: Duration) {
        panic!("failure panic");
    }
}

#[test]
fn safe_hooks_forward_calls_in_order() {
    let recording = RecordingExchangeHooks::default();
    let safe = SafeExchangeHooks::new(recording.clone());

    exercise_all_callbacks(&safe);

    assert_eq!(
        *recording.events.lock().expect("events lock"),
        vec![
            "selected",
            "topic_rejected",
            "submit_rejected",
            "submit_rejected",
            "start",
            "success",
            "failure",
        ]
    );
}

#[test]
fn safe_hooks_swallow_panics() {
    exercise_all_callbacks(&SafeExchangeHooks::new(PanicExchangeHooks));
}

#[test]
fn controller_keeps_working_with_panicking_observer() {
    let controller = ExchangeController::builder(Arc::new(ScriptedAnswerClient::new()))
        .hooks(Arc::new(SafeExchangeHooks::new(PanicExchangeHooks)))
        .build();

    let topic = controller
        .select_topic("math101")
        .expect("selection should survive the hook panic");
    assert_eq!(topic, sample_topic());
    assert_eq!(controller.snapshot().transcript.len(), 1);
}
