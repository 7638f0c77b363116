//! Exchange controller: one submit, one request, one settled transcript entry.

use std::pin::pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use futures_timer::Delay;
use futures_util::future::{Either, select};
use scommon::TopicId;
use sprovider::{AnswerClient, AnswerError, AnswerPayload};

use crate::{
    ExchangeError, ExchangeHooks, ExchangeState, NoopExchangeHooks, SessionSnapshot,
    SubmitOutcome, SubmitRejection, Topic, TopicCatalog, Transcript, format_answer,
};

pub const THINKING_PLACEHOLDER: &str = "Thinking...";
pub const APOLOGY_TEXT: &str = "Sorry, I could not process your request. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangePolicy {
    /// Upper bound on one answer request. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub placeholder_text: String,
    pub apology_text: String,
}

impl Default for ExchangePolicy {
    fn default() -> Self {
        Self {
            timeout: None,
            placeholder_text: THINKING_PLACEHOLDER.to_string(),
            apology_text: APOLOGY_TEXT.to_string(),
        }
    }
}

impl ExchangePolicy {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = text.into();
        self
    }

    pub fn with_apology_text(mut self, text: impl Into<String>) -> Self {
        self.apology_text = text.into();
        self
    }
}

#[derive(Debug, Default)]
struct Session {
    active_topic: Option<Topic>,
    transcript: Transcript,
    state: ExchangeState,
}

/// Owns the single session of a client instance.
///
/// Clones share the same session, so a presentation task can read snapshots
/// while another task awaits [`ExchangeController::submit`].
#[derive(Clone)]
pub struct ExchangeController {
    client: Arc<dyn AnswerClient>,
    catalog: Arc<TopicCatalog>,
    hooks: Arc<dyn ExchangeHooks>,
    policy: ExchangePolicy,
    session: Arc<Mutex<Session>>,
}

impl ExchangeController {
    pub fn new(client: Arc<dyn AnswerClient>) -> Self {
        Self::builder(client).build()
    }

    pub fn builder(client: Arc<dyn AnswerClient>) -> ExchangeControllerBuilder {
        ExchangeControllerBuilder::new(client)
    }

    pub fn catalog(&self) -> &TopicCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> &ExchangePolicy {
        &self.policy
    }

    pub fn state(&self) -> ExchangeState {
        self.lock_session().state
    }

    pub fn active_topic(&self) -> Option<Topic> {
        self.lock_session().active_topic.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let session = self.lock_session();
        SessionSnapshot {
            active_topic: session.active_topic.clone(),
            transcript: session.transcript.messages().to_vec(),
            state: session.state,
        }
    }

    /// Switches topic and reseeds the transcript with the topic greeting.
    /// Rejected while an answer is outstanding.
    pub fn select_topic(&self, topic_id: &str) -> Result<Topic, ExchangeError> {
        let result = self.apply_topic(topic_id);
        match &result {
            Ok(topic) => self.hooks.on_topic_selected(topic),
            Err(error) => self.hooks.on_topic_rejected(topic_id, error),
        }
        result
    }

    /// Reseeds the greeting for the active topic.
    pub fn reset_transcript(&self) -> Result<(), ExchangeError> {
        let mut session = self.lock_session();
        if session.state == ExchangeState::AwaitingResponse {
            return Err(ExchangeError::busy("cannot reset while an answer is pending"));
        }

        let greeting = session
            .active_topic
            .as_ref()
            .map(Topic::greeting)
            .ok_or_else(|| ExchangeError::selection_required("select a topic first"))?;

        session.transcript.reset(greeting);
        Ok(())
    }

    /// Runs one question exchange.
    ///
    /// Blank input and submissions while an answer is outstanding are ignored
    /// without touching the transcript. Submitting with no active topic is the
    /// only error. Request failures never surface here: the placeholder is
    /// settled with the apology text and the outcome records the failure kind.
    pub async fn submit(&self, text: &str) -> Result<SubmitOutcome, ExchangeError> {
        let topic = match self.begin_exchange(text) {
            Ok(topic) => topic,
            Err((topic, reason)) => {
                self.hooks.on_submit_rejected(topic.as_ref(), reason);
                return match reason {
                    SubmitRejection::SelectionRequired => Err(ExchangeError::selection_required(
                        "select a topic before asking a question",
                    )),
                    other => Ok(SubmitOutcome::Ignored(other)),
                };
            }
        };

        self.hooks.on_exchange_start(&topic, text);
        let in_flight = InFlightExchange::new(self, topic.clone());

        let result = self.ask_with_policy(text).await;
        let elapsed = in_flight.started.elapsed();

        match result {
            Ok(payload) => {
                in_flight.settle(format_answer(&payload));
                self.hooks.on_exchange_success(&topic, elapsed);
                Ok(SubmitOutcome::Answered)
            }
            Err(error) => {
                in_flight.settle(self.policy.apology_text.clone());
                self.hooks.on_exchange_failure(&topic, &error, elapsed);
                Ok(SubmitOutcome::Apologized(error.kind))
            }
        }
    }

    fn apply_topic(&self, topic_id: &str) -> Result<Topic, ExchangeError> {
        let mut session = self.lock_session();
        if session.state == ExchangeState::AwaitingResponse {
            return Err(ExchangeError::busy(
                "cannot change topic while an answer is pending",
            ));
        }

        let topic = self
            .catalog
            .get(topic_id)
            .cloned()
            .ok_or_else(|| ExchangeError::unknown_topic(format!("unknown topic '{topic_id}'")))?;

        session.transcript.reset(topic.greeting());
        session.active_topic = Some(topic.clone());
        Ok(topic)
    }

    fn begin_exchange(&self, text: &str) -> Result<TopicId, (Option<TopicId>, SubmitRejection)> {
        let mut session = self.lock_session();
        let topic = session.active_topic.as_ref().map(|topic| topic.id.clone());

        if session.state == ExchangeState::AwaitingResponse {
            return Err((topic, SubmitRejection::Busy));
        }

        if text.trim().is_empty() {
            return Err((topic, SubmitRejection::EmptyInput));
        }

        let Some(topic) = topic else {
            return Err((None, SubmitRejection::SelectionRequired));
        };

        session.transcript.append_user(text);
        session
            .transcript
            .append_pending_bot(self.policy.placeholder_text.clone());
        session.state = ExchangeState::AwaitingResponse;

        Ok(topic)
    }

    fn finish_exchange(&self, final_text: String) {
        let mut session = self.lock_session();
        session.transcript.resolve_pending(final_text);
        session.state = ExchangeState::Idle;
    }

    async fn ask_with_policy(&self, question: &str) -> Result<AnswerPayload, AnswerError> {
        let request = self.client.ask(question);
        let Some(limit) = self.policy.timeout else {
            return request.await;
        };

        let delay = pin!(Delay::new(limit));
        match select(request, delay).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(AnswerError::timeout(format!(
                "no answer within {} ms",
                limit.as_millis()
            ))),
        }
    }

    fn lock_session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Settles the placeholder exactly once. An exchange whose future is dropped
/// before the answer arrives falls back to the apology text and is reported
/// to the hooks as a failure.
struct InFlightExchange<'a> {
    controller: &'a ExchangeController,
    topic: TopicId,
    started: Instant,
    settled: bool,
}

impl<'a> InFlightExchange<'a> {
    fn new(controller: &'a ExchangeController, topic: TopicId) -> Self {
        Self {
            controller,
            topic,
            started: Instant::now(),
            settled: false,
        }
    }

    fn settle(mut self, final_text: String) {
        self.settled = true;
        self.controller.finish_exchange(final_text);
    }
}

impl Drop for InFlightExchange<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        self.controller
            .finish_exchange(self.controller.policy.apology_text.clone());
        self.controller.hooks.on_exchange_failure(
            &self.topic,
            &AnswerError::transport("exchange dropped before an answer arrived"),
            self.started.elapsed(),
        );
    }
}

pub struct ExchangeControllerBuilder {
    client: Arc<dyn AnswerClient>,
    catalog: TopicCatalog,
    hooks: Arc<dyn ExchangeHooks>,
    policy: ExchangePolicy,
}

impl ExchangeControllerBuilder {
    pub fn new(client: Arc<dyn AnswerClient>) -> Self {
        Self {
            client,
            catalog: TopicCatalog::courses(),
            hooks: Arc::new(NoopExchangeHooks),
            policy: ExchangePolicy::default(),
        }
    }

    pub fn catalog(mut self, catalog: TopicCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn ExchangeHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn policy(mut self, policy: ExchangePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.policy.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> ExchangeController {
        ExchangeController {
            client: self.client,
            catalog: Arc::new(self.catalog),
            hooks: self.hooks,
            policy: self.policy,
            session: Arc::new(Mutex::new(Session::default())),
        }
    }
}
