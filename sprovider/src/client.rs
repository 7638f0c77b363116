//! Answer client contract and a scripted in-memory implementation.
//!
//! ```rust
//! use sprovider::{AnswerClient, AnswerPayload, ScriptedAnswerClient};
//!
//! let client = ScriptedAnswerClient::new();
//! client.push_payload(AnswerPayload::default().with_answer("42"));
//!
//! fn accepts_client(_client: &dyn AnswerClient) {}
//! accepts_client(&client);
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use scommon::BoxFuture;

use crate::{AnswerError, AnswerPayload};

pub type AnswerFuture<'a, T> = BoxFuture<'a, T>;

pub const DEFAULT_ANSWER_ENDPOINT: &str = "http://127.0.0.1:8000/ask/";

/// Issues exactly one request per call. Implementations never retry.
pub trait AnswerClient: Send + Sync {
    fn ask<'a>(&'a self, question: &'a str) -> AnswerFuture<'a, Result<AnswerPayload, AnswerError>>;
}

/// Replays queued results in order and records every question it was asked.
#[derive(Debug, Default)]
pub struct ScriptedAnswerClient {
    responses: Mutex<VecDeque<Result<AnswerPayload, AnswerError>>>,
    questions: Mutex<Vec<String>>,
}

impl ScriptedAnswerClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: Result<AnswerPayload, AnswerError>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }

    pub fn push_payload(&self, payload: AnswerPayload) {
        self.push(Ok(payload));
    }

    pub fn push_error(&self, error: AnswerError) {
        self.push(Err(error));
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions
            .lock()
            .map(|questions| questions.clone())
            .unwrap_or_default()
    }
}

impl AnswerClient for ScriptedAnswerClient {
    fn ask<'a>(&'a self, question: &'a str) -> AnswerFuture<'a, Result<AnswerPayload, AnswerError>> {
        Box::pin(async move {
            if question.trim().is_empty() {
                return Err(AnswerError::invalid_request("question must not be empty"));
            }

            self.questions
                .lock()
                .map_err(|_| AnswerError::transport("scripted client lock poisoned"))?
                .push(question.to_string());

            self.responses
                .lock()
                .map_err(|_| AnswerError::transport("scripted client lock poisoned"))?
                .pop_front()
                .unwrap_or_else(|| Err(AnswerError::transport("no scripted response queued")))
        })
    }
}
