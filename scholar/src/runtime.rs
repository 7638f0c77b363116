//! Runtime wiring helpers for a course assistant session.

use std::sync::Arc;
use std::time::Duration;

use crate::providers::build_http_answer_client;
use crate::{
    AnswerClient, AnswerError, DEFAULT_ANSWER_ENDPOINT, ExchangeController, ExchangeHooks,
    ExchangePolicy, SafeExchangeHooks, TopicCatalog, TracingExchangeHooks,
};

/// Everything needed to stand up one assistant session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScholarConfig {
    pub endpoint: String,
    pub catalog: TopicCatalog,
    pub policy: ExchangePolicy,
}

impl Default for ScholarConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ANSWER_ENDPOINT.to_string(),
            catalog: TopicCatalog::courses(),
            policy: ExchangePolicy::default(),
        }
    }
}

impl ScholarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.policy.timeout = Some(timeout);
        self
    }

    pub fn with_catalog(mut self, catalog: TopicCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_policy(mut self, policy: ExchangePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Hooks installed by the runtime helpers: structured logs guarded against panics.
pub fn default_hooks() -> Arc<dyn ExchangeHooks> {
    Arc::new(SafeExchangeHooks::new(TracingExchangeHooks))
}

/// Builds a controller backed by the HTTP answer client at `config.endpoint`.
pub fn build_controller(config: ScholarConfig) -> Result<ExchangeController, AnswerError> {
    let client = build_http_answer_client(config.endpoint.as_str())?;
    Ok(controller_with_client(client, config))
}

/// Builds a controller around any answer client, ignoring `config.endpoint`.
pub fn controller_with_client(
    client: Arc<dyn AnswerClient>,
    config: ScholarConfig,
) -> ExchangeController {
    ExchangeController::builder(client)
        .catalog(config.catalog)
        .policy(config.policy)
        .hooks(default_hooks())
        .build()
}
