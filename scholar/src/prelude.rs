//! Common imports for most scholar applications.

pub use crate::providers::{build_http_answer_client, validate_endpoint};
pub use crate::runtime::{ScholarConfig, build_controller, controller_with_client, default_hooks};
pub use crate::{sc_catalog, sc_topic};
pub use crate::{
    AnswerClient, AnswerError, AnswerErrorKind, AnswerPayload, ExchangeController,
    ExchangeControllerBuilder, ExchangeError, ExchangeErrorKind, ExchangeHooks, ExchangePolicy,
    ExchangeState, Message, MessageId, MetricsExchangeHooks, Origin, SafeExchangeHooks,
    ScriptedAnswerClient, SessionSnapshot, SubmitOutcome, SubmitRejection, Topic, TopicCatalog,
    TopicId, TracingExchangeHooks, format_answer,
};
