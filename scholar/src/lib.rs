//! Unified facade over the scholar workspace crates.
//!
//! Most applications only need this crate: it re-exports the exchange core,
//! the answer client, and the observability hooks, and wires them together.
//!
//! ```rust
//! use scholar::{ExchangeState, ScholarConfig, ScriptedAnswerClient, controller_with_client};
//! use std::sync::Arc;
//!
//! let controller = controller_with_client(Arc::new(ScriptedAnswerClient::new()), ScholarConfig::new());
//! let topic = controller.select_topic("math101").expect("course should exist");
//!
//! assert_eq!(topic.display_name, "Mathematics 101");
//! assert_eq!(controller.state(), ExchangeState::Idle);
//! ```

mod macros;

pub mod prelude;
pub mod providers;
pub mod runtime;

pub use schat;
pub use scommon;
pub use sobserve;
pub use sprovider;

pub use schat::{
    ADDITIONAL_CONTEXT_HEADER, APOLOGY_TEXT, ExchangeController, ExchangeControllerBuilder,
    ExchangeError, ExchangeErrorKind, ExchangeHooks, ExchangePolicy, ExchangeState, Message,
    NoopExchangeHooks, Origin, RELATED_QUESTIONS_HEADER, SUPPORTING_INFORMATION_HEADER,
    SessionSnapshot, SubmitOutcome, SubmitRejection, THINKING_PLACEHOLDER, Topic, TopicCatalog,
    Transcript, UNEXPECTED_FORMAT_TEXT, format_answer,
};
pub use scommon::{BoxFuture, MessageId, TopicId};
pub use sobserve::{MetricsExchangeHooks, SafeExchangeHooks, TracingExchangeHooks};
#[cfg(feature = "http-client")]
pub use sprovider::HttpAnswerClient;
pub use sprovider::{
    AnswerClient, AnswerError, AnswerErrorKind, AnswerFuture, AnswerPayload, AnswerText,
    DEFAULT_ANSWER_ENDPOINT, RelatedQuestion, ScriptedAnswerClient, SupportingChunk,
    parse_answer_body,
};

pub use providers::{build_http_answer_client, validate_endpoint};
pub use runtime::{ScholarConfig, build_controller, controller_with_client, default_hooks};

#[cfg(test)]
mod tests {
    use crate::{Topic, TopicCatalog};

    #[test]
    fn sc_topic_macro_creates_expected_topic() {
        let topic = crate::sc_topic!("english102" => "English Literature 102");
        assert_eq!(topic, Topic::new("english102", "English Literature 102"));
    }

    #[test]
    fn sc_catalog_macro_keeps_order_and_drops_duplicates() {
        let catalog = crate::sc_catalog![
            "history200" => "World History 200",
            "biology110" => "Biology 110",
            "history200" => "History Again",
        ];

        let ids: Vec<&str> = catalog.iter().map(|topic| topic.id.as_str()).collect();
        assert_eq!(ids, vec!["history200", "biology110"]);
        assert_eq!(
            catalog.get("history200").map(|topic| topic.display_name.as_str()),
            Some("World History 200")
        );
    }

    #[test]
    fn empty_sc_catalog_macro_builds_empty_catalog() {
        let catalog: TopicCatalog = crate::sc_catalog![];
        assert!(catalog.is_empty());
    }
}
