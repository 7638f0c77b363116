//! Message exchange core: transcript, answer formatting, and the submit state machine.

mod catalog;
mod controller;
mod error;
mod format;
mod hooks;
mod transcript;
mod types;

pub mod prelude {
    pub use crate::{
        ExchangeController, ExchangeControllerBuilder, ExchangeError, ExchangeErrorKind,
        ExchangeHooks, ExchangePolicy, ExchangeState, Message, NoopExchangeHooks, Origin,
        SessionSnapshot, SubmitOutcome, SubmitRejection, Topic, TopicCatalog, Transcript,
        format_answer,
    };
    pub use scommon::{MessageId, TopicId};
    pub use sprovider::{AnswerClient, AnswerError, AnswerErrorKind, AnswerPayload};
}

pub use catalog::TopicCatalog;
pub use controller::{
    APOLOGY_TEXT, ExchangeController, ExchangeControllerBuilder, ExchangePolicy,
    THINKING_PLACEHOLDER,
};
pub use error::{ExchangeError, ExchangeErrorKind};
pub use format::{
    ADDITIONAL_CONTEXT_HEADER, RELATED_QUESTIONS_HEADER, SUPPORTING_INFORMATION_HEADER,
    UNEXPECTED_FORMAT_TEXT, format_answer,
};
pub use hooks::{ExchangeHooks, NoopExchangeHooks};
pub use scommon::{MessageId, TopicId};
pub use transcript::Transcript;
pub use types::{
    ExchangeState, Message, Origin, SessionSnapshot, SubmitOutcome, SubmitRejection, Topic,
};
