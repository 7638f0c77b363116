//! Common `sprovider` imports for downstream crates.

pub use crate::{
    AnswerClient, AnswerError, AnswerErrorKind, AnswerFuture, AnswerPayload, AnswerText,
    DEFAULT_ANSWER_ENDPOINT, RelatedQuestion, ScriptedAnswerClient, SupportingChunk,
    parse_answer_body,
};
#[cfg(feature = "http-client")]
pub use crate::HttpAnswerClient;
pub use scommon::BoxFuture;
