//! Remote answer client: wire model, transport contract, and HTTP implementation.
//!
//! ```rust
//! use sprovider::{AnswerError, AnswerErrorKind, AnswerPayload};
//!
//! let payload = AnswerPayload::default().with_error("Math Checker Error: offline");
//! assert_eq!(payload.error.as_deref(), Some("Math Checker Error: offline"));
//!
//! let error = AnswerError::malformed_payload("expected a JSON object");
//! assert_eq!(error.kind, AnswerErrorKind::MalformedPayload);
//! ```

mod client;
mod error;
#[cfg(feature = "http-client")]
mod http;
mod payload;
mod serde_api;

pub mod prelude;

pub use client::{AnswerClient, AnswerFuture, DEFAULT_ANSWER_ENDPOINT, ScriptedAnswerClient};
pub use error::{AnswerError, AnswerErrorKind};
#[cfg(feature = "http-client")]
pub use http::HttpAnswerClient;
pub use payload::{AnswerPayload, AnswerText, RelatedQuestion, SupportingChunk};
pub use serde_api::parse_answer_body;
