//! Answer endpoint serde models and shape validation.

use serde::Deserialize;
#[cfg(feature = "http-client")]
use serde::Serialize;
use serde_json::Value;

use crate::{AnswerError, AnswerPayload, AnswerText, RelatedQuestion, SupportingChunk};

#[cfg(feature = "http-client")]
#[derive(Debug, Serialize)]
pub(crate) struct ApiAskRequest<'a> {
    pub question: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct ApiAnswerResponse {
    #[serde(default)]
    answer: Value,
    #[serde(default)]
    filtered_questions: Value,
    #[serde(default)]
    summarized_chunks: Value,
    #[serde(default)]
    error: Value,
}

#[cfg(feature = "http-client")]
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    #[serde(default)]
    detail: Value,
    #[serde(default)]
    error: Value,
}

/// Parses a success body into an [`AnswerPayload`].
///
/// Anything other than a JSON object is rejected as a malformed payload.
/// Inside the object every field is optional and entries of the wrong shape
/// are dropped rather than failing the whole answer.
///
/// ```rust
/// use sprovider::{AnswerErrorKind, parse_answer_body};
///
/// let payload = parse_answer_body(r#"{"answer": ["A", "B"], "summarized_chunks": ""}"#)
///     .expect("object body parses");
/// assert!(payload.answer.is_some());
/// assert!(payload.supporting_chunks.is_none());
///
/// let error = parse_answer_body("[1, 2]").expect_err("arrays are rejected");
/// assert_eq!(error.kind, AnswerErrorKind::MalformedPayload);
/// ```
pub fn parse_answer_body(body: &str) -> Result<AnswerPayload, AnswerError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|err| AnswerError::malformed_payload(format!("invalid JSON body: {err}")))?;

    if !value.is_object() {
        return Err(AnswerError::malformed_payload(format!(
            "expected a JSON object, got {}",
            value_type(&value)
        )));
    }

    let parsed: ApiAnswerResponse = serde_json::from_value(value)
        .map_err(|err| AnswerError::malformed_payload(err.to_string()))?;

    Ok(AnswerPayload::from(parsed))
}

#[cfg(feature = "http-client")]
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ApiErrorEnvelope>(body).ok()?;
    [parsed.detail, parsed.error]
        .into_iter()
        .find_map(|value| match value {
            Value::String(text) if !text.trim().is_empty() => Some(text),
            Value::Null => None,
            Value::String(_) => None,
            other => Some(other.to_string()),
        })
}

impl From<ApiAnswerResponse> for AnswerPayload {
    fn from(value: ApiAnswerResponse) -> Self {
        Self {
            answer: parse_answer_text(value.answer),
            related_questions: parse_related_questions(value.filtered_questions),
            supporting_chunks: parse_supporting_chunks(value.summarized_chunks),
            error: parse_error_field(value.error),
        }
    }
}

/// Any truthy non-string error is shown in its JSON form.
fn parse_error_field(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Null | Value::Bool(false) => None,
        other => Some(other.to_string()),
    }
}

fn parse_answer_text(value: Value) -> Option<AnswerText> {
    match value {
        Value::String(text) => Some(AnswerText::Single(text)),
        Value::Array(items) => Some(AnswerText::Parts(strings_only(items))),
        _ => None,
    }
}

fn parse_related_questions(value: Value) -> Option<Vec<RelatedQuestion>> {
    let Value::Array(items) = value else {
        return None;
    };

    Some(
        items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(mut fields) => match fields.remove("q") {
                    Some(Value::String(text)) => Some(RelatedQuestion::new(text)),
                    _ => None,
                },
                _ => None,
            })
            .collect(),
    )
}

fn parse_supporting_chunks(value: Value) -> Option<Vec<SupportingChunk>> {
    let Value::Array(items) = value else {
        return None;
    };

    Some(
        items
            .into_iter()
            .filter_map(|item| {
                let Value::Object(mut fields) = item else {
                    return None;
                };

                let question = match fields.remove("question") {
                    Some(Value::String(text)) => Some(text),
                    _ => None,
                };
                let search_results = match fields.remove("search_results") {
                    Some(Value::Array(results)) => strings_only(results),
                    _ => Vec::new(),
                };

                Some(SupportingChunk {
                    question,
                    search_results,
                })
            })
            .collect(),
    )
}

fn strings_only(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(text),
            _ => None,
        })
        .collect()
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
