//! Structured answer payload received from the answering service.
//!
//! ```rust
//! use sprovider::{AnswerPayload, AnswerText};
//!
//! let payload = AnswerPayload::default()
//!     .with_answer_parts(["A", "B"])
//!     .with_related_question("What is a limit?");
//!
//! assert_eq!(payload.answer.as_ref().map(AnswerText::joined).as_deref(), Some("A B"));
//! assert_eq!(payload.related_questions.as_ref().map(Vec::len), Some(1));
//! ```

/// Primary answer, sent either as one string or as ordered fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerText {
    Single(String),
    Parts(Vec<String>),
}

impl AnswerText {
    pub fn joined(&self) -> String {
        match self {
            Self::Single(text) => text.clone(),
            Self::Parts(parts) => parts.join(" "),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(text) => text.is_empty(),
            Self::Parts(parts) => parts.iter().all(String::is_empty),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedQuestion {
    pub text: String,
}

impl RelatedQuestion {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SupportingChunk {
    pub question: Option<String>,
    pub search_results: Vec<String>,
}

impl SupportingChunk {
    pub fn new<I, S>(search_results: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question: None,
            search_results: search_results.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }
}

/// Answer body as accepted by the client. Absent list fields stay `None`;
/// malformed entries have already been dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerPayload {
    pub answer: Option<AnswerText>,
    pub related_questions: Option<Vec<RelatedQuestion>>,
    pub supporting_chunks: Option<Vec<SupportingChunk>>,
    pub error: Option<String>,
}

impl AnswerPayload {
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(AnswerText::Single(answer.into()));
        self
    }

    pub fn with_answer_parts<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answer = Some(AnswerText::Parts(
            parts.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn with_related_question(mut self, text: impl Into<String>) -> Self {
        self.related_questions
            .get_or_insert_with(Vec::new)
            .push(RelatedQuestion::new(text));
        self
    }

    pub fn with_supporting_chunk(mut self, chunk: SupportingChunk) -> Self {
        self.supporting_chunks
            .get_or_insert_with(Vec::new)
            .push(chunk);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn has_related_questions(&self) -> bool {
        self.related_questions
            .as_ref()
            .is_some_and(|questions| !questions.is_empty())
    }

    pub fn has_supporting_chunks(&self) -> bool {
        self.supporting_chunks
            .as_ref()
            .is_some_and(|chunks| !chunks.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_text_joins_parts_with_single_space() {
        let parts = AnswerText::Parts(vec!["first".into(), "second".into()]);
        assert_eq!(parts.joined(), "first second");
        assert!(!parts.is_empty());

        assert!(AnswerText::Parts(Vec::new()).is_empty());
        assert!(AnswerText::Single(String::new()).is_empty());
    }

    #[test]
    fn builder_helpers_accumulate_lists() {
        let payload = AnswerPayload::default()
            .with_related_question("one")
            .with_related_question("two")
            .with_supporting_chunk(SupportingChunk::new(["*fact*"]).with_question("one"));

        assert!(payload.has_related_questions());
        assert!(payload.has_supporting_chunks());
        assert_eq!(
            payload.related_questions,
            Some(vec![RelatedQuestion::new("one"), RelatedQuestion::new("two")])
        );
        assert_eq!(
            payload.supporting_chunks.as_ref().and_then(|chunks| chunks[0].question.as_deref()),
            Some("one")
        );
    }

    #[test]
    fn empty_lists_do_not_count_as_content() {
        let payload = AnswerPayload {
            related_questions: Some(Vec::new()),
            supporting_chunks: Some(Vec::new()),
            ..AnswerPayload::default()
        };

        assert!(!payload.has_related_questions());
        assert!(!payload.has_supporting_chunks());
    }
}
