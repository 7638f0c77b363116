//! Rendering of answer payloads into display text.
//!
//! ```rust
//! use schat::{ADDITIONAL_CONTEXT_HEADER, format_answer};
//! use sprovider::AnswerPayload;
//!
//! let text = format_answer(&AnswerPayload::default().with_answer_parts(["A", "B"]));
//! assert_eq!(text, format!("A B\n\n{ADDITIONAL_CONTEXT_HEADER}"));
//!
//! assert_eq!(format_answer(&AnswerPayload::default().with_error("boom")), "boom");
//! ```

use sprovider::AnswerPayload;

pub const ADDITIONAL_CONTEXT_HEADER: &str = "📚 Additional Context:\n\n";
pub const RELATED_QUESTIONS_HEADER: &str = "🔍 Related Questions Analyzed:\n";
pub const SUPPORTING_INFORMATION_HEADER: &str = "📖 Supporting Information:\n";
pub const UNEXPECTED_FORMAT_TEXT: &str = "Sorry, I received an unexpected response format.";

const BULLET: &str = "•";

/// Formats an answer payload. Never fails; a payload with nothing to show
/// yields [`UNEXPECTED_FORMAT_TEXT`].
pub fn format_answer(payload: &AnswerPayload) -> String {
    if let Some(error) = payload.error.as_deref().filter(|error| !error.is_empty()) {
        return error.to_string();
    }

    let mut text = String::new();

    if let Some(answer) = payload.answer.as_ref().filter(|answer| !answer.is_empty()) {
        text.push_str(&answer.joined());
        text.push_str("\n\n");
    }

    text.push_str(ADDITIONAL_CONTEXT_HEADER);

    if let Some(questions) = payload
        .related_questions
        .as_deref()
        .filter(|questions| !questions.is_empty())
    {
        text.push_str(RELATED_QUESTIONS_HEADER);
        for question in questions {
            text.push_str(BULLET);
            text.push(' ');
            text.push_str(&question.text);
            text.push('\n');
        }
        text.push('\n');
    }

    if let Some(chunks) = payload
        .supporting_chunks
        .as_deref()
        .filter(|chunks| !chunks.is_empty())
    {
        text.push_str(SUPPORTING_INFORMATION_HEADER);
        for result in chunks.iter().flat_map(|chunk| chunk.search_results.iter()) {
            text.push_str(&normalize_search_result(result));
            text.push_str("\n\n");
        }
    }

    if text == ADDITIONAL_CONTEXT_HEADER {
        return UNEXPECTED_FORMAT_TEXT.to_string();
    }

    text
}

/// Emphasis markers become bullets.
fn normalize_search_result(result: &str) -> String {
    result.replace('*', BULLET).trim().to_string()
}

#[cfg(test)]
mod tests {
    use sprovider::{AnswerPayload, SupportingChunk};

    use super::*;

    #[test]
    fn error_wins_verbatim() {
        let payload = AnswerPayload::default()
            .with_answer("ignored")
            .with_related_question("ignored too")
            .with_error("boom");

        assert_eq!(format_answer(&payload), "boom");
    }

    #[test]
    fn empty_error_falls_through_to_normal_formatting() {
        let payload = AnswerPayload::default().with_error("").with_answer("fine");
        assert_eq!(format_answer(&payload), format!("fine\n\n{ADDITIONAL_CONTEXT_HEADER}"));
    }

    #[test]
    fn absent_everything_yields_fallback() {
        assert_eq!(format_answer(&AnswerPayload::default()), UNEXPECTED_FORMAT_TEXT);

        let empty_lists = AnswerPayload {
            related_questions: Some(Vec::new()),
            supporting_chunks: Some(Vec::new()),
            ..AnswerPayload::default()
        };
        assert_eq!(format_answer(&empty_lists), UNEXPECTED_FORMAT_TEXT);
    }

    #[test]
    fn blank_answer_counts_as_absent() {
        let payload = AnswerPayload::default().with_answer("");
        assert_eq!(format_answer(&payload), UNEXPECTED_FORMAT_TEXT);

        let payload = AnswerPayload::default().with_answer_parts(Vec::<String>::new());
        assert_eq!(format_answer(&payload), UNEXPECTED_FORMAT_TEXT);
    }

    #[test]
    fn answer_parts_join_before_header() {
        let text = format_answer(&AnswerPayload::default().with_answer_parts(["A", "B"]));
        assert!(text.starts_with("A B"));
        assert_eq!(text, format!("A B\n\n{ADDITIONAL_CONTEXT_HEADER}"));
    }

    #[test]
    fn related_questions_only_renders_bullets() {
        let payload = AnswerPayload::default()
            .with_related_question("What is a limit?")
            .with_related_question("What is continuity?");

        assert_eq!(
            format_answer(&payload),
            format!(
                "{ADDITIONAL_CONTEXT_HEADER}{RELATED_QUESTIONS_HEADER}• What is a limit?\n• What is continuity?\n\n"
            )
        );
    }

    #[test]
    fn supporting_chunks_normalize_emphasis_and_trim() {
        let payload = AnswerPayload::default()
            .with_answer("Answer.")
            .with_supporting_chunk(SupportingChunk::new(["  *Newton* first law \n", "**F = ma**"]))
            .with_supporting_chunk(SupportingChunk::new(["same", "same"]));

        assert_eq!(
            format_answer(&payload),
            format!(
                "Answer.\n\n{ADDITIONAL_CONTEXT_HEADER}{SUPPORTING_INFORMATION_HEADER}•Newton• first law\n\n••F = ma••\n\nsame\n\nsame\n\n"
            )
        );
    }

    #[test]
    fn full_payload_keeps_section_order() {
        let payload = AnswerPayload::default()
            .with_answer("Final.")
            .with_related_question("Sub?")
            .with_supporting_chunk(SupportingChunk::new(["Fact"]).with_question("Sub?"));

        let text = format_answer(&payload);
        let answer = text.find("Final.").expect("answer present");
        let header = text.find(ADDITIONAL_CONTEXT_HEADER).expect("header present");
        let related = text.find(RELATED_QUESTIONS_HEADER).expect("related present");
        let supporting = text
            .find(SUPPORTING_INFORMATION_HEADER)
            .expect("supporting present");

        assert!(answer < header && header < related && related < supporting);
        assert!(text.ends_with("Fact\n\n"));
    }

    #[test]
    fn chunks_without_results_still_count_as_content() {
        let payload = AnswerPayload::default().with_supporting_chunk(SupportingChunk::default());
        assert_eq!(
            format_answer(&payload),
            format!("{ADDITIONAL_CONTEXT_HEADER}{SUPPORTING_INFORMATION_HEADER}")
        );
    }
}
