//! Prompt assembly for the completion service.

/// Build the user prompt sent to the completion service from the extracted
/// document text and the caller's question.
pub fn build_prompt(pdf_text: &str, question: &str) -> String {
    format!(
        "The following is the text extracted from the PDF:\n{}\n\n{}",
        pdf_text, question
    )
}
