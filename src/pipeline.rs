//! End-to-end question flow: extract, prompt, complete, render.
//!
//! The flow aborts before any remote call if extraction fails or yields no
//! text. Rendering happens last, so a render failure never loses the reply
//! text itself; callers that want to retain it use [`answer`] directly.

use crate::completion::CompletionService;
use crate::error::{Error, Result};
use crate::extract::{ExtractOptions, PdfExtractor};
use crate::prompt::build_prompt;
use crate::render::{self, RenderOptions};

/// One completed question/answer exchange.
#[derive(Debug, Clone)]
pub struct Exchange {
    /// The question as asked.
    pub question: String,
    /// The model's reply text.
    pub reply: String,
    /// The reply rendered as a PDF.
    pub pdf: Vec<u8>,
}

/// Extract text from `document`, build the prompt, and obtain the reply.
///
/// # Errors
///
/// * [`Error::MalformedDocument`] if the document cannot be parsed
/// * [`Error::NoExtractableText`] if the capped pages yield no text; the
///   remote service is not called in that case
/// * [`Error::Upstream`] if the completion request fails
pub fn answer<S>(
    document: &[u8],
    question: &str,
    service: &S,
    options: &ExtractOptions,
) -> Result<String>
where
    S: CompletionService + ?Sized,
{
    let extractor = PdfExtractor::from_bytes_with_options(document, options.clone())?;
    let text = extractor.extract();
    if text.trim().is_empty() {
        return Err(Error::NoExtractableText);
    }

    let prompt = build_prompt(&text, question);
    log::debug!("prompt is {} characters", prompt.len());
    service.complete(&prompt)
}

/// Run the full flow and render the reply as a PDF.
pub fn ask<S>(
    document: &[u8],
    question: &str,
    service: &S,
    extract_options: &ExtractOptions,
    render_options: &RenderOptions,
) -> Result<Exchange>
where
    S: CompletionService + ?Sized,
{
    let reply = answer(document, question, service, extract_options)?;
    let pdf = render::to_pdf_with_options(&reply, render_options)?;

    Ok(Exchange {
        question: question.to_string(),
        reply,
        pdf,
    })
}
