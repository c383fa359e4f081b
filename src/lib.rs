//! # askpdf
//!
//! Ask a natural-language question about a PDF and get the model's reply
//! back as a freshly generated PDF.
//!
//! The library has two self-contained cores and the glue between them:
//!
//! - **Text extraction**: pull the text of the first N pages of a PDF into
//!   one string ([`extract`]).
//! - **Text-to-PDF rendering**: wrap and paginate an arbitrary block of
//!   text onto A4 pages and emit the bytes ([`render`]).
//! - **Question flow**: extraction, prompt assembly, a chat-completion
//!   call, and rendering of the reply ([`pipeline`], [`completion`]).
//!
//! ## Quick Start
//!
//! ```no_run
//! use askpdf::{ChatCompletionClient, ExtractOptions, RenderOptions};
//!
//! fn main() -> askpdf::Result<()> {
//!     let document = std::fs::read("report.pdf")?;
//!     let client = ChatCompletionClient::new(std::env::var("GROQ_API_KEY").unwrap());
//!
//!     let exchange = askpdf::ask(
//!         &document,
//!         "Generate MCQs from this text",
//!         &client,
//!         &ExtractOptions::new().with_max_pages(9),
//!         &RenderOptions::default(),
//!     )?;
//!
//!     std::fs::write("Generated_Response.pdf", &exchange.pdf)?;
//!     Ok(())
//! }
//! ```
//!
//! Both cores are pure functions over their arguments: no shared state,
//! no ambient configuration, no retries.

pub mod completion;
pub mod detect;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod prompt;
pub mod render;

// Re-export commonly used types
pub use completion::{ChatCompletionClient, CompletionParams, CompletionService, DEFAULT_MODEL};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf_bytes, PdfFormat};
pub use error::{Error, Result};
pub use extract::{ExtractOptions, PdfExtractor, DEFAULT_MAX_PAGES};
pub use pipeline::{answer, ask, Exchange};
pub use prompt::build_prompt;
pub use render::{Layout, RenderOptions, DEFAULT_FONT_SIZE, DEFAULT_MARGIN};

use std::io::Read;
use std::path::Path;

/// Extract the text of the first `max_pages` pages of a PDF.
///
/// Pages are processed in ascending order and concatenated with no
/// separator. A `max_pages` beyond the document's page count simply
/// processes every page; a document with zero pages yields an empty
/// string.
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("document.pdf").unwrap();
/// let text = askpdf::extract_text_from_pdf(&data, 9).unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text_from_pdf(data: &[u8], max_pages: u32) -> Result<String> {
    let options = ExtractOptions::new().with_max_pages(max_pages);
    let extractor = PdfExtractor::from_bytes_with_options(data, options)?;
    Ok(extractor.extract())
}

/// Extract text from a PDF file on disk.
pub fn extract_text_from_file<P: AsRef<Path>>(path: P, max_pages: u32) -> Result<String> {
    let options = ExtractOptions::new().with_max_pages(max_pages);
    let extractor = PdfExtractor::open_with_options(path, options)?;
    Ok(extractor.extract())
}

/// Extract text from any readable PDF stream.
pub fn extract_text_from_reader<R: Read>(reader: R, max_pages: u32) -> Result<String> {
    let options = ExtractOptions::new().with_max_pages(max_pages);
    let extractor = PdfExtractor::from_reader_with_options(reader, options)?;
    Ok(extractor.extract())
}

/// Render a block of text as a paginated PDF with default font size and
/// margin, returning the document bytes.
///
/// # Example
///
/// ```
/// let bytes = askpdf::save_text_as_pdf("Hello\nWorld").unwrap();
/// assert!(bytes.starts_with(b"%PDF-"));
/// ```
pub fn save_text_as_pdf(text: &str) -> Result<Vec<u8>> {
    render::to_pdf(text)
}

/// Render a block of text as a paginated PDF with custom options.
///
/// # Example
///
/// ```
/// use askpdf::RenderOptions;
///
/// let options = RenderOptions::new().with_font_size(10.0).with_margin(20.0);
/// let bytes = askpdf::save_text_as_pdf_with_options("report text", &options).unwrap();
/// ```
pub fn save_text_as_pdf_with_options(text: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    render::to_pdf_with_options(text, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_rejects_garbage() {
        let result = extract_text_from_pdf(b"not a pdf at all", 6);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_text_as_pdf_magic_bytes() {
        let bytes = save_text_as_pdf("hello").unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_render_then_extract_round_trip() {
        let bytes = save_text_as_pdf("Hello World").unwrap();
        let text = extract_text_from_pdf(&bytes, 1).unwrap();
        assert!(text.contains("Hello World"));
    }

    #[test]
    fn test_extract_zero_max_pages_yields_empty() {
        let bytes = save_text_as_pdf("some content").unwrap();
        let text = extract_text_from_pdf(&bytes, 0).unwrap();
        assert!(text.is_empty());
    }
}
