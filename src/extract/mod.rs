//! PDF text extraction using lopdf.
//!
//! Extracts the text of the first `max_pages` pages of a document into a
//! single string, with no separator inserted between pages. Extraction is
//! purely functional over the input bytes; the document is never modified.

mod options;

pub use options::{ExtractOptions, DEFAULT_MAX_PAGES};

use std::io::Read;
use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::detect::detect_format_from_path;
use crate::error::{Error, Result};

/// PDF text extractor.
///
/// # Example
///
/// ```no_run
/// use askpdf::extract::{ExtractOptions, PdfExtractor};
///
/// let options = ExtractOptions::new().with_max_pages(9);
/// let extractor = PdfExtractor::open_with_options("document.pdf", options)?;
/// let text = extractor.extract();
/// # Ok::<(), askpdf::Error>(())
/// ```
pub struct PdfExtractor {
    doc: LopdfDocument,
    options: ExtractOptions,
}

impl PdfExtractor {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ExtractOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ExtractOptions) -> Result<Self> {
        let path = path.as_ref();

        // Verify it's a PDF before handing it to the parser
        detect_format_from_path(path)?;

        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Ok(Self::with_doc(doc, options))
    }

    /// Load a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ExtractOptions::default())
    }

    /// Load a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ExtractOptions) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Ok(Self::with_doc(doc, options))
    }

    /// Load a PDF from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ExtractOptions::default())
    }

    /// Load a PDF from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(
        mut reader: R,
        options: ExtractOptions,
    ) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    fn with_doc(doc: LopdfDocument, options: ExtractOptions) -> Self {
        if doc.is_encrypted() {
            log::warn!("document is encrypted; extracted text may be unusable");
        }
        Self { doc, options }
    }

    /// Total number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// PDF version string of the document (e.g., "1.7").
    pub fn version(&self) -> String {
        self.doc.version.clone()
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// Extract the text of the first `min(max_pages, page_count)` pages,
    /// in ascending page order, concatenated with no separator.
    ///
    /// A document with zero pages yields an empty string. A page whose
    /// content yields no text contributes nothing; this is common for
    /// scanned or image-only pages and is not an error.
    pub fn extract(&self) -> String {
        let pages = self.doc.get_pages();
        let limit = (self.options.max_pages as usize).min(pages.len());

        let mut text = String::new();
        for (&page_num, _) in pages.iter().take(limit) {
            match self.doc.extract_text(&[page_num]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    log::warn!("no text extracted from page {}: {}", page_num, e);
                }
            }
        }

        log::debug!(
            "extracted {} characters from {} of {} pages",
            text.len(),
            limit,
            pages.len()
        );
        text
    }
}
