//! Extraction options and configuration.

/// Default page cap, matching the upload flow this library was built for.
pub const DEFAULT_MAX_PAGES: u32 = 6;

/// Options for extracting text from PDF documents.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Maximum number of pages to extract, counted from the first page.
    ///
    /// A value larger than the document's page count is not an error;
    /// every page is processed.
    pub max_pages: u32,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page cap.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}
