//! Line wrapping and pagination.
//!
//! Pure text layout, kept separate from PDF byte emission so the wrapping
//! and pagination behavior can be tested without parsing PDF output.
//!
//! Terminology: a *logical line* is a segment of the input delimited by
//! newline characters; a *physical line* is a wrapped segment of a logical
//! line that fits the page's usable width.

use super::options::RenderOptions;

/// A physical line placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Line content. Empty for blank logical lines, which still occupy
    /// a vertical slot.
    pub text: String,

    /// Baseline position in points, measured from the bottom of the page.
    pub y: f64,
}

/// One laid-out page.
#[derive(Debug, Clone, Default)]
pub struct LayoutPage {
    /// Lines on this page, top to bottom.
    pub lines: Vec<Line>,
}

/// The complete layout of a block of text.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Pages in order. Never empty; empty input produces one blank page.
    pub pages: Vec<LayoutPage>,
}

impl Layout {
    /// Total number of physical lines across all pages.
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }
}

/// Lay out `text` into wrapped, paginated lines.
///
/// Empty input produces a single page with no lines. Blank logical lines
/// are preserved as empty physical lines that still advance the cursor.
pub fn layout(text: &str, options: &RenderOptions) -> Layout {
    let max_chars = options.max_chars_per_line();
    let capacity = options.lines_per_page();
    let line_height = options.line_height();
    let top = options.page_height - options.margin;

    let mut physical: Vec<String> = Vec::new();
    if !text.is_empty() {
        for logical in text.split('\n') {
            let logical = logical.strip_suffix('\r').unwrap_or(logical);
            wrap_line(logical, max_chars, &mut physical);
        }
    }

    let mut pages = Vec::new();
    if physical.is_empty() {
        pages.push(LayoutPage::default());
    } else {
        for chunk in physical.chunks(capacity) {
            let lines = chunk
                .iter()
                .enumerate()
                .map(|(slot, text)| Line {
                    text: text.clone(),
                    y: top - slot as f64 * line_height,
                })
                .collect();
            pages.push(LayoutPage { lines });
        }
    }

    Layout { pages }
}

/// Greedily wrap one logical line into physical lines of at most
/// `max_chars` characters, breaking at whitespace.
///
/// A single word longer than `max_chars` is emitted as one overflowing
/// physical line rather than split.
fn wrap_line(logical: &str, max_chars: usize, out: &mut Vec<String>) {
    if logical.trim().is_empty() {
        out.push(String::new());
        return;
    }

    let mut current = String::new();
    let mut current_len = 0usize;

    for word in logical.split_whitespace() {
        let word_len = word.chars().count();
        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
}
