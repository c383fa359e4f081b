//! Rendering options and page geometry.

use crate::error::{Error, Result};

/// Default font size in points.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Default page margin in points, applied on all four sides.
pub const DEFAULT_MARGIN: f64 = 15.0;

/// Fixed vertical spacing between consecutive lines, beyond the font size.
pub const LEADING: f64 = 5.0;

/// Empirical average glyph width as a fraction of the font size.
///
/// This approximates Helvetica's advance width; it is a heuristic, not
/// exact text measurement, and deliberately so.
pub const CHAR_WIDTH_FACTOR: f64 = 0.6;

/// A4 page width in points.
pub const A4_WIDTH_PT: f64 = 595.276;

/// A4 page height in points.
pub const A4_HEIGHT_PT: f64 = 841.89;

/// Options for rendering text into a PDF.
///
/// Font size and margin are caller-configurable; page geometry is fixed
/// for a given options value and defaults to A4.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Font size in points.
    pub font_size: f64,

    /// Margin in points, applied on all four sides.
    pub margin: f64,

    /// Page width in points.
    pub page_width: f64,

    /// Page height in points.
    pub page_height: f64,

    /// Document title written into the PDF metadata.
    pub title: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the margin in points.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the page size in points.
    pub fn with_page_size(mut self, width: f64, height: f64) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Vertical distance between consecutive line baselines.
    pub fn line_height(&self) -> f64 {
        self.font_size + LEADING
    }

    /// Maximum number of characters per physical line.
    pub fn max_chars_per_line(&self) -> usize {
        let usable = self.page_width - 2.0 * self.margin;
        let chars = (usable / (self.font_size * CHAR_WIDTH_FACTOR)).floor() as usize;
        chars.max(1)
    }

    /// Number of physical lines that fit on one page.
    pub fn lines_per_page(&self) -> usize {
        let usable = self.page_height - 2.0 * self.margin;
        let lines = (usable / self.line_height()).floor() as usize;
        lines.max(1)
    }

    /// Validate the drawing-surface configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.font_size > 0.0) {
            return Err(Error::Render(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }
        if self.margin < 0.0 {
            return Err(Error::Render(format!(
                "margin must not be negative, got {}",
                self.margin
            )));
        }
        if !(self.page_width > 0.0) || !(self.page_height > 0.0) {
            return Err(Error::Render(format!(
                "page size must be positive, got {}x{}",
                self.page_width, self.page_height
            )));
        }
        if 2.0 * self.margin >= self.page_width || 2.0 * self.margin >= self.page_height {
            return Err(Error::Render(format!(
                "margin {} leaves no usable area on a {}x{} page",
                self.margin, self.page_width, self.page_height
            )));
        }
        Ok(())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            margin: DEFAULT_MARGIN,
            page_width: A4_WIDTH_PT,
            page_height: A4_HEIGHT_PT,
            title: "Generated Response".to_string(),
        }
    }
}
