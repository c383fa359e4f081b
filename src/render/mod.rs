//! Text-to-PDF rendering.
//!
//! Takes an arbitrary block of text (typically a model's reply), wraps it
//! to the page width, paginates it, and emits a PDF as bytes. Output is
//! deterministic: identical input produces byte-identical PDFs.

mod layout;
mod options;

pub use layout::{layout, Layout, LayoutPage, Line};
pub use options::{
    RenderOptions, A4_HEIGHT_PT, A4_WIDTH_PT, CHAR_WIDTH_FACTOR, DEFAULT_FONT_SIZE, DEFAULT_MARGIN,
    LEADING,
};

use std::io::BufWriter;

use printpdf::{BuiltinFont, CustomPdfConformance, Mm, PdfConformance, PdfDocument, Pt};
use time::OffsetDateTime;

use crate::error::{Error, Result};

/// Render `text` into a complete PDF document with default options.
pub fn to_pdf(text: &str) -> Result<Vec<u8>> {
    to_pdf_with_options(text, &RenderOptions::default())
}

/// Render `text` into a complete PDF document.
///
/// Lines are drawn top-down from `page_height - margin`, stepping by
/// `font_size + leading`; a new page starts whenever the next line would
/// fall below the bottom margin. Empty input produces a single page with
/// no drawn lines. Content length never fails; pagination absorbs it.
///
/// # Errors
///
/// Returns [`Error::Render`] if the drawing surface cannot be initialized
/// (for example, a margin that leaves no usable page area).
pub fn to_pdf_with_options(text: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    options.validate()?;
    let laid_out = layout(text, options);

    // Layout works in f64 points; printpdf's unit types are f32
    let width = Mm::from(Pt(options.page_width as f32));
    let height = Mm::from(Pt(options.page_height as f32));

    let (doc, first_page, first_layer) =
        PdfDocument::new(options.title.as_str(), width, height, "text layer");

    // Fixed dates and no XMP packet keep the output byte-stable across runs
    let doc = doc
        .with_conformance(PdfConformance::Custom(CustomPdfConformance {
            requires_icc_profile: false,
            requires_xmp_metadata: false,
            ..Default::default()
        }))
        .with_creation_date(OffsetDateTime::UNIX_EPOCH)
        .with_mod_date(OffsetDateTime::UNIX_EPOCH);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| Error::Render(e.to_string()))?;

    for (index, page) in laid_out.pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, format!("text layer {}", index + 1))
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for line in &page.lines {
            // Blank lines occupy a slot but draw nothing
            if line.text.is_empty() {
                continue;
            }
            layer.use_text(
                line.text.as_str(),
                options.font_size as f32,
                Mm::from(Pt(options.margin as f32)),
                Mm::from(Pt(line.y as f32)),
                &font,
            );
        }
    }

    log::debug!(
        "rendered {} page(s) at font size {}",
        laid_out.pages.len(),
        options.font_size
    );

    let mut bytes = Vec::new();
    {
        let mut writer = BufWriter::new(&mut bytes);
        doc.save(&mut writer)
            .map_err(|e| Error::Render(e.to_string()))?;
    }

    pin_trailer_id(&bytes)
}

/// Fixed trailer /ID entry, shared by both array elements.
const TRAILER_ID: &[u8] = b"askpdf-0000000000000000";

/// Rewrite the trailer /ID with a fixed value.
///
/// printpdf generates a fresh random /ID array on every save and offers
/// no setter for it, so the emitted bytes are reloaded, the /ID is
/// overwritten, and the document is serialized again. Everything else in
/// the output is already stable, which makes the final bytes identical
/// for identical input.
fn pin_trailer_id(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut doc =
        lopdf::Document::load_mem(bytes).map_err(|e| Error::Render(e.to_string()))?;
    doc.trailer.set(
        "ID",
        lopdf::Object::Array(vec![
            lopdf::Object::string_literal(TRAILER_ID),
            lopdf::Object::string_literal(TRAILER_ID),
        ]),
    );

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| Error::Render(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pdf_produces_pdf_bytes() {
        let bytes = to_pdf("Hello\nWorld").unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_to_pdf_empty_text_is_not_an_error() {
        let bytes = to_pdf("").unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_to_pdf_rejects_bad_geometry() {
        let options = RenderOptions::new().with_margin(1000.0);
        let result = to_pdf_with_options("hello", &options);
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_to_pdf_is_deterministic() {
        let text = "Same input, same bytes.\nEvery time.";
        let first = to_pdf(text).unwrap();
        let second = to_pdf(text).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_trailer_id_is_pinned() {
        // The /ID array must not vary between saves
        let bytes = to_pdf("stable").unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        let id = doc.trailer.get(b"ID").unwrap().as_array().unwrap();
        assert_eq!(id.len(), 2);
        for entry in id {
            assert_eq!(entry.as_str().unwrap(), TRAILER_ID);
        }
    }

    #[test]
    fn test_to_pdf_oversized_word_is_not_an_error() {
        let word = "z".repeat(500);
        let bytes = to_pdf(&word).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
