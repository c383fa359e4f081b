//! Integration tests for text-to-PDF rendering.
//!
//! Emitted bytes are re-parsed with lopdf to check page counts and to
//! read the drawn text back out.

use lopdf::Document;

use askpdf::render::{self, RenderOptions};
use askpdf::{save_text_as_pdf, save_text_as_pdf_with_options, Error};

fn page_count(pdf: &[u8]) -> usize {
    let doc = Document::load_mem(pdf).expect("rendered output parses as PDF");
    doc.get_pages().len()
}

#[test]
fn empty_text_renders_a_single_blank_page() {
    let pdf = save_text_as_pdf("").unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
    assert_eq!(page_count(&pdf), 1);
}

#[test]
fn two_short_lines_stay_on_one_page() {
    let pdf = save_text_as_pdf("Hello\nWorld").unwrap();
    assert_eq!(page_count(&pdf), 1);
}

#[test]
fn rendering_is_byte_identical_across_calls() {
    let text = "Deterministic output matters.\n\nNo timestamps, no random ids.";
    let first = save_text_as_pdf(text).unwrap();
    let second = save_text_as_pdf(text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn page_count_follows_line_capacity() {
    let options = RenderOptions::default();
    let capacity = options.lines_per_page();

    for (lines, expected_pages) in [
        (1, 1),
        (capacity, 1),
        (capacity + 1, 2),
        (2 * capacity, 2),
        (2 * capacity + 1, 3),
    ] {
        let text = vec!["line"; lines].join("\n");
        let pdf = save_text_as_pdf_with_options(&text, &options).unwrap();
        assert_eq!(
            page_count(&pdf),
            expected_pages,
            "{} lines should fill {} page(s)",
            lines,
            expected_pages
        );
    }
}

#[test]
fn oversized_single_word_renders_without_error() {
    let word = "a".repeat(500);
    let pdf = save_text_as_pdf(&word).unwrap();
    assert_eq!(page_count(&pdf), 1);
}

#[test]
fn long_text_paginates_instead_of_failing() {
    let text = "the quick brown fox jumps over the lazy dog ".repeat(500);
    let pdf = save_text_as_pdf(&text).unwrap();
    assert!(page_count(&pdf) > 1);
}

#[test]
fn custom_font_size_changes_capacity() {
    // Bigger glyphs, fewer lines per page, more pages for the same text
    let small = RenderOptions::new().with_font_size(10.0);
    let large = RenderOptions::new().with_font_size(24.0);
    assert!(large.lines_per_page() < small.lines_per_page());

    let text = vec!["line"; small.lines_per_page()].join("\n");
    let small_pdf = save_text_as_pdf_with_options(&text, &small).unwrap();
    let large_pdf = save_text_as_pdf_with_options(&text, &large).unwrap();
    assert_eq!(page_count(&small_pdf), 1);
    assert!(page_count(&large_pdf) > 1);
}

#[test]
fn invalid_geometry_is_a_render_error() {
    let options = RenderOptions::new().with_page_size(100.0, 100.0).with_margin(60.0);
    let result = save_text_as_pdf_with_options("hello", &options);
    assert!(matches!(result, Err(Error::Render(_))));
}

#[test]
fn drawn_text_can_be_read_back() {
    let pdf = save_text_as_pdf("Rust in production").unwrap();
    let text = askpdf::extract_text_from_pdf(&pdf, 1).unwrap();
    assert!(text.contains("Rust in production"));
}

#[test]
fn layout_is_exposed_for_inspection() {
    let options = RenderOptions::default();
    let layout = render::layout("one\ntwo\nthree", &options);
    assert_eq!(layout.pages.len(), 1);
    assert_eq!(layout.line_count(), 3);
}
