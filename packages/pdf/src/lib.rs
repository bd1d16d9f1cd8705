//! # Document formatter: generated text to preview blocks and PDF
//!
//! Generated complaints arrive as one text blob with paragraphs separated by
//! blank lines. This crate turns that blob into something presentable:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`segment`] | Whitespace normalisation and paragraph classification: PDF [`Segment`]s (heading / indented body) and on-screen [`PreviewBlock`]s (heading / list item / paragraph). |
//! | [`layout`] | Word wrapping at a fixed column width and pagination onto A4 pages, yielding a pure [`DocumentLayout`]. |
//! | [`render`] | Draws a [`DocumentLayout`] with `printpdf`: title block, styled headings, body text and a footer caption on every page. |
//!
//! Everything except [`render`] is pure and allocation-only, so it is tested
//! directly; rendering is checked by inspecting the produced bytes.

pub mod error;
pub mod layout;
pub mod render;
pub mod segment;

pub use error::PdfError;
pub use layout::{layout_document, DocumentLayout, LineStyle, PageLayout, PlacedLine};
pub use render::{document_filename, encodable_text, render_pdf, todays_filename, PdfMetadata};
pub use segment::{format_segments, preview_blocks, PreviewBlock, Segment, SegmentKind};

/// Lay out and render `text` in one step.
pub fn export_pdf(text: &str, author: Option<&str>) -> Result<Vec<u8>, PdfError> {
    let text = render::encodable_text(text);
    let layout = layout_document(&format_segments(&text));
    render_pdf(&layout, &PdfMetadata::for_author(author))
}
