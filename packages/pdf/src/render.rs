//! PDF rendering with `printpdf`.
//!
//! Every page carries the title block ("FORMAL LEGAL COMPLAINT" and a rule)
//! and the footer caption. Headings are bold Helvetica in
//! indigo, body text is 12pt Times.

use std::borrow::Cow;

use chrono::NaiveDate;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use crate::error::PdfError;
use crate::layout::{
    DocumentLayout, LineStyle, FOOTER_Y, MARGIN_LEFT, MARGIN_RIGHT, PAGE_HEIGHT, PAGE_WIDTH,
    RULE_Y, TITLE_Y,
};

pub const TITLE_TEXT: &str = "FORMAL LEGAL COMPLAINT";
pub const FOOTER_TEXT: &str = "Generated by LawPal - Confidential Legal Document";
pub const DEFAULT_AUTHOR: &str = "LawPal User";
/// Stands in for characters the builtin fonts cannot encode.
pub const REPLACEMENT: char = '?';

const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;
const FOOTER_SIZE: f32 = 10.0;
const RULE_THICKNESS_PT: f32 = 1.4;
const INDIGO: (u8, u8, u8) = (40, 53, 147);
const GREY: (u8, u8, u8) = (100, 100, 100);
const BLACK: (u8, u8, u8) = (0, 0, 0);
const LAYER: &str = "Body";

/// Document information dictionary entries.
#[derive(Clone, Debug, PartialEq)]
pub struct PdfMetadata {
    pub title: String,
    pub subject: String,
    pub author: String,
}

impl PdfMetadata {
    /// Metadata for a complaint exported by `author`, falling back to a
    /// generic author when the user has no name.
    pub fn for_author(author: Option<&str>) -> Self {
        let author = author
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_AUTHOR);
        Self {
            title: "Legal Complaint Document".to_string(),
            subject: "Formal Complaint Submission".to_string(),
            author: author.to_string(),
        }
    }
}

/// `Complaint_YYYY-MM-DD.pdf`
pub fn document_filename(date: NaiveDate) -> String {
    format!("Complaint_{}.pdf", date.format("%Y-%m-%d"))
}

/// Download filename stamped with today's UTC date.
pub fn todays_filename() -> String {
    document_filename(chrono::Utc::now().date_naive())
}

/// Characters WinAnsiEncoding places in 0x80..=0x9F.
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

fn is_win_ansi(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t' | ' '..='~' | '\u{a0}'..='\u{ff}')
        || WIN_ANSI_EXTRAS.contains(c)
}

/// Make `text` drawable with the builtin fonts, which only cover
/// WinAnsiEncoding. Currency signs get a spelled-out form; anything else
/// outside the encoding becomes [`REPLACEMENT`].
pub fn encodable_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_win_ansi) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut replaced = 0usize;
    for c in text.chars() {
        match c {
            c if is_win_ansi(c) => out.push(c),
            '₹' => out.push_str("Rs."),
            '₦' => out.push_str("NGN"),
            '₱' => out.push_str("PHP"),
            _ => {
                out.push(REPLACEMENT);
                replaced += 1;
            }
        }
    }
    if replaced > 0 {
        tracing::warn!("Replaced {} characters the PDF fonts cannot encode", replaced);
    }
    Cow::Owned(out)
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

/// Convert a top-down offset to PDF's bottom-up coordinate.
fn from_top(y: f32) -> Mm {
    Mm(PAGE_HEIGHT - y)
}

/// Approximate x offset that centres `text` on the page.
///
/// Builtin fonts carry no metrics here, so this uses an average glyph width of
/// half an em.
fn centered_x(text: &str, size_pt: f32) -> Mm {
    const PT_TO_MM: f32 = 0.3528;
    let width = text.chars().count() as f32 * size_pt * 0.5 * PT_TO_MM;
    Mm(((PAGE_WIDTH - width) / 2.0).max(0.0))
}

struct Fonts {
    heading: IndirectFontRef,
    body: IndirectFontRef,
    footer: IndirectFontRef,
}

fn draw_title_block(layer: &PdfLayerReference, fonts: &Fonts) {
    layer.set_fill_color(rgb(INDIGO));
    layer.use_text(
        TITLE_TEXT,
        TITLE_SIZE,
        centered_x(TITLE_TEXT, TITLE_SIZE),
        from_top(TITLE_Y),
        &fonts.heading,
    );
    layer.set_outline_color(rgb(INDIGO));
    layer.set_outline_thickness(RULE_THICKNESS_PT);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN_LEFT), from_top(RULE_Y)), false),
            (Point::new(Mm(MARGIN_RIGHT), from_top(RULE_Y)), false),
        ],
        is_closed: false,
    });
}

fn draw_footer(layer: &PdfLayerReference, fonts: &Fonts) {
    layer.set_fill_color(rgb(GREY));
    layer.use_text(
        FOOTER_TEXT,
        FOOTER_SIZE,
        centered_x(FOOTER_TEXT, FOOTER_SIZE),
        from_top(FOOTER_Y),
        &fonts.footer,
    );
}

/// Render a laid-out document to PDF bytes.
///
/// Line text should already be passed through [`encodable_text`].
pub fn render_pdf(layout: &DocumentLayout, meta: &PdfMetadata) -> Result<Vec<u8>, PdfError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(meta.title.as_str(), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
    let doc = doc
        .with_subject(meta.subject.clone())
        .with_author(meta.author.clone());

    let font = |f: BuiltinFont| {
        doc.add_builtin_font(f)
            .map_err(|e| PdfError::Font(format!("{e:?}")))
    };
    let fonts = Fonts {
        heading: font(BuiltinFont::HelveticaBold)?,
        body: font(BuiltinFont::TimesRoman)?,
        footer: font(BuiltinFont::Helvetica)?,
    };

    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
            doc.get_page(page_index).get_layer(layer_index)
        };

        draw_title_block(&layer, &fonts);

        for line in &page.lines {
            let (font, color) = match line.style {
                LineStyle::Heading => (&fonts.heading, INDIGO),
                LineStyle::Body => (&fonts.body, BLACK),
            };
            layer.set_fill_color(rgb(color));
            layer.use_text(
                line.text.as_str(),
                BODY_SIZE,
                Mm(MARGIN_LEFT),
                from_top(line.y),
                font,
            );
        }

        draw_footer(&layer, &fonts);
    }

    tracing::debug!("Rendered PDF with {} pages", layout.page_count());

    doc.save_to_bytes()
        .map_err(|e| PdfError::Write(format!("{e:?}")))
}
