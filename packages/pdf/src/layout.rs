//! # Pagination
//!
//! Places segments on A4 pages. Distances are millimetres measured from the
//! top edge, matching how the page is read; [`crate::render`] flips them for
//! PDF's bottom-up coordinates.
//!
//! | Constant | Value | Meaning |
//! |----------|-------|---------|
//! | [`BODY_START_Y`] | 35 | first body line on every page, below the title block |
//! | [`HEADING_GAP`] | 10 | space before a heading that is not the first line |
//! | [`HEADING_ADVANCE`] | 10 | advance after a heading line |
//! | [`LINE_ADVANCE`] | 7 | advance after a body or blank line |
//! | [`PAGE_BREAK_Y`] | 270 | past this offset the next line starts a new page |
//!
//! Segments are separated by one blank line. Pages are opened lazily, so a
//! break after the final line never produces a trailing empty page.

use crate::segment::{Segment, SegmentKind, BODY_INDENT};

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN_LEFT: f32 = 20.0;
pub const MARGIN_RIGHT: f32 = 190.0;
pub const TITLE_Y: f32 = 20.0;
pub const RULE_Y: f32 = 25.0;
pub const FOOTER_Y: f32 = 285.0;
pub const BODY_START_Y: f32 = 35.0;
pub const HEADING_GAP: f32 = 10.0;
pub const HEADING_ADVANCE: f32 = 10.0;
pub const LINE_ADVANCE: f32 = 7.0;
pub const PAGE_BREAK_Y: f32 = 270.0;

/// Characters per line for 12pt Times across the 170mm text column.
pub const WRAP_COLUMNS: usize = 90;
/// Characters per heading line. 12pt Helvetica-Bold capitals run about 3mm each.
pub const HEADING_COLUMNS: usize = 55;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Heading,
    Body,
}

/// A single line of text at a fixed vertical offset.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub style: LineStyle,
    /// Baseline offset from the top edge, in millimetres.
    pub y: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

/// Every page of a document with its lines placed.
///
/// An empty body still has one page so the title block and footer render.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentLayout {
    pub pages: Vec<PageLayout>,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }
}

/// Greedy word wrap. `first_prefix` is prepended to the first line only and
/// counts towards its width. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize, first_prefix: &str) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = first_prefix.to_string();
    let mut current_len = first_prefix.chars().count();
    let mut has_word = false;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let sep = usize::from(has_word);
            if current_len + sep + word.len() <= width {
                if has_word {
                    current.push(' ');
                }
                current.extend(word.iter());
                current_len += sep + word.len();
                has_word = true;
                break;
            }
            if has_word {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
                has_word = false;
                continue;
            }
            // Word alone does not fit the remaining space: hard split.
            let room = width.saturating_sub(current_len).max(1);
            let rest = word.split_off(room.min(word.len()));
            current.extend(word.iter());
            lines.push(std::mem::take(&mut current));
            current_len = 0;
            has_word = false;
            if rest.is_empty() {
                break;
            }
            word = rest;
        }
    }

    if has_word {
        lines.push(current);
    }
    lines
}

struct Cursor {
    pages: Vec<PageLayout>,
    y: f32,
    needs_page: bool,
    first_line: bool,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![PageLayout::default()],
            y: BODY_START_Y,
            needs_page: false,
            first_line: true,
        }
    }

    fn open_page_if_needed(&mut self) {
        if self.needs_page {
            self.pages.push(PageLayout::default());
            self.y = BODY_START_Y;
            self.needs_page = false;
        }
    }

    fn place(&mut self, text: String, style: LineStyle) {
        self.open_page_if_needed();
        if style == LineStyle::Heading && !self.first_line {
            self.y += HEADING_GAP;
        }
        let y = self.y;
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(PlacedLine { text, style, y });
        }
        self.y += match style {
            LineStyle::Heading => HEADING_ADVANCE,
            LineStyle::Body => LINE_ADVANCE,
        };
        self.after_line();
    }

    fn blank(&mut self) {
        if self.needs_page {
            // no blank line at the top of a fresh page
            self.open_page_if_needed();
            return;
        }
        self.y += LINE_ADVANCE;
        self.after_line();
    }

    fn after_line(&mut self) {
        self.first_line = false;
        if self.y > PAGE_BREAK_Y {
            self.needs_page = true;
        }
    }
}

/// Wrap and paginate segments.
pub fn layout_document(segments: &[Segment]) -> DocumentLayout {
    let mut cursor = Cursor::new();

    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            cursor.blank();
        }
        match segment.kind {
            SegmentKind::Heading => {
                for line in wrap_text(&segment.text, HEADING_COLUMNS, "") {
                    cursor.place(line, LineStyle::Heading);
                }
            }
            SegmentKind::Body => {
                let body = segment.text.strip_prefix(BODY_INDENT).unwrap_or(&segment.text);
                for line in wrap_text(body, WRAP_COLUMNS, BODY_INDENT) {
                    cursor.place(line, LineStyle::Body);
                }
            }
        }
    }

    DocumentLayout {
        pages: cursor.pages,
    }
}
