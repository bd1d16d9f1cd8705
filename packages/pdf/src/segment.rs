//! Paragraph classification.
//!
//! A paragraph is whatever sits between blank lines. After collapsing internal
//! whitespace, a paragraph that is an all-caps label ending in a colon
//! (`FACTS OF THE CASE:`) is a heading; anything else is body text.

use std::sync::LazyLock;

use regex::Regex;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z\s]+:$").expect("heading pattern is valid"));
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("list item pattern is valid"));

/// Indent applied to the first line of every body paragraph.
pub const BODY_INDENT: &str = "    ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Heading,
    Body,
}

/// One paragraph of the PDF body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Normalised text. Headings keep their colon; body text carries
    /// [`BODY_INDENT`].
    pub text: String,
}

/// One paragraph of the on-screen preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewBlock {
    /// Heading label with the colon removed.
    Heading(String),
    /// A paragraph starting with `1.`, `2.`, ...
    ListItem(String),
    Paragraph(String),
}

/// Collapse every whitespace run to one space and trim.
pub fn normalize_whitespace(paragraph: &str) -> String {
    paragraph.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn is_heading(normalized: &str) -> bool {
    HEADING.is_match(normalized)
}

fn paragraphs(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split("\n\n")
        .flat_map(|p| p.split("\r\n\r\n"))
        .map(normalize_whitespace)
        .filter(|p| !p.is_empty())
}

/// Split a generated document into heading and indented body segments.
///
/// Empty input produces no segments.
pub fn format_segments(text: &str) -> Vec<Segment> {
    paragraphs(text)
        .map(|p| {
            if is_heading(&p) {
                Segment {
                    kind: SegmentKind::Heading,
                    text: p,
                }
            } else {
                Segment {
                    kind: SegmentKind::Body,
                    text: format!("{BODY_INDENT}{p}"),
                }
            }
        })
        .collect()
}

/// Classify paragraphs for the dashboard preview.
pub fn preview_blocks(text: &str) -> Vec<PreviewBlock> {
    paragraphs(text)
        .map(|p| {
            if is_heading(&p) {
                PreviewBlock::Heading(p.replacen(':', "", 1))
            } else if LIST_ITEM.is_match(&p) {
                PreviewBlock::ListItem(p)
            } else {
                PreviewBlock::Paragraph(p)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_then_body() {
        let segments = format_segments("HEADING:\n\nsome lowercase text");
        assert_eq!(
            segments,
            vec![
                Segment {
                    kind: SegmentKind::Heading,
                    text: "HEADING:".to_string()
                },
                Segment {
                    kind: SegmentKind::Body,
                    text: "    some lowercase text".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_empty_input_has_no_segments() {
        assert!(format_segments("").is_empty());
        assert!(format_segments("  \n\n \n\n").is_empty());
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let segments = format_segments("  the   incident\n occurred\tat noon  ");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "    the incident occurred at noon");
    }

    #[test]
    fn test_multiline_heading_is_normalised_first() {
        let segments = format_segments("STATEMENT  OF\nFACTS:");
        assert_eq!(segments[0].kind, SegmentKind::Heading);
        assert_eq!(segments[0].text, "STATEMENT OF FACTS:");
    }

    #[test]
    fn test_heading_pattern_edges() {
        assert!(is_heading("FACTS OF THE CASE:"));
        assert!(is_heading("TO:"));
        // needs two characters before the colon
        assert!(!is_heading("A:"));
        assert!(!is_heading("Facts:"));
        assert!(!is_heading("FACTS"));
        assert!(!is_heading("FACTS: the rest"));
        assert!(!is_heading("SECTION 2:"));
    }

    #[test]
    fn test_crlf_paragraphs() {
        let segments = format_segments("TO:\r\n\r\nThe Station House Officer");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].kind, SegmentKind::Heading);
    }

    #[test]
    fn test_preview_blocks() {
        let blocks = preview_blocks("SUBJECT:\n\n1. First point\n\nPlain paragraph.");
        assert_eq!(
            blocks,
            vec![
                PreviewBlock::Heading("SUBJECT".to_string()),
                PreviewBlock::ListItem("1. First point".to_string()),
                PreviewBlock::Paragraph("Plain paragraph.".to_string()),
            ]
        );
    }
}
