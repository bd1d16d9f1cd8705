use serde::{Deserialize, Serialize};

/// Characters of content shown on a history card before truncation.
pub const SNIPPET_CHARS: usize = 300;

/// A saved legal document as listed by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Document {
    /// The title, or `Document <last six characters of the id>`.
    pub fn display_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => {
                let chars: Vec<char> = self.id.chars().collect();
                let tail: String = chars[chars.len().saturating_sub(6)..].iter().collect();
                format!("Document {tail}")
            }
        }
    }

    /// Content cut to [`SNIPPET_CHARS`], with `...` when truncated.
    pub fn snippet(&self) -> (String, bool) {
        if self.content.chars().count() > SNIPPET_CHARS {
            let cut: String = self.content.chars().take(SNIPPET_CHARS).collect();
            (format!("{cut}..."), true)
        } else {
            (self.content.clone(), false)
        }
    }

    /// `createdAt` as `YYYY-MM-DD HH:MM`, or the raw value if it is not ISO-8601.
    pub fn created_label(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?.trim();
        if raw.len() >= 16 && raw.is_char_boundary(16) && raw.as_bytes()[10] == b'T' {
            Some(raw[..16].replacen('T', " ", 1))
        } else {
            Some(raw.to_string())
        }
    }
}

/// Body of the generate endpoint's response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedDocument {
    pub document: String,
}

/// Body for save and update calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentContent {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, content: &str) -> Document {
        Document {
            id: id.to_string(),
            content: content.to_string(),
            title: None,
            created_at: None,
        }
    }

    #[test]
    fn test_display_title_fallback() {
        assert_eq!(doc("65f0c2a1b3d4e5f6", "").display_title(), "Document d4e5f6");
        assert_eq!(doc("abc", "").display_title(), "Document abc");

        let mut titled = doc("abc", "");
        titled.title = Some("Theft report".to_string());
        assert_eq!(titled.display_title(), "Theft report");
    }

    #[test]
    fn test_snippet_truncates_long_content() {
        let long = "x".repeat(SNIPPET_CHARS + 5);
        let (text, truncated) = doc("1", &long).snippet();
        assert!(truncated);
        assert_eq!(text.len(), SNIPPET_CHARS + 3);
        assert!(text.ends_with("..."));

        let (text, truncated) = doc("1", "short").snippet();
        assert!(!truncated);
        assert_eq!(text, "short");
    }

    #[test]
    fn test_created_label() {
        let mut d = doc("1", "");
        assert_eq!(d.created_label(), None);

        d.created_at = Some("2024-03-07T14:30:12.000Z".to_string());
        assert_eq!(d.created_label().as_deref(), Some("2024-03-07 14:30"));

        d.created_at = Some("yesterday".to_string());
        assert_eq!(d.created_label().as_deref(), Some("yesterday"));
    }

    #[test]
    fn test_parse_mongo_style_list() {
        let docs: Vec<Document> = serde_json::from_str(
            r#"[{"_id":"1","content":"a","createdAt":"2024-01-01T00:00:00Z","user":"u1"}]"#,
        )
        .unwrap();
        assert_eq!(docs[0].id, "1");
        assert_eq!(docs[0].created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    }
}
