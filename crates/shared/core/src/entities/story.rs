use serde::{Deserialize, Serialize};

/// A news item shown in the breaking banner and the news panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub body: String,
}

impl Story {
    /// Title used when a story only carries a body
    pub const PLACEHOLDER_TITLE: &'static str = "Untitled";

    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Trim both fields; `None` when nothing is left to show.
    pub fn sanitized(title: &str, body: &str) -> Option<Self> {
        let title = title.trim();
        let body = body.trim();
        if title.is_empty() && body.is_empty() {
            return None;
        }
        let title = if title.is_empty() {
            Self::PLACEHOLDER_TITLE
        } else {
            title
        };
        Some(Self::new(title, body))
    }

    /// Single-line banner text
    pub fn headline(&self) -> String {
        format!("{} — {}", self.title, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_drops_blank_story() {
        assert_eq!(Story::sanitized("  ", "\t"), None);
    }

    #[test]
    fn test_sanitize_fills_placeholder_title() {
        let story = Story::sanitized("", " body only ").unwrap();
        assert_eq!(story.title, "Untitled");
        assert_eq!(story.body, "body only");
    }

    #[test]
    fn test_headline_joins_title_and_body() {
        let story = Story::new("SAM Index edges higher", "Traders cite strong latte demand");
        assert_eq!(
            story.headline(),
            "SAM Index edges higher — Traders cite strong latte demand"
        );
    }
}
