use std::sync::LazyLock;

use regex::Regex;

pub(crate) const UNTITLED: &str = "Untitled";
pub(crate) const DEFAULT_EXCERPT_LENGTH: usize = 150;

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap());
static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#+[ \t]+.+$").unwrap());
static EMPHASIS_MARKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*_`#]").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Metadata {
    pub title: String,
    pub excerpt: String,
}

impl Metadata {
    pub fn extract(content: &str, excerpt_length: usize) -> Self {
        Self {
            title: extract_title(content),
            excerpt: extract_excerpt(content, excerpt_length),
        }
    }
}

/// Text of the first `# ` heading, or [`UNTITLED`].
pub(crate) fn extract_title(content: &str) -> String {
    TITLE_PATTERN
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// First paragraph with headings and emphasis marks stripped, cut to
/// `max_length` characters. `...` is appended when it was cut.
pub(crate) fn extract_excerpt(content: &str, max_length: usize) -> String {
    let without_headings = HEADING_LINE.replace_all(content, "");
    let plain = EMPHASIS_MARKS.replace_all(&without_headings, "");

    let Some(paragraph) = plain.split("\n\n").map(str::trim).find(|p| !p.is_empty()) else {
        return String::new();
    };

    let mut excerpt: String = paragraph.chars().take(max_length).collect();
    if paragraph.chars().count() > max_length {
        excerpt.push_str("...");
    }
    excerpt
}
