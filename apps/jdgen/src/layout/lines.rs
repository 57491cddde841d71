//! Line classification — decides the paragraph style of each line of generated text.
//!
//! This is prefix matching only. Markdown emphasis, nested lists and other
//! bullet markers are not understood. Anything unrecognized renders as a
//! heading, including plain prose and list items numbered 6 or higher.

const NUMBERED_PREFIXES: [&str; 5] = ["1.", "2.", "3.", "4.", "5."];
const BULLET_PREFIX: &str = "- ";

/// Paragraph style of one non-blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Starts with "1." through "5."; body style, text kept as-is (trimmed).
    Numbered(String),
    /// Starts with "- "; body style with a bullet, marker stripped.
    Bullet(String),
    /// Everything else.
    Heading(String),
}

impl LineKind {
    pub fn text(&self) -> &str {
        match self {
            LineKind::Numbered(text) | LineKind::Bullet(text) | LineKind::Heading(text) => text,
        }
    }
}

/// Classifies a single line. Total: every input maps to exactly one variant.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if NUMBERED_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
        LineKind::Numbered(trimmed.to_string())
    } else if let Some(rest) = trimmed.strip_prefix(BULLET_PREFIX) {
        LineKind::Bullet(rest.trim_start().to_string())
    } else {
        LineKind::Heading(trimmed.to_string())
    }
}

/// Classifies every non-blank line of `text`, in order.
pub fn classify_text(text: &str) -> Vec<LineKind> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(classify_line)
        .collect()
}
