//! Plain-text search within a template

/// Location of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMatch {
    /// Byte offset from the start of the text
    pub offset: usize,
    /// Zero-based line
    pub row: usize,
    /// Byte offset from the start of the line
    pub column: usize,
}

/// First occurrence of `needle` in `text`
pub fn find(text: &str, needle: &str) -> Option<TextMatch> {
    if needle.is_empty() {
        return None;
    }

    let offset = text.find(needle)?;
    let before = &text[..offset];
    let row = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);

    Some(TextMatch {
        offset,
        row,
        column: offset - line_start,
    })
}
