use super::classify::classify;

/// The kind of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `#` to `######` followed by a space, on a single line.
    Heading,
    /// Fenced with ```` ``` ```` at both ends. A raw zone: no inline parsing inside.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... with no gaps.
    OrderedList,
    /// Fallback when no other kind matches.
    Paragraph,
}

/// A trimmed, classified chunk of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

impl Block {
    /// Classifies `text` and wraps it.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            kind: classify(&text),
            text,
        }
    }
}
