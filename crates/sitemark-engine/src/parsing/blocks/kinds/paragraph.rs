/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the fallback block when no other
/// kind matches. Internal newlines become single spaces before inline parsing.
pub struct Paragraph;

impl Paragraph {
    pub fn content(block: &str) -> String {
        block.split('\n').collect::<Vec<_>>().join(" ")
    }
}
