/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether every line starts with the prefix.
    pub fn matches(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips the prefix and at most one following space from a line.
    ///
    /// Lines without the prefix are returned unchanged.
    pub fn strip_prefix(line: &str) -> &str {
        match line.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }

    /// Joins the stripped lines of a quote block with single spaces.
    pub fn content(block: &str) -> String {
        block
            .split('\n')
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_single_space() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), "hello");
    }

    #[test]
    fn strip_without_space() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), "hello");
    }

    #[test]
    fn strip_only_one_space() {
        assert_eq!(BlockQuote::strip_prefix(">  indented"), " indented");
    }

    #[test]
    fn nested_marker_is_content() {
        assert_eq!(BlockQuote::strip_prefix(">> nested"), "> nested");
    }

    #[test]
    fn every_line_must_be_prefixed() {
        assert!(BlockQuote::matches("> a\n>b"));
        assert!(!BlockQuote::matches("> a\nb"));
    }

    #[test]
    fn content_joins_with_spaces() {
        assert_eq!(
            BlockQuote::content("> first line\n> second line"),
            "first line second line"
        );
    }
}
