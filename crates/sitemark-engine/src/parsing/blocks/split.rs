use super::types::Block;

/// Splits a document into trimmed, non-empty blocks.
///
/// Blocks are separated by one or more blank lines, where a line counts as
/// blank if it is empty after trimming. Newlines inside a block are kept.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    let mut acc = BlockAccumulator::new();
    for line in markdown.lines() {
        acc.push(line);
    }
    let blocks = acc.finish();
    log::debug!("split document into {} blocks", blocks.len());
    blocks
}

/// Splits and classifies a document in one step.
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    split_blocks(markdown).into_iter().map(Block::new).collect()
}

/// Collects lines into blocks, flushing on each blank line.
struct BlockAccumulator<'a> {
    current: Vec<&'a str>,
    out: Vec<String>,
}

impl<'a> BlockAccumulator<'a> {
    fn new() -> Self {
        Self {
            current: vec![],
            out: vec![],
        }
    }

    fn push(&mut self, line: &'a str) {
        if line.trim().is_empty() {
            self.flush();
        } else {
            self.current.push(line);
        }
    }

    fn finish(mut self) -> Vec<String> {
        // EOF flush
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let joined = self.current.join("\n");
        self.current.clear();

        let trimmed = joined.trim();
        if !trimmed.is_empty() {
            self.out.push(trimmed.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::BlockKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_blank_lines_and_keeps_inner_newlines() {
        let md = "
    This is **bolded** paragraph

    This is another paragraph with _italic_ text and `code` here
    This is the same paragraph on a new line

    - This is a list
    - with items
    ";
        assert_eq!(
            split_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\n    This is the same paragraph on a new line",
                "- This is a list\n    - with items",
            ]
        );
    }

    #[test]
    fn empty_and_whitespace_only_input() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("   \n\n   \n\n   ").is_empty());
    }

    #[test]
    fn single_block() {
        assert_eq!(
            split_blocks("This is a single paragraph with no separators"),
            vec!["This is a single paragraph with no separators"]
        );
    }

    #[test]
    fn multiple_blank_lines_collapse() {
        let md = "First block\n\n\n\n\nSecond block\n\n\n\nThird block";
        assert_eq!(
            split_blocks(md),
            vec!["First block", "Second block", "Third block"]
        );
    }

    #[test]
    fn whitespace_only_line_separates_blocks() {
        assert_eq!(split_blocks("one\n   \t\ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(split_blocks("a\r\nb\r\n\r\nc"), vec!["a\nb", "c"]);
    }

    #[test]
    fn parse_blocks_classifies_each_chunk() {
        let kinds: Vec<_> = parse_blocks("# Title\n\ntext\n\n- a\n- b")
            .into_iter()
            .map(|b| b.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading,
                BlockKind::Paragraph,
                BlockKind::UnorderedList
            ]
        );
    }
}
