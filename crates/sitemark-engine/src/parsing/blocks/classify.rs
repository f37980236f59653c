use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies a trimmed block.
///
/// Predicates are tried in a fixed order and the first match wins:
/// heading, code, quote, unordered list, ordered list. Anything else,
/// including the empty block, is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    let kind = if Heading::parse(block).is_some() {
        BlockKind::Heading
    } else if CodeFence::matches(block) {
        BlockKind::Code
    } else if BlockQuote::matches(block) {
        BlockKind::Quote
    } else if UnorderedList::matches(block) {
        BlockKind::UnorderedList
    } else if OrderedList::matches(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    };

    log::trace!("classified block as {kind:?}: {block:?}");
    kind
}
