//! Assembles parsed blocks and inline spans into an [`HtmlNode`] tree.

use crate::{
    error::MalformedInlineMarkup,
    html::{HtmlNode, Props},
    parsing::{
        blocks::{
            Block, BlockKind,
            kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
            split::parse_blocks,
        },
        inline::{TextKind, TextSpan, tokenize},
    },
};

/// Converts a whole document into a single `div` holding one node per block.
///
/// # Errors
/// Any malformed inline markup aborts the whole build; no partial tree is
/// returned.
pub fn build_document(markdown: &str) -> Result<HtmlNode, MalformedInlineMarkup> {
    let children = parse_blocks(markdown)
        .iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("built document with {} block nodes", children.len());
    Ok(HtmlNode::parent("div", children))
}

/// Converts one classified block into its block-level element.
pub fn block_to_node(block: &Block) -> Result<HtmlNode, MalformedInlineMarkup> {
    match block.kind {
        BlockKind::Heading => heading_to_node(block),
        BlockKind::Code => Ok(code_to_node(block)),
        BlockKind::Quote => Ok(HtmlNode::parent(
            "blockquote",
            text_to_children(&BlockQuote::content(&block.text))?,
        )),
        BlockKind::UnorderedList => Ok(HtmlNode::parent(
            "ul",
            items_to_nodes(UnorderedList::items(&block.text))?,
        )),
        BlockKind::OrderedList => Ok(HtmlNode::parent(
            "ol",
            items_to_nodes(OrderedList::items(&block.text))?,
        )),
        BlockKind::Paragraph => Ok(HtmlNode::parent(
            "p",
            text_to_children(&Paragraph::content(&block.text))?,
        )),
    }
}

/// Converts one inline span into a leaf node.
pub fn text_span_to_node(span: TextSpan) -> HtmlNode {
    match span.kind {
        TextKind::Plain => HtmlNode::text(span.text),
        TextKind::Bold => HtmlNode::leaf("b", span.text),
        TextKind::Italic => HtmlNode::leaf("i", span.text),
        TextKind::Code => HtmlNode::leaf("code", span.text),
        TextKind::Link { url } => {
            let props: Props = [("href", url)].into_iter().collect();
            HtmlNode::leaf_with_props("a", span.text, props)
        }
        TextKind::Image { url } => {
            let props: Props = [("src", url), ("alt", span.text)].into_iter().collect();
            HtmlNode::leaf_with_props("img", "", props)
        }
    }
}

/// Tokenizes inline text and converts every span to a node.
///
/// Never returns an empty list, so the enclosing parent always renders.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, MalformedInlineMarkup> {
    let children: Vec<HtmlNode> = tokenize(text)?
        .into_iter()
        .map(text_span_to_node)
        .collect();

    if children.is_empty() {
        return Ok(vec![HtmlNode::text("")]);
    }
    Ok(children)
}

fn heading_to_node(block: &Block) -> Result<HtmlNode, MalformedInlineMarkup> {
    match Heading::parse(&block.text) {
        Some(heading) => Ok(HtmlNode::parent(
            heading.tag(),
            text_to_children(heading.text)?,
        )),
        // Classified as heading, so this only happens for hand-built blocks
        None => Ok(HtmlNode::parent("p", text_to_children(&block.text)?)),
    }
}

fn code_to_node(block: &Block) -> HtmlNode {
    let body = CodeFence::body(&block.text);
    let props: Props = CodeFence::info(&block.text)
        .map(|lang| ("class", format!("language-{lang}")))
        .into_iter()
        .collect();

    // A tagged leaf may not be empty, so an empty fence wraps a bare text node
    let code = if body.is_empty() {
        HtmlNode::parent_with_props("code", vec![HtmlNode::text("")], props)
    } else {
        HtmlNode::leaf_with_props("code", body, props)
    };
    HtmlNode::parent("pre", vec![code])
}

fn items_to_nodes(items: Vec<&str>) -> Result<Vec<HtmlNode>, MalformedInlineMarkup> {
    items
        .into_iter()
        .map(|item| text_to_children(item).map(|children| HtmlNode::parent("li", children)))
        .collect()
}
