//! # sitemark-engine
//!
//! Converts a small, fixed subset of markdown into an HTML node tree.
//!
//! ```text
//! markdown ─► split_blocks ─► classify ─► block_to_node ─┐
//!                                             │            ├─► div ─► to_html
//!                                   tokenize ─► span nodes ┘
//! ```
//!
//! Supported: headings 1-6, fenced code, blockquotes, unordered and ordered
//! lists, paragraphs, and bold / italic / code / link / image spans. Blocks
//! never nest and spans never nest.

pub mod builder;
pub mod error;
pub mod html;
pub mod parsing;

pub use builder::build_document;
pub use error::{Error, MalformedInlineMarkup, StructuralRenderError};
pub use html::{HtmlNode, LeafNode, ParentNode, Props, to_html};
pub use parsing::blocks::{Block, BlockKind, classify, split_blocks};
pub use parsing::inline::{TextKind, TextSpan, tokenize};

use parsing::blocks::kinds::Heading;

/// Renders a markdown document straight to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, Error> {
    let root = build_document(markdown)?;
    Ok(to_html(&root)?)
}

/// Returns the text of the first level-1 heading, trimmed.
///
/// # Errors
/// [`Error::MissingTitle`] if no block is a `# ` heading.
pub fn extract_title(markdown: &str) -> Result<String, Error> {
    split_blocks(markdown)
        .iter()
        .filter_map(|block| Heading::parse(block))
        .find(|heading| heading.level == 1)
        .map(|heading| heading.text.trim().to_string())
        .ok_or(Error::MissingTitle)
}
