//! # Block Parsing
//!
//! Two-phase block parsing over blank-line separated chunks.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`split`): the document is cut at runs of blank lines;
//!    each chunk is trimmed and empty chunks are dropped
//!
//! 2. **Classification** (`classify`): each chunk is assigned a `BlockKind` by
//!    an ordered list of predicates, first match wins, `Paragraph` as fallback
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading,
//!   CodeFence, BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`split`**: `split_blocks` and the line accumulator behind it
//! - **`classify`**: `classify` dispatch over the kinds
//!
//! ## Key Invariants
//!
//! - Blocks never nest: a list cannot contain a code fence, a quote cannot
//!   contain a list
//! - Classification is a pure function of the block text
//! - Malformed block syntax is never an error; it falls back to `Paragraph`

pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::classify;
pub use split::split_blocks;
pub use types::{Block, BlockKind};
