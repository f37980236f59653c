//! Error taxonomy for the rendering pipeline.
//!
//! Only two things can go wrong: inline delimiters that do not pair up, and
//! HTML trees that violate the node invariants at render time. Unrecognised
//! block shapes and broken bracket syntax are never errors; they degrade to
//! paragraphs and plain text respectively.

/// An inline delimiter occurred an odd number of times within one text run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed inline markup: unbalanced {delimiter:?} in {text:?}")]
pub struct MalformedInlineMarkup {
    /// The delimiter that failed to pair (`` ` ``, `**` or `_`).
    pub delimiter: &'static str,
    /// The text run being scanned when the imbalance was found.
    pub text: String,
}

/// A node tree that cannot be serialized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralRenderError {
    #[error("parent requires tag")]
    MissingTag,
    #[error("parent requires children: <{tag}> has none")]
    NoChildren { tag: String },
    #[error("leaf requires non-empty value: <{tag}> is empty")]
    EmptyLeafValue { tag: String },
}

/// Crate-level error covering every fallible public operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Inline(#[from] MalformedInlineMarkup),
    #[error(transparent)]
    Render(#[from] StructuralRenderError),
    #[error("document has no level-1 heading to use as a title")]
    MissingTitle,
}
