//! # Markdown Parsing
//!
//! Text-to-structure half of the pipeline. Nothing in here knows about HTML.
//!
//! - **`blocks`**: splits a document into blank-line separated blocks and
//!   classifies each one
//! - **`inline`**: tokenizes a flat run of text into typed spans

pub mod blocks;
pub mod inline;
