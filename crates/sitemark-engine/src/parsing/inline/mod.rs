//! # Inline Parsing
//!
//! Turns a flat run of text into a sequence of [`TextSpan`]s.
//!
//! ## Pipeline
//!
//! Five passes run in a fixed order, each a pure `Vec<TextSpan> -> Vec<TextSpan>`
//! that only rewrites `Plain` spans and passes typed spans through untouched:
//!
//! 1. images `![alt](url)`
//! 2. links `[text](url)`
//! 3. code `` `code` ``
//! 4. bold `**bold**`
//! 5. italic `_italic_`
//!
//! Images run before links so the `!` prefix is consumed before link matching
//! sees the brackets. Bold runs before italic so a doubled marker is never read
//! as two single ones.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `TextKind`
//! - **`kinds`**: owned delimiters (`Delimiter`) and bracket patterns (`Bracketed`)
//! - **`parser`**: `tokenize()` and the individual passes
//!
//! Spans never nest: the text of a bold span is flat.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{TextKind, TextSpan};
