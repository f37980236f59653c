//! # Inline Kinds
//!
//! Inline syntax knowledge lives here, not in the parser.
//!
//! - **`Delimiter`**: paired markers (`` ` ``, `**`, `_`) that wrap code, bold
//!   and italic text
//! - **`Bracketed`**: `![alt](url)` and `[text](url)` forms, matched by one
//!   shared pattern and told apart by the leading `!`

pub mod bracketed;
pub mod delimiter;

pub use bracketed::Bracketed;
pub use delimiter::Delimiter;
