//! # HTML Tree
//!
//! A two-variant node tree and its serializer.
//!
//! - **`node`**: `HtmlNode` (`Leaf` | `Parent`), `LeafNode`, `ParentNode`, `Props`
//! - **`render`**: `to_html()` and the structural checks it enforces
//!
//! Text and attribute values are emitted verbatim; nothing is escaped.

pub mod node;
pub mod render;

pub use node::{HtmlNode, LeafNode, ParentNode, Props};
pub use render::to_html;
