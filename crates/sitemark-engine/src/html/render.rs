use crate::error::StructuralRenderError;

use super::node::{HtmlNode, LeafNode, ParentNode, Props};

/// Elements that never take content or a closing tag.
const VOID_ELEMENTS: &[&str] = &["img"];

/// Serializes a node tree to an HTML string.
///
/// Values and attributes are written verbatim, with no escaping.
///
/// # Errors
/// - a parent with an empty tag
/// - a parent with no children
/// - a tagged, non-void leaf with an empty value
pub fn to_html(node: &HtmlNode) -> Result<String, StructuralRenderError> {
    let mut out = String::new();
    write_node(node, &mut out)?;
    Ok(out)
}

impl HtmlNode {
    /// See [`to_html`].
    pub fn to_html(&self) -> Result<String, StructuralRenderError> {
        to_html(self)
    }
}

fn write_node(node: &HtmlNode, out: &mut String) -> Result<(), StructuralRenderError> {
    match node {
        HtmlNode::Leaf(leaf) => write_leaf(leaf, out),
        HtmlNode::Parent(parent) => write_parent(parent, out),
    }
}

fn write_leaf(leaf: &LeafNode, out: &mut String) -> Result<(), StructuralRenderError> {
    let Some(tag) = leaf.tag.as_deref() else {
        out.push_str(&leaf.value);
        return Ok(());
    };

    if VOID_ELEMENTS.contains(&tag) {
        write_open_tag(tag, &leaf.props, out);
        return Ok(());
    }

    if leaf.value.is_empty() {
        return Err(StructuralRenderError::EmptyLeafValue {
            tag: tag.to_string(),
        });
    }

    write_open_tag(tag, &leaf.props, out);
    out.push_str(&leaf.value);
    write_close_tag(tag, out);
    Ok(())
}

fn write_parent(parent: &ParentNode, out: &mut String) -> Result<(), StructuralRenderError> {
    if parent.tag.is_empty() {
        return Err(StructuralRenderError::MissingTag);
    }
    if parent.children.is_empty() {
        return Err(StructuralRenderError::NoChildren {
            tag: parent.tag.clone(),
        });
    }

    write_open_tag(&parent.tag, &parent.props, out);
    for child in &parent.children {
        write_node(child, out)?;
    }
    write_close_tag(&parent.tag, out);
    Ok(())
}

fn write_open_tag(tag: &str, props: &Props, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    write_props(props, out);
    out.push('>');
}

fn write_close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Renders attributes as ` key="value"` pairs, in insertion order.
fn write_props(props: &Props, out: &mut String) {
    for (key, value) in props.iter() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
