/// Element attributes in insertion order.
///
/// Setting an existing key replaces its value in place, keeping its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props(Vec<(String, String)>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

/// A node holding text and no children.
///
/// A `None` tag means the value is emitted bare, with no surrounding element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: String,
    pub props: Props,
}

/// A node holding children and no text of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: String,
    pub children: Vec<HtmlNode>,
    pub props: Props,
}

/// An HTML tree node.
///
/// The root owns its whole subtree; trees are built bottom-up, rendered once
/// and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Bare text with no wrapping element.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf(LeafNode {
            tag: None,
            value: value.into(),
            props: Props::new(),
        })
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::leaf_with_props(tag, value, Props::new())
    }

    pub fn leaf_with_props(tag: impl Into<String>, value: impl Into<String>, props: Props) -> Self {
        Self::Leaf(LeafNode {
            tag: Some(tag.into()),
            value: value.into(),
            props,
        })
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::parent_with_props(tag, children, Props::new())
    }

    pub fn parent_with_props(
        tag: impl Into<String>,
        children: Vec<HtmlNode>,
        props: Props,
    ) -> Self {
        Self::Parent(ParentNode {
            tag: tag.into(),
            children,
            props,
        })
    }

    /// The element tag, if this node has one.
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => Some(&parent.tag),
        }
    }

    pub fn props(&self) -> &Props {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.props,
            HtmlNode::Parent(parent) => &parent.props,
        }
    }

    /// Child nodes; always empty for a leaf.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => &parent.children,
        }
    }
}
