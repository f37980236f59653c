/// The formatting applied to a [`TextSpan`].
///
/// Links and images carry their destination; every other kind is bare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// A contiguous run of inline text tagged with a single formatting kind.
///
/// For links the text is the anchor text; for images it is the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: TextKind,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: TextKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Plain)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Bold)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Italic)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Code)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, TextKind::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, TextKind::Image { url: url.into() })
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, TextKind::Plain)
    }

    /// Destination of a link or image; `None` for every other kind.
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            TextKind::Link { url } | TextKind::Image { url } => Some(url),
            _ => None,
        }
    }
}
