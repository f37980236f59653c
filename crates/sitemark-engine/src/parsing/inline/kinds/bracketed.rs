use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::inline::types::TextSpan;

/// Bracket-and-paren inline syntax: `![alt](url)` and `[text](url)`.
///
/// Both forms share one pattern with an optional leading `!`. The image pass
/// only accepts matches that carry the `!`; the link pass only accepts matches
/// that don't. A rejected match stays literal text, so an image is never
/// reinterpreted as a link.
///
/// Neither the text nor the url may contain brackets or parens respectively;
/// nested brackets simply fail to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracketed {
    Image,
    Link,
}

impl Bracketed {
    pub const IMAGE_PREFIX: &'static str = "!";

    /// Shared pattern: `(!?)` prefix, bracketed text, parenthesised url.
    pub fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            Regex::new(r"(!?)\[([^\[\]]*)\]\(([^()]*)\)").expect("Invalid bracket pattern")
        })
    }

    /// Whether a match of [`Self::pattern`] belongs to this form.
    pub fn accepts(self, caps: &Captures<'_>) -> bool {
        let has_prefix = caps
            .get(1)
            .is_some_and(|m| m.as_str() == Self::IMAGE_PREFIX);
        match self {
            Bracketed::Image => has_prefix,
            Bracketed::Link => !has_prefix,
        }
    }

    /// Builds the typed span for an accepted match.
    pub fn span(self, caps: &Captures<'_>) -> TextSpan {
        let text = caps.get(2).map_or("", |m| m.as_str());
        let url = caps.get(3).map_or("", |m| m.as_str());
        match self {
            Bracketed::Image => TextSpan::image(text, url),
            Bracketed::Link => TextSpan::link(text, url),
        }
    }
}
