use crate::parsing::inline::types::TextKind;

/// A paired inline marker and the span kind its contents become.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: &'static str,
    pub kind: TextKind,
}

impl Delimiter {
    pub const CODE: Delimiter = Delimiter {
        marker: "`",
        kind: TextKind::Code,
    };

    pub const BOLD: Delimiter = Delimiter {
        marker: "**",
        kind: TextKind::Bold,
    };

    pub const ITALIC: Delimiter = Delimiter {
        marker: "_",
        kind: TextKind::Italic,
    };

    /// Delimiter passes in the order the tokenizer applies them.
    pub const PIPELINE: [Delimiter; 3] = [Self::CODE, Self::BOLD, Self::ITALIC];

    /// Number of non-overlapping occurrences of the marker in `text`.
    pub fn count_in(&self, text: &str) -> usize {
        text.matches(self.marker).count()
    }
}
