/// ATX-style heading block with owned marker constants.
///
/// All heading syntax knowledge lives here, not in the classifier or builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Number of `#` characters, 1 through 6.
    pub level: u8,
    /// Everything after the marker and its single space.
    pub text: &'a str,
}

impl<'a> Heading<'a> {
    /// The heading marker character.
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses a single-line block of the form `#{1,6} text`.
    ///
    /// Returns `None` for multi-line blocks, more than six markers, or a
    /// marker run not followed by a space.
    pub fn parse(block: &'a str) -> Option<Self> {
        if block.contains('\n') {
            return None;
        }

        let b = block.as_bytes();
        let level = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        if b.get(level) != Some(&b' ') {
            return None;
        }

        Some(Self {
            level: level as u8,
            text: &block[level + 1..],
        })
    }

    /// The HTML tag for this heading level (`h1`..`h6`).
    pub fn tag(&self) -> String {
        format!("h{}", self.level)
    }
}
