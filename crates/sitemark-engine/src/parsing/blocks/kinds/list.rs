/// Unordered list with `- ` item markers.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn matches(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::MARKER))
    }

    /// Item texts with the marker removed, one per line.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .map(|line| line.strip_prefix(Self::MARKER).unwrap_or(line))
            .collect()
    }
}

/// Ordered list with `1. `, `2. `, ... item markers.
///
/// Numbering is strict: line `i` (zero-based) must carry exactly `i + 1`.
/// Gaps, repeats, reordering or a start other than 1 disqualify the block.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// The marker expected on the zero-based line `index`.
    pub fn marker(index: usize) -> String {
        format!("{}{}", index + 1, Self::SEPARATOR)
    }

    pub fn matches(block: &str) -> bool {
        block
            .split('\n')
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i)))
    }

    /// Item texts with their number marker removed, one per line.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .enumerate()
            .map(|(i, line)| line.strip_prefix(Self::marker(i).as_str()).unwrap_or(line))
            .collect()
    }
}
