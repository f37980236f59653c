/// Fenced code block with owned delimiter constant.
///
/// A fenced block is a raw zone: its body is emitted verbatim with no inline
/// parsing.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// A block is fenced if it both starts and ends with the fence.
    pub fn matches(block: &str) -> bool {
        block.starts_with(Self::FENCE) && block.ends_with(Self::FENCE)
    }

    /// The info string after the opening fence, if any (e.g. `rust`).
    ///
    /// Single-line blocks have no info string.
    pub fn info(block: &str) -> Option<&str> {
        let (first, _) = block.split_once('\n')?;
        let info = first.strip_prefix(Self::FENCE)?.trim();
        (!info.is_empty()).then_some(info)
    }

    /// The raw body between the fences.
    ///
    /// For multi-line blocks the whole opening fence line is dropped and the
    /// body runs up to the closing fence, keeping the newline before it. A
    /// single-line block `` ```x``` `` has body `x`.
    pub fn body(block: &str) -> &str {
        let fence = Self::FENCE.len();
        if block.len() < fence * 2 {
            return "";
        }
        let end = block.len() - fence;
        let start = match block.find('\n') {
            Some(nl) => nl + 1,
            None => fence,
        };
        if start > end {
            return "";
        }
        &block[start..end]
    }
}
