use std::ops::Range;

/// Result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Character ranges of inserted text, in the new buffer.
    pub changed: Vec<Range<usize>>,
    pub new_selection: Range<usize>,
    pub version: u64,
}
