/// A byte range `[start, end)` into the scanned text.
///
/// Scanner nodes store spans rather than copied text; slicing the source with a
/// node's span reproduces the exact bytes it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Borrows the spanned text out of `source`.
    ///
    /// Spans produced by the scanner always fall on character boundaries
    /// because every delimiter they start or end at is ASCII.
    pub fn slice(self, source: &str) -> &str {
        &source[self.start..self.end]
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(sp: Span) -> Self {
        sp.start..sp.end
    }
}
