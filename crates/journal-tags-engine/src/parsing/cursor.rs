/// A byte cursor for the tag scanner with position tracking.
///
/// Positions are byte offsets into the scanned text.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The unread bytes.
    pub fn rest(&self) -> &'a [u8] {
        self.s.as_bytes().get(self.i..).unwrap_or_default()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().starts_with(pat)
    }

    /// Like [`Cursor::starts_with`], comparing ASCII letters case-insensitively.
    pub fn starts_with_ignore_ascii_case(&self, pat: &[u8]) -> bool {
        let rest = self.rest();
        rest.len() >= pat.len() && rest[..pat.len()].eq_ignore_ascii_case(pat)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
