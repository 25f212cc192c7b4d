//! # Tag Document Encoding
//!
//! The write side of the codec: block sequences to text, and splicing empty
//! tag templates into a buffer at a caret.
//!
//! Offsets here are character offsets (Unicode scalar values), matching what a
//! text widget reports as its caret. Byte offsets never leak out of this module.

mod insertion;
mod serialize;

pub use insertion::{
    Insertion, insertion_caret, insertion_template, serialize_insertion, serialize_insertion_over,
};
pub use serialize::{TAG_SEPARATOR, legacy_blocks_to_text, serialize_blocks, wrap_tag};

/// Byte offset of character index `char_idx` in `text`, clamped to the end.
pub fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_to_byte_ascii_and_multibyte() {
        assert_eq!(char_to_byte("hello", 2), 2);
        assert_eq!(char_to_byte("héllo", 2), 3);
        assert_eq!(char_to_byte("héllo", 99), 6);
        assert_eq!(char_to_byte("", 0), 0);
    }
}
