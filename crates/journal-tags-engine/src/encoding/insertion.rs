use std::ops::Range;

use crate::blocks::BlockKind;
use crate::parsing::kinds::TagDelimiters;

use super::{TAG_SEPARATOR, char_len, char_to_byte};

/// Result of splicing a tag template into a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// The new buffer.
    pub text: String,
    /// Character offset just inside the new tag's content region.
    pub caret: usize,
}

/// `<Name--  --Name/>` followed by a blank line.
pub fn insertion_template(kind: BlockKind) -> String {
    let tag = kind.tag_name();
    format!(
        "{}  {}{TAG_SEPARATOR}",
        TagDelimiters::open(&tag),
        TagDelimiters::close(&tag)
    )
}

/// Inserts an empty `kind` tag at `caret` (a character offset).
///
/// Out-of-range carets are clamped to the end of the buffer.
pub fn serialize_insertion(kind: BlockKind, caret: usize, current: &str) -> Insertion {
    serialize_insertion_over(kind, caret..caret, current)
}

/// Replaces `selection` (character offsets) with an empty `kind` tag.
///
/// `selection.start` is clamped to the buffer and `selection.end` to
/// `[start, len]`, so reversed or oversized ranges degrade to an insertion.
pub fn serialize_insertion_over(
    kind: BlockKind,
    selection: Range<usize>,
    current: &str,
) -> Insertion {
    let len = char_len(current);
    let start = selection.start.min(len);
    let end = selection.end.clamp(start, len);

    let start_byte = char_to_byte(current, start);
    let end_byte = char_to_byte(current, end);

    let template = insertion_template(kind);
    let mut text = String::with_capacity(current.len() + template.len());
    text.push_str(&current[..start_byte]);
    text.push_str(&template);
    text.push_str(&current[end_byte..]);

    Insertion {
        text,
        caret: insertion_caret(kind, start),
    }
}

/// Caret after inserting a `kind` template at `start`: past `<Name-- `.
pub fn insertion_caret(kind: BlockKind, start: usize) -> usize {
    start + char_len(&TagDelimiters::open(&kind.tag_name())) + 1
}
