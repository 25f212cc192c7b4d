//! Single-pass tag scanner.
//!
//! The scanner walks the text once, moving through four phases:
//!
//! 1. **seeking-open**: advance byte by byte until a `<`
//! 2. **in-tag-name**: take the longest run of name bytes after `<`
//! 3. **in-content**: after `<NAME--`, walk forward looking for `--`
//! 4. **seeking-close-name-match**: at each `--`, accept only `NAME/>` with the
//!    same name (ASCII case-insensitive)
//!
//! Names may themselves contain `-`, so when the longest name run is not
//! followed by `--`, or never closes, every shorter prefix of the run is tried
//! in turn, longest first. The first candidate that closes wins. Content is
//! matched non-greedily: the earliest valid close ends the tag, which means a
//! nested tag of the same name is terminated by its inner close.
//!
//! A `<` that yields no match is ordinary text; scanning resumes at the next
//! byte. Nothing here can fail.

use super::{cursor::Cursor, kinds::TagDelimiters, span::Span, types::TagNode};

/// Scans `s` into an ordered, gap-free sequence of [`TagNode`]s.
///
/// Text between matches is emitted as [`TagNode::Text`]; consecutive text is
/// never split into more than one node.
pub fn scan(s: &str) -> Vec<TagNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<TagNode>, start: usize, end: usize) {
        if end > start {
            out.push(TagNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_tag(&mut cur) {
            let full = node.span();
            flush_text(&mut out, text_start, full.start);
            text_start = full.end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to match a whole tag starting at the current position.
///
/// On failure the cursor is restored.
fn try_parse_tag(cur: &mut Cursor<'_>) -> Option<TagNode> {
    if cur.peek() != Some(TagDelimiters::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // <
    let name_start = cur.pos();
    let run = cur
        .rest()
        .iter()
        .take_while(|b| TagDelimiters::is_name_byte(**b))
        .count();

    for len in (1..=run).rev() {
        let name_bytes = &cur.rest()[..len];
        let mut probe = cur.clone();
        probe.bump_n(len);
        if !probe.starts_with(TagDelimiters::MARKER) {
            continue;
        }
        probe.bump_n(TagDelimiters::MARKER.len());
        let inner_start = probe.pos();

        if let Some(inner_end) = seek_close(&mut probe, name_bytes) {
            let end = probe.pos();
            *cur = probe;
            return Some(TagNode::Tag {
                full: Span { start, end },
                name: Span {
                    start: name_start,
                    end: name_start + len,
                },
                inner: Span {
                    start: inner_start,
                    end: inner_end,
                },
            });
        }
    }

    *cur = saved;
    None
}

/// Walks content until the earliest `--NAME/>` and leaves the cursor after it.
///
/// Returns the position where the closing delimiter starts, or `None` if the
/// tag never closes (the cursor is then at EOF).
fn seek_close(cur: &mut Cursor<'_>, name: &[u8]) -> Option<usize> {
    while !cur.eof() {
        if cur.starts_with(TagDelimiters::MARKER) {
            let close_start = cur.pos();
            let mut probe = cur.clone();
            probe.bump_n(TagDelimiters::MARKER.len());
            if probe.starts_with_ignore_ascii_case(name) {
                probe.bump_n(name.len());
                if probe.starts_with(TagDelimiters::CLOSE_END) {
                    probe.bump_n(TagDelimiters::CLOSE_END.len());
                    *cur = probe;
                    return Some(close_start);
                }
            }
        }
        cur.bump();
    }
    None
}
