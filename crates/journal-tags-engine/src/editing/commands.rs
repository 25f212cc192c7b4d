use std::ops::Range;

use xi_rope::delta::Builder;
use xi_rope::{Delta, Rope, RopeInfo};

use crate::blocks::BlockKind;
use crate::encoding::{char_len, char_to_byte, insertion_caret, insertion_template};

use super::EditorSession;

/// Commands that can be applied to a session. Offsets are in characters.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    InsertText {
        at: usize,
        text: String,
    },
    DeleteRange {
        range: Range<usize>,
    },
    ReplaceRange {
        range: Range<usize>,
        text: String,
    },
    /// Splice an empty block tag in. `at: None` replaces the current
    /// selection; `Some(caret)` inserts at a remembered anchor.
    InsertBlock {
        kind: BlockKind,
        at: Option<usize>,
    },
}

/// Clamps a character range to `[0, len]` with `start <= end`.
pub(crate) fn clamp_range(range: &Range<usize>, len: usize) -> Range<usize> {
    let start = range.start.min(len);
    let end = range.end.clamp(start, len);
    start..end
}

/// The character range a command replaces and the text it puts there.
pub(crate) fn resolve(session: &EditorSession, cmd: &Cmd) -> (Range<usize>, String) {
    let len = session.len_chars();
    match cmd {
        Cmd::InsertText { at, text } => {
            let at = (*at).min(len);
            (at..at, text.clone())
        }
        Cmd::DeleteRange { range } => (clamp_range(range, len), String::new()),
        Cmd::ReplaceRange { range, text } => (clamp_range(range, len), text.clone()),
        Cmd::InsertBlock { kind, at } => {
            let target = match at {
                Some(caret) => *caret..*caret,
                None => session.selection(),
            };
            (clamp_range(&target, len), insertion_template(*kind))
        }
    }
}

/// Compile a command into a delta over the session's rope.
pub(crate) fn compile_command(session: &EditorSession, cmd: &Cmd) -> Delta<RopeInfo> {
    let (range, text) = resolve(session, cmd);
    let current = session.text();
    let bytes = char_to_byte(&current, range.start)..char_to_byte(&current, range.end);

    let mut builder = Builder::new(session.buffer.len());
    if text.is_empty() {
        builder.delete(bytes);
    } else {
        builder.replace(bytes, Rope::from(text));
    }
    builder.build()
}

/// Where the selection ends up once `cmd` has been applied.
pub(crate) fn transform_selection_for_command(
    session: &EditorSession,
    range: &Range<usize>,
    cmd: &Cmd,
) -> Range<usize> {
    let (target, text) = resolve(session, cmd);
    match cmd {
        Cmd::InsertText { .. } => {
            let at = target.start;
            let text_len = char_len(&text);
            if at <= range.start {
                // Insertion before the selection shifts it right
                (range.start + text_len)..(range.end + text_len)
            } else if at < range.end {
                range.start..(range.end + text_len)
            } else {
                range.clone()
            }
        }
        Cmd::DeleteRange { .. } => {
            let del_len = target.len();
            if target.end <= range.start {
                (range.start - del_len)..(range.end - del_len)
            } else if target.start >= range.end {
                range.clone()
            } else {
                // Overlap collapses to the deletion point
                target.start..target.start
            }
        }
        Cmd::ReplaceRange { .. } => {
            let caret = target.start + char_len(&text);
            caret..caret
        }
        Cmd::InsertBlock { kind, .. } => {
            let caret = insertion_caret(*kind, target.start);
            caret..caret
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clamp_range_orders_and_bounds() {
        assert_eq!(clamp_range(&(2..5), 10), 2..5);
        assert_eq!(clamp_range(&(5..2), 10), 5..5);
        assert_eq!(clamp_range(&(8..20), 10), 8..10);
        assert_eq!(clamp_range(&(15..20), 10), 10..10);
    }

    #[test]
    fn insert_text_before_selection_shifts_it() {
        let session = EditorSession::from_text("abcdef");
        let sel = transform_selection_for_command(
            &session,
            &(3..4),
            &Cmd::InsertText {
                at: 1,
                text: "XY".into(),
            },
        );
        assert_eq!(sel, 5..6);
    }

    #[test]
    fn insert_text_inside_selection_grows_it() {
        let session = EditorSession::from_text("abcdef");
        let sel = transform_selection_for_command(
            &session,
            &(1..4),
            &Cmd::InsertText {
                at: 2,
                text: "XY".into(),
            },
        );
        assert_eq!(sel, 1..6);
    }

    #[test]
    fn delete_overlapping_selection_collapses() {
        let session = EditorSession::from_text("abcdef");
        let sel = transform_selection_for_command(
            &session,
            &(2..4),
            &Cmd::DeleteRange { range: 3..5 },
        );
        assert_eq!(sel, 3..3);
    }

    #[test]
    fn delete_before_selection_shifts_left() {
        let session = EditorSession::from_text("abcdef");
        let sel = transform_selection_for_command(
            &session,
            &(4..5),
            &Cmd::DeleteRange { range: 0..2 },
        );
        assert_eq!(sel, 2..3);
    }

    #[test]
    fn insert_block_at_anchor_ignores_selection() {
        let mut session = EditorSession::from_text("hello world");
        session.set_selection(0..5);
        let (range, text) = resolve(
            &session,
            &Cmd::InsertBlock {
                kind: BlockKind::Quote,
                at: Some(6),
            },
        );
        assert_eq!(range, 6..6);
        assert_eq!(text, "<Quote--  --Quote/>\n\n");
    }

    #[test]
    fn out_of_range_offsets_are_clamped() {
        let session = EditorSession::from_text("abc");
        let (range, _) = resolve(
            &session,
            &Cmd::InsertText {
                at: 99,
                text: "!".into(),
            },
        );
        assert_eq!(range, 3..3);
    }
}
