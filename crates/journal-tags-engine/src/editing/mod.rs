/*!
 * # Editing Session
 *
 * Owns everything an editing screen mutates: the text buffer, the selection,
 * the insert-block menu and double-tap tracking. Nothing here touches global
 * state; frontends pass events in and read state back out.
 *
 * ## Architecture
 *
 * ### Single Source of Truth: xi-rope Buffer
 * The tag document lives in one `xi_rope::Rope`. Blocks are never stored
 * during editing; `blocks()` re-parses the buffer, which is cheap and pure.
 *
 * ### Command-Based Editing
 * All edits are `Cmd`s compiled to xi-rope `Delta`s. Applying one returns a
 * `Patch` with the inserted ranges, the new selection and the new version.
 *
 * ### Explicit Save
 * `save()` is the only hand-off point. It parses once more and returns the
 * text and blocks as a `SaveOutput`; `cancel()` reverts to the last save.
 *
 * ## Offsets
 *
 * Every offset crossing this API is a character offset, the unit a caret is
 * reported in. Byte offsets are used only against the rope.
 *
 * ## Usage Pattern
 *
 * ```rust
 * use journal_tags_engine::blocks::BlockKind;
 * use journal_tags_engine::editing::{Cmd, EditorSession};
 *
 * let mut session = EditorSession::from_text("hello world");
 * session.set_selection(5..5);
 *
 * let patch = session.apply(Cmd::InsertBlock { kind: BlockKind::Code, at: None });
 * assert_eq!(patch.new_selection, 13..13);
 *
 * session.apply(Cmd::InsertText { at: 13, text: "x = 1".to_string() });
 * let saved = session.save();
 * assert_eq!(saved.blocks.len(), 3);
 * ```
 */

pub mod commands;
pub mod menu;
pub mod patch;
pub mod session;

pub use commands::Cmd;
pub use menu::{InsertMenu, MenuSpacing, Point, Size, TapTracker};
pub use patch::Patch;
pub use session::EditorSession;
