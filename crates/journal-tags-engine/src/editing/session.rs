use std::ops::Range;

use xi_rope::Rope;

use crate::blocks::{Block, BlockKind};
use crate::editing::commands::{self, clamp_range};
use crate::editing::{Cmd, InsertMenu, Patch, Point, TapTracker};
use crate::encoding::char_len;
use crate::io::DraftSource;
use crate::models::{SaveOutput, TagDocument};
use crate::parsing::parse_document;

/// One editing session over a tag document.
///
/// The session owns the buffer, the selection, the last saved text and the
/// insert menu. Derived blocks are recomputed on demand and only handed out
/// durably through [`EditorSession::save`].
#[derive(Debug, Clone)]
pub struct EditorSession {
    /// Rope holding the tag document (source of truth)
    pub(crate) buffer: Rope,
    /// Selection as character offsets, `start <= end`
    pub(crate) selection: Range<usize>,
    /// Incremented on every applied command
    pub(crate) version: u64,
    saved_text: String,
    menu: InsertMenu,
    taps: TapTracker,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// An empty session.
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// A session over previously saved text. The caret starts at the end.
    pub fn from_text(text: &str) -> Self {
        let len = char_len(text);
        Self {
            buffer: Rope::from(text),
            selection: len..len,
            version: 0,
            saved_text: text.to_string(),
            menu: InsertMenu::default(),
            taps: TapTracker::default(),
        }
    }

    pub fn from_document(doc: &TagDocument) -> Self {
        Self::from_text(doc.text())
    }

    /// A session over whatever a draft store found.
    pub fn from_source(source: DraftSource) -> Self {
        Self::from_text(&source.into_text())
    }

    /// Replaces the insert menu, e.g. to use frontend-specific spacing.
    pub fn with_menu(mut self, menu: InsertMenu) -> Self {
        self.menu = menu;
        self
    }

    /// Apply a command to the buffer.
    ///
    /// Offsets in the command are clamped to the buffer; nothing is rejected.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let (target, inserted) = commands::resolve(self, &cmd);
        let delta = commands::compile_command(self, &cmd);
        let new_selection = commands::transform_selection_for_command(self, &self.selection, &cmd);

        self.buffer = delta.apply(&self.buffer);
        self.selection = clamp_range(&new_selection, self.len_chars());
        self.version += 1;

        let mut changed = Vec::new();
        if !inserted.is_empty() {
            changed.push(target.start..target.start + char_len(&inserted));
        }

        Patch {
            changed,
            new_selection: self.selection.clone(),
            version: self.version,
        }
    }

    /// Insert an empty `kind` block over the current selection.
    pub fn insert_block(&mut self, kind: BlockKind) -> Patch {
        self.apply(Cmd::InsertBlock { kind, at: None })
    }

    /// Get the current text content
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Length of the buffer in characters.
    pub fn len_chars(&self) -> usize {
        char_len(&self.text())
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Blocks derived from the current buffer.
    pub fn blocks(&self) -> Vec<Block> {
        parse_document(&self.text())
    }

    /// The buffer and its blocks as a document.
    pub fn snapshot(&self) -> TagDocument {
        TagDocument::from_text(self.text())
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Set the selection. Reversed ranges are reordered, then clamped.
    pub fn set_selection(&mut self, selection: Range<usize>) {
        let ordered = selection.start.min(selection.end)..selection.start.max(selection.end);
        self.selection = clamp_range(&ordered, self.len_chars());
    }

    /// The caret, i.e. where the selection starts.
    pub fn caret(&self) -> usize {
        self.selection.start
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Records the current buffer as saved and returns what to persist.
    pub fn save(&mut self) -> SaveOutput {
        let output = self.snapshot().into_save_output();
        self.saved_text.clone_from(&output.text);
        log::debug!(
            "saved session v{}: {} blocks, {} bytes",
            self.version,
            output.blocks.len(),
            output.text.len()
        );
        output
    }

    /// The text as of the last save (or load).
    pub fn saved_text(&self) -> &str {
        &self.saved_text
    }

    /// Whether the buffer differs from the last save.
    pub fn is_dirty(&self) -> bool {
        self.buffer.to_string() != self.saved_text
    }

    /// Throws away unsaved edits and closes the menu.
    pub fn cancel(&mut self) {
        self.buffer = Rope::from(self.saved_text.as_str());
        let len = self.len_chars();
        self.selection = len..len;
        self.version += 1;
        self.menu.close();
    }

    pub fn menu(&self) -> &InsertMenu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut InsertMenu {
        &mut self.menu
    }

    /// Opens the insert menu at `pointer`, anchored at the current caret.
    pub fn open_menu(&mut self, pointer: Point) {
        let caret = self.caret();
        self.menu.open(caret, pointer);
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    /// Inserts `kind` at the menu's anchor (or the selection when the menu
    /// has none) and closes the menu.
    pub fn insert_from_menu(&mut self, kind: BlockKind) -> Patch {
        let at = self.menu.anchor();
        self.menu.close();
        self.apply(Cmd::InsertBlock { kind, at })
    }

    /// Feeds a tap; a double tap opens the menu at `pointer`.
    ///
    /// Returns true when the menu was opened.
    pub fn register_tap(&mut self, now_ms: u64, pointer: Point) -> bool {
        if self.taps.register(now_ms) {
            self.open_menu(pointer);
            true
        } else {
            false
        }
    }
}
