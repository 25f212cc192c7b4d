//! # Preview Rendering
//!
//! Read-only views of parsed blocks. [`render_preview`] maps a block to a
//! [`PreviewNode`] a frontend can draw however it likes; [`render_html`]
//! turns a whole document into an HTML fragment.

mod html;
mod preview;

pub use html::render_html;
pub use preview::{LinkKind, ListStyle, MediaKind, PreviewNode, render_preview, split_items};

/// Options shared by all preview renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Keep blank lines of list blocks as empty items instead of dropping
    /// them, and leave item whitespace untouched.
    pub keep_empty_list_items: bool,
}
