//! # Tag Document Parsing
//!
//! Turns a flat tag-document buffer into an ordered sequence of [`Block`]s.
//!
//! ## Modules
//!
//! - **`span`**: `Span` byte ranges into the source text
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`kinds`**: `TagDelimiters`, the owner of the `<`, `--` and `/>` syntax
//! - **`types`**: `TagNode` (free text or matched tag)
//! - **`scanner`**: `scan()`, the single-pass state machine
//! - **`whitespace`**: the blank set used when trimming block content
//! - **`snapshot`**: invariant checks and a stable view of scanner output for tests
//!
//! ## Degradation rules
//!
//! Parsing never fails. Unterminated or mismatched tags stay in the surrounding
//! free text; unknown tag names become paragraphs; free text that is not blank
//! after trimming becomes its own paragraph.

pub mod cursor;
pub mod kinds;
pub mod scanner;
pub mod snapshot;
pub mod span;
pub mod types;
pub mod whitespace;

#[cfg(test)]
mod tests;

use crate::blocks::{Block, BlockKind};

pub use scanner::scan;
pub use span::Span;
pub use types::TagNode;
pub use whitespace::trim_blank;

/// Parses a tag document into blocks, in order of appearance.
pub fn parse_document(text: &str) -> Vec<Block> {
    let nodes = scan(text);
    let mut blocks = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            TagNode::Text(sp) => {
                let between = trim_blank(sp.slice(text));
                if !between.is_empty() {
                    blocks.push(Block::paragraph(between));
                }
            }
            TagNode::Tag { name, inner, .. } => {
                let kind = BlockKind::resolve(name.slice(text));
                blocks.push(Block::new(kind, trim_blank(inner.slice(text))));
            }
        }
    }

    log::trace!("parsed {} bytes into {} blocks", text.len(), blocks.len());
    blocks
}

/// Parses an optional buffer; absent input yields no blocks.
pub fn parse_optional(text: Option<&str>) -> Vec<Block> {
    text.map(parse_document).unwrap_or_default()
}
