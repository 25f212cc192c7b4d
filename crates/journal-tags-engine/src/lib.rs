pub mod blocks;
pub mod editing;
pub mod encoding;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use blocks::{Block, BlockKind, LegacyBlock};
pub use editing::{Cmd, EditorSession, Patch};
pub use encoding::{serialize_blocks, serialize_insertion};
pub use io::{DraftError, DraftSource, DraftStore};
pub use models::{SaveOutput, SavePayload, StorageKeys, TagDocument};
pub use parsing::parse_document;
pub use render::{PreviewNode, PreviewOptions, render_html, render_preview};
