use crate::blocks::{Block, LegacyBlock};
use crate::encoding::{legacy_blocks_to_text, serialize_blocks};
use crate::parsing::parse_document;

use super::payload::SaveOutput;

/// A tag-document buffer together with the blocks derived from it.
///
/// The text is the source of truth; `blocks` is always `parse_document(text)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDocument {
    text: String,
    blocks: Vec<Block>,
}

impl TagDocument {
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let blocks = parse_document(&text);
        Self { text, blocks }
    }

    /// Builds a document by serializing already-parsed blocks.
    pub fn from_blocks(blocks: &[Block]) -> Self {
        Self::from_text(serialize_blocks(blocks))
    }

    /// Builds a document from a previously stored block array.
    pub fn from_legacy(blocks: &[LegacyBlock]) -> Self {
        Self::from_text(legacy_blocks_to_text(blocks))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn into_save_output(self) -> SaveOutput {
        SaveOutput {
            text: self.text,
            blocks: self.blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn blocks_follow_text() {
        let doc = TagDocument::from_text("note <Code-- x --Code/>");
        assert_eq!(doc.text(), "note <Code-- x --Code/>");
        assert_eq!(
            doc.blocks(),
            &[Block::paragraph("note"), Block::new(BlockKind::Code, "x")]
        );
    }

    #[test]
    fn from_blocks_serializes() {
        let doc = TagDocument::from_blocks(&[Block::new(BlockKind::Quote, "q")]);
        assert_eq!(doc.text(), "<Quote-- q --Quote/>");
        assert_eq!(doc.blocks(), &[Block::new(BlockKind::Quote, "q")]);
    }

    #[test]
    fn default_is_empty() {
        let doc = TagDocument::default();
        assert!(doc.is_empty());
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn from_legacy_degrades_unknown_types() {
        let doc = TagDocument::from_legacy(&[LegacyBlock {
            kind: Some("sketch".into()),
            content: Some("cat".into()),
        }]);
        assert_eq!(doc.blocks(), &[Block::paragraph("cat")]);
    }
}
