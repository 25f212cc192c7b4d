use serde::{Deserialize, Serialize};

use super::kind::BlockKind;

/// One parsed unit of journal content.
///
/// `content` is the trimmed inner text of the block. For list-like kinds it is
/// still a single string; splitting into items happens at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub content: String,
}

impl Block {
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph, content)
    }
}

/// A block as found in a previously stored block array.
///
/// Older drafts were saved as raw arrays where either field might be missing
/// and `type` might not be a catalog kind at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyBlock {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}
