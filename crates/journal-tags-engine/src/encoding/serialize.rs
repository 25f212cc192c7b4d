use crate::blocks::{Block, LegacyBlock, capitalize};
use crate::parsing::kinds::TagDelimiters;

/// Conventional separator between serialized blocks.
pub const TAG_SEPARATOR: &str = "\n\n";

/// `<Tag-- content --Tag/>`
pub fn wrap_tag(tag_name: &str, content: &str) -> String {
    format!(
        "{} {content} {}",
        TagDelimiters::open(tag_name),
        TagDelimiters::close(tag_name)
    )
}

/// Writes blocks back out as a tag document, one tag per block.
///
/// Parsing the result yields the same blocks for any sequence that itself came
/// out of a parse, provided no block's content contains the literal close
/// marker of its own canonical tag (only reachable through paragraphs whose
/// free text spells out `--Paragraph/>`).
pub fn serialize_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|b| wrap_tag(&b.kind.tag_name(), &b.content))
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}

/// Converts a previously stored block array into a tag document.
///
/// Types are capitalized verbatim rather than resolved against the catalog, so
/// an unknown stored type survives in the text and degrades only when parsed.
pub fn legacy_blocks_to_text(blocks: &[LegacyBlock]) -> String {
    blocks
        .iter()
        .map(|b| {
            let tag = b
                .kind
                .as_deref()
                .filter(|t| !t.is_empty())
                .map_or_else(|| "Paragraph".to_string(), capitalize);
            wrap_tag(&tag, b.content.as_deref().unwrap_or_default())
        })
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}
