use serde::{Deserialize, Serialize};

/// The kind of a content block.
///
/// The set is closed: tag names that do not resolve to one of these variants
/// are read back as [`BlockKind::Paragraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Title,
    Heading,
    Paragraph,
    /// Bulleted list; content holds one item per line.
    Points,
    Code,
    Table,
    Quote,
    /// Checklist; content holds one item per line.
    Checklist,
    Image,
    Video,
    Attachment,
    Reference,
    Embed,
    Callout,
    Divider,
}

impl BlockKind {
    /// Every kind, in the order the insert menu lists them.
    pub const ALL: [BlockKind; 15] = [
        BlockKind::Title,
        BlockKind::Heading,
        BlockKind::Paragraph,
        BlockKind::Points,
        BlockKind::Code,
        BlockKind::Table,
        BlockKind::Quote,
        BlockKind::Checklist,
        BlockKind::Image,
        BlockKind::Video,
        BlockKind::Attachment,
        BlockKind::Reference,
        BlockKind::Embed,
        BlockKind::Callout,
        BlockKind::Divider,
    ];

    /// Lowercase kind string, as stored in the `type` field of a saved block.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Title => "title",
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Points => "points",
            BlockKind::Code => "code",
            BlockKind::Table => "table",
            BlockKind::Quote => "quote",
            BlockKind::Checklist => "checklist",
            BlockKind::Image => "image",
            BlockKind::Video => "video",
            BlockKind::Attachment => "attachment",
            BlockKind::Reference => "reference",
            BlockKind::Embed => "embed",
            BlockKind::Callout => "callout",
            BlockKind::Divider => "divider",
        }
    }

    /// Human-readable label shown in block pickers.
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Title => "Title",
            BlockKind::Heading => "Heading",
            BlockKind::Paragraph => "Paragraph",
            BlockKind::Points => "Bullet Points",
            BlockKind::Code => "Code Block",
            BlockKind::Table => "Table",
            BlockKind::Quote => "Quote",
            BlockKind::Checklist => "Checklist",
            BlockKind::Image => "Image",
            BlockKind::Video => "Video",
            BlockKind::Attachment => "Attachment",
            BlockKind::Reference => "Reference",
            BlockKind::Embed => "Embed",
            BlockKind::Callout => "Callout",
            BlockKind::Divider => "Divider",
        }
    }

    /// Canonical tag name written into documents (`code` -> `Code`).
    pub fn tag_name(self) -> String {
        capitalize(self.as_str())
    }

    /// Looks up a kind by tag name, ignoring ASCII case.
    pub fn from_tag_name(name: &str) -> Option<BlockKind> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }

    /// Resolves a tag name to its kind, degrading unknown names to `Paragraph`.
    pub fn resolve(name: &str) -> BlockKind {
        Self::from_tag_name(name).unwrap_or(BlockKind::Paragraph)
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `name` names a catalog kind (case-insensitive).
pub fn is_known(name: &str) -> bool {
    BlockKind::from_tag_name(name).is_some()
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BlockKind::Code, "Code")]
    #[case(BlockKind::Points, "Points")]
    #[case(BlockKind::Checklist, "Checklist")]
    #[case(BlockKind::Divider, "Divider")]
    fn tag_name_is_capitalized_kind(#[case] kind: BlockKind, #[case] expected: &str) {
        assert_eq!(kind.tag_name(), expected);
    }

    #[rstest]
    #[case("code", Some(BlockKind::Code))]
    #[case("CODE", Some(BlockKind::Code))]
    #[case("CaLlOuT", Some(BlockKind::Callout))]
    #[case("bogus", None)]
    #[case("", None)]
    #[case("code ", None)]
    fn lookup_ignores_case(#[case] name: &str, #[case] expected: Option<BlockKind>) {
        assert_eq!(BlockKind::from_tag_name(name), expected);
        assert_eq!(is_known(name), expected.is_some());
    }

    #[test]
    fn unknown_names_resolve_to_paragraph() {
        assert_eq!(BlockKind::resolve("Bogus"), BlockKind::Paragraph);
        assert_eq!(BlockKind::resolve("Quote"), BlockKind::Quote);
    }

    #[test]
    fn catalog_is_complete_and_ordered() {
        let names: Vec<_> = BlockKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            [
                "title",
                "heading",
                "paragraph",
                "points",
                "code",
                "table",
                "quote",
                "checklist",
                "image",
                "video",
                "attachment",
                "reference",
                "embed",
                "callout",
                "divider",
            ]
        );
    }

    #[test]
    fn labels() {
        assert_eq!(BlockKind::Points.label(), "Bullet Points");
        assert_eq!(BlockKind::Code.label(), "Code Block");
        assert_eq!(BlockKind::Title.label(), "Title");
    }

    #[test]
    fn serde_uses_lowercase_kind() {
        let json = serde_json::to_string(&BlockKind::Checklist).unwrap();
        assert_eq!(json, "\"checklist\"");
        let kind: BlockKind = serde_json::from_str("\"embed\"").unwrap();
        assert_eq!(kind, BlockKind::Embed);
    }

    #[test]
    fn capitalize_handles_edges() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize("already"), "Already");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize("mIxEd"), "MIxEd");
    }
}
