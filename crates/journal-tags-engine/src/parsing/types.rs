use super::span::Span;

/// A scanned region of a tag document with byte spans into the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagNode {
    /// Text outside any matched tag. May be whitespace only.
    Text(Span),
    /// A matched `<Name-- inner --Name/>` pair.
    Tag {
        /// Full span from `<` through `/>`.
        full: Span,
        /// Span of the name as written in the opening delimiter.
        name: Span,
        /// Untrimmed content between the delimiters.
        inner: Span,
    },
}

impl TagNode {
    /// The full span covered by this node.
    pub fn span(&self) -> Span {
        match self {
            TagNode::Text(sp) => *sp,
            TagNode::Tag { full, .. } => *full,
        }
    }
}
