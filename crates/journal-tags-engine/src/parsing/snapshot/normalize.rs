use std::ops::Range;

use serde::Serialize;

use crate::parsing::types::TagNode;

/// A scanner node flattened for snapshot assertions.
#[derive(Debug, Serialize)]
pub struct NodeSnap {
    /// `"Text"` or the tag name as written.
    pub kind: String,
    /// Full byte range of the node.
    pub span: Range<usize>,
    /// Covered text for free text, untrimmed inner text for tags.
    pub text: String,
}

pub fn normalize(text: &str, nodes: &[TagNode]) -> Vec<NodeSnap> {
    nodes
        .iter()
        .map(|node| match node {
            TagNode::Text(sp) => NodeSnap {
                kind: "Text".into(),
                span: (*sp).into(),
                text: sp.slice(text).to_string(),
            },
            TagNode::Tag { full, name, inner } => NodeSnap {
                kind: name.slice(text).to_string(),
                span: (*full).into(),
                text: inner.slice(text).to_string(),
            },
        })
        .collect()
}
