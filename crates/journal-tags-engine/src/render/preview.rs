use crate::blocks::{Block, BlockKind};
use crate::parsing::trim_blank;

use super::PreviewOptions;

/// Marker style of a rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Bullet,
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Attachment,
    Reference,
}

impl MediaKind {
    pub fn placeholder(self) -> &'static str {
        match self {
            MediaKind::Image => "No image URL",
            MediaKind::Video => "No video URL",
        }
    }
}

impl LinkKind {
    /// Visible text of the link.
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Attachment => "Attachment",
            LinkKind::Reference => "Reference",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            LinkKind::Attachment => "No attachment URL",
            LinkKind::Reference => "No reference URL",
        }
    }
}

/// How a single block is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewNode {
    /// Title is level 1, heading is level 2.
    Heading { level: u8, text: String },
    Paragraph(String),
    List { style: ListStyle, items: Vec<String> },
    /// Code and table content, shown verbatim in a fixed-width font.
    Preformatted { kind: BlockKind, text: String },
    Quote(String),
    /// `src` is `None` for an empty block.
    Media { kind: MediaKind, src: Option<String> },
    /// `href` is `None` for an empty block.
    Link { kind: LinkKind, href: Option<String> },
    /// Raw markup to pass through, `None` for an empty block.
    Embed { markup: Option<String> },
    Callout(String),
    Divider,
}

impl PreviewNode {
    /// Text shown in place of an empty media, link or embed block.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            PreviewNode::Media { kind, src: None } => Some(kind.placeholder()),
            PreviewNode::Link { kind, href: None } => Some(kind.placeholder()),
            PreviewNode::Embed { markup: None } => Some("No embed content"),
            _ => None,
        }
    }
}

/// Splits list content into items, one per line.
pub fn split_items(content: &str, options: &PreviewOptions) -> Vec<String> {
    if options.keep_empty_list_items {
        return content.split('\n').map(str::to_string).collect();
    }
    content
        .split('\n')
        .map(trim_blank)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(content: &str) -> Option<String> {
    (!content.is_empty()).then(|| content.to_string())
}

/// Maps a block to its display representation.
pub fn render_preview(block: &Block, options: &PreviewOptions) -> PreviewNode {
    let content = block.content.as_str();
    match block.kind {
        BlockKind::Title => PreviewNode::Heading {
            level: 1,
            text: content.to_string(),
        },
        BlockKind::Heading => PreviewNode::Heading {
            level: 2,
            text: content.to_string(),
        },
        BlockKind::Paragraph => PreviewNode::Paragraph(content.to_string()),
        BlockKind::Points => PreviewNode::List {
            style: ListStyle::Bullet,
            items: split_items(content, options),
        },
        BlockKind::Checklist => PreviewNode::List {
            style: ListStyle::Check,
            items: split_items(content, options),
        },
        BlockKind::Code | BlockKind::Table => PreviewNode::Preformatted {
            kind: block.kind,
            text: content.to_string(),
        },
        BlockKind::Quote => PreviewNode::Quote(content.to_string()),
        BlockKind::Image => PreviewNode::Media {
            kind: MediaKind::Image,
            src: non_empty(content),
        },
        BlockKind::Video => PreviewNode::Media {
            kind: MediaKind::Video,
            src: non_empty(content),
        },
        BlockKind::Attachment => PreviewNode::Link {
            kind: LinkKind::Attachment,
            href: non_empty(content),
        },
        BlockKind::Reference => PreviewNode::Link {
            kind: LinkKind::Reference,
            href: non_empty(content),
        },
        BlockKind::Embed => PreviewNode::Embed {
            markup: non_empty(content),
        },
        BlockKind::Callout => PreviewNode::Callout(content.to_string()),
        BlockKind::Divider => PreviewNode::Divider,
    }
}
