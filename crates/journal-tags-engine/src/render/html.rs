use std::sync::OnceLock;

use html_escape::{encode_double_quoted_attribute, encode_text};
use regex::Regex;

use crate::blocks::{Block, BlockKind};

use super::PreviewOptions;
use super::preview::{ListStyle, MediaKind, PreviewNode, render_preview};

fn iframe_regex() -> &'static Regex {
    static IFRAME_REGEX: OnceLock<Regex> = OnceLock::new();
    IFRAME_REGEX.get_or_init(|| Regex::new(r"(?i)<iframe([^>]*)>").expect("Invalid iframe regex"))
}

/// Makes the first iframe in `markup` full width with automatic height.
fn responsive_embed(markup: &str) -> String {
    iframe_regex()
        .replace(
            markup,
            r#"<iframe${1} style="width:100%;height:auto;" width="100%" height="auto">"#,
        )
        .into_owned()
}

fn placeholder(text: &str) -> String {
    format!(r#"<div class="placeholder">{}</div>"#, encode_text(text))
}

fn node_to_html(node: &PreviewNode) -> String {
    if let Some(text) = node.placeholder() {
        return placeholder(text);
    }

    match node {
        PreviewNode::Heading { level, text } => {
            format!("<h{level}>{}</h{level}>", encode_text(text))
        }
        PreviewNode::Paragraph(text) => format!("<p>{}</p>", encode_text(text)),
        PreviewNode::List { style, items } => {
            let class = match style {
                ListStyle::Bullet => "points",
                ListStyle::Check => "checklist",
            };
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", encode_text(item)))
                .collect();
            format!(r#"<ul class="{class}">{items}</ul>"#)
        }
        PreviewNode::Preformatted { kind, text } => {
            let class = if *kind == BlockKind::Table {
                "table"
            } else {
                "code"
            };
            format!(r#"<pre class="{class}">{}</pre>"#, encode_text(text))
        }
        PreviewNode::Quote(text) => format!("<blockquote>{}</blockquote>", encode_text(text)),
        PreviewNode::Media { kind, src: Some(src) } => {
            let src = encode_double_quoted_attribute(src);
            match kind {
                MediaKind::Image => format!(r#"<img src="{src}" alt="Image preview">"#),
                MediaKind::Video => {
                    format!(r#"<div class="video"><iframe src="{src}" allowfullscreen></iframe></div>"#)
                }
            }
        }
        PreviewNode::Link {
            kind,
            href: Some(href),
        } => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            encode_double_quoted_attribute(href),
            kind.label()
        ),
        PreviewNode::Embed {
            markup: Some(markup),
        } => format!(r#"<div class="embed">{}</div>"#, responsive_embed(markup)),
        PreviewNode::Callout(text) => format!(r#"<div class="callout">{}</div>"#, encode_text(text)),
        PreviewNode::Divider => "<hr>".to_string(),
        // Empty sources were handled by the placeholder check above
        PreviewNode::Media { src: None, .. }
        | PreviewNode::Link { href: None, .. }
        | PreviewNode::Embed { markup: None } => String::new(),
    }
}

/// Renders blocks as an HTML fragment, one element per line.
///
/// Text is escaped. Embed content is trusted markup and passes through.
pub fn render_html(blocks: &[Block], options: &PreviewOptions) -> String {
    blocks
        .iter()
        .map(|block| node_to_html(&render_preview(block, options)))
        .collect::<Vec<_>>()
        .join("\n")
}
