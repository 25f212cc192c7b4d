//! Parsing behaviour tests.
//!
//! Scanner shape is pinned with inline `insta` snapshots; block-level
//! behaviour with plain assertions.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::blocks::{Block, BlockKind};
use crate::parsing::{parse_document, parse_optional, scan, snapshot};

fn scanned(text: &str) -> Vec<snapshot::NodeSnap> {
    let nodes = scan(text);
    snapshot::invariants(text, &nodes);
    snapshot::normalize(text, &nodes)
}

#[test]
fn snapshot_text_around_tag() {
    insta::assert_debug_snapshot!(scanned("hello <Title-- Hi --Title/> world"), @r#"
    [
        NodeSnap {
            kind: "Text",
            span: 0..6,
            text: "hello ",
        },
        NodeSnap {
            kind: "Title",
            span: 6..27,
            text: " Hi ",
        },
        NodeSnap {
            kind: "Text",
            span: 27..33,
            text: " world",
        },
    ]
    "#);
}

#[test]
fn snapshot_adjacent_tags() {
    insta::assert_debug_snapshot!(scanned("<Code--a--Code/><quote--b--QUOTE/>"), @r#"
    [
        NodeSnap {
            kind: "Code",
            span: 0..16,
            text: "a",
        },
        NodeSnap {
            kind: "quote",
            span: 16..34,
            text: "b",
        },
    ]
    "#);
}

#[test]
fn single_code_block() {
    insta::assert_debug_snapshot!(parse_document("<Code-- x=1 --Code/>"), @r#"
    [
        Block {
            kind: Code,
            content: "x=1",
        },
    ]
    "#);
}

#[test]
fn free_text_around_tag_becomes_paragraphs() {
    assert_eq!(
        parse_document("hello <Title-- Hi --Title/> world"),
        vec![
            Block::paragraph("hello"),
            Block::new(BlockKind::Title, "Hi"),
            Block::paragraph("world"),
        ]
    );
}

#[test]
fn empty_and_absent_input() {
    assert!(parse_document("").is_empty());
    assert!(parse_optional(None).is_empty());
    assert!(parse_optional(Some("")).is_empty());
}

#[test]
fn whitespace_only_input_has_no_blocks() {
    assert!(parse_document("  \n\n\t \n").is_empty());
}

#[test]
fn unknown_tag_degrades_to_paragraph() {
    assert_eq!(
        parse_document("<Bogus-- text --Bogus/>"),
        vec![Block::paragraph("text")]
    );
}

#[test]
fn mismatched_close_is_kept_as_literal_text() {
    assert_eq!(
        parse_document("<Code-- a --Title/>"),
        vec![Block::paragraph("<Code-- a --Title/>")]
    );
}

#[test]
fn content_is_trimmed() {
    assert_eq!(
        parse_document("<Quote--   padded text   --Quote/>"),
        vec![Block::new(BlockKind::Quote, "padded text")]
    );
}

#[test]
fn leading_byte_order_mark_is_not_a_paragraph() {
    assert_eq!(
        parse_document("\u{feff}<Code-- x --Code/>"),
        vec![Block::new(BlockKind::Code, "x")]
    );
}

#[test]
fn content_keeps_next_line_characters() {
    assert_eq!(
        parse_document("<Quote-- \u{feff}q\u{85} --Quote/>\u{85}"),
        vec![
            Block::new(BlockKind::Quote, "q\u{85}"),
            Block::paragraph("\u{85}"),
        ]
    );
}

#[rstest]
#[case("<CODE-- a --code/>", BlockKind::Code)]
#[case("<code-- a --Code/>", BlockKind::Code)]
#[case("<Points-- a --POINTS/>", BlockKind::Points)]
#[case("<Divider-- a --Divider/>", BlockKind::Divider)]
#[case("<Para-- a --Para/>", BlockKind::Paragraph)]
fn kind_is_resolved_case_insensitively(#[case] text: &str, #[case] kind: BlockKind) {
    assert_eq!(parse_document(text), vec![Block::new(kind, "a")]);
}

#[test]
fn tags_with_empty_content_are_kept() {
    assert_eq!(
        parse_document("<Divider--  --Divider/>"),
        vec![Block::new(BlockKind::Divider, "")]
    );
}

#[test]
fn blank_free_text_between_tags_is_dropped() {
    let text = "<Title-- A --Title/>\n\n   \n<Heading-- B --Heading/>";
    assert_eq!(
        parse_document(text),
        vec![
            Block::new(BlockKind::Title, "A"),
            Block::new(BlockKind::Heading, "B"),
        ]
    );
}

#[test]
fn unterminated_open_is_absorbed_into_free_text() {
    let text = "intro <Code-- no end\n<Quote-- q --Quote/>";
    assert_eq!(
        parse_document(text),
        vec![
            Block::paragraph("intro <Code-- no end"),
            Block::new(BlockKind::Quote, "q"),
        ]
    );
}

#[test]
fn nested_same_name_is_closed_by_inner_close() {
    let text = "<Code-- <Code-- inner --Code/> --Code/>";
    assert_eq!(
        parse_document(text),
        vec![
            Block::new(BlockKind::Code, "<Code-- inner"),
            Block::paragraph("--Code/>"),
        ]
    );
}

#[test]
fn multiline_list_content_is_one_string() {
    let text = "<Checklist--\n  milk\n  eggs\n\n  bread\n--Checklist/>";
    assert_eq!(
        parse_document(text),
        vec![Block::new(BlockKind::Checklist, "milk\n  eggs\n\n  bread")]
    );
}

#[test]
fn different_tags_do_not_close_each_other() {
    let text = "<Quote-- said --Code/> still quote --Quote/>";
    assert_eq!(
        parse_document(text),
        vec![Block::new(BlockKind::Quote, "said --Code/> still quote")]
    );
}

#[test]
fn reparse_is_pure() {
    let text = "a <Embed-- <iframe src=x></iframe> --Embed/> b";
    assert_eq!(parse_document(text), parse_document(text));
}
