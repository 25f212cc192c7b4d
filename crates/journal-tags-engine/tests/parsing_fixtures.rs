use journal_tags_engine::blocks::Block;
use journal_tags_engine::parsing::{parse_document, scan, snapshot};
use pretty_assertions::assert_eq;

#[test]
fn fixture_mixed_blocks() {
    assert_fixture("mixed_blocks");
}

#[test]
fn fixture_unterminated() {
    assert_fixture("unterminated");
}

#[test]
fn fixture_unknown_tags() {
    assert_fixture("unknown_tags");
}

#[test]
fn fixture_unicode_text() {
    assert_fixture("unicode_text");
}

fn assert_fixture(name: &str) {
    let dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let text = std::fs::read_to_string(format!("{dir}/{name}.txt")).unwrap();
    let expected_json = std::fs::read_to_string(format!("{dir}/{name}.json")).unwrap();
    let expected: Vec<Block> = serde_json::from_str(&expected_json).unwrap();

    let nodes = scan(&text);
    snapshot::invariants(&text, &nodes);

    assert_eq!(parse_document(&text), expected, "fixture {name}");
}
