use crate::parsing::types::TagNode;

/// Panics if `nodes` is not a valid scan of `text`.
pub fn check(text: &str, nodes: &[TagNode]) {
    let n = text.len();
    let mut expected_start = 0;

    for node in nodes {
        let sp = node.span();
        assert!(
            sp.start < sp.end && sp.end <= n,
            "node span empty or out of bounds: {sp:?} (text len: {n})"
        );
        assert_eq!(
            sp.start, expected_start,
            "gap or overlap before {sp:?}, expected start {expected_start}"
        );
        assert!(
            text.is_char_boundary(sp.start) && text.is_char_boundary(sp.end),
            "span splits a character: {sp:?}"
        );
        if let TagNode::Tag { full, name, inner } = node {
            assert!(
                full.start < name.start && name.end <= inner.start && inner.end < full.end,
                "tag parts not contained in tag: full {full:?}, name {name:?}, inner {inner:?}"
            );
        }
        expected_start = sp.end;
    }

    assert_eq!(expected_start, n, "scan does not cover the whole text");

    for pair in nodes.windows(2) {
        assert!(
            !matches!(pair, [TagNode::Text(_), TagNode::Text(_)]),
            "adjacent text nodes: {pair:?}"
        );
    }
}
