//! Whitespace as stored drafts expect it trimmed.
//!
//! This is the JavaScript `WhiteSpace` + `LineTerminator` set: Unicode
//! `White_Space` without U+0085 (NEL), plus U+FEFF (BOM).

/// Whether `c` is stripped when trimming block content.
pub fn is_blank(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Trims blank characters from both ends of `s`.
pub fn trim_blank(s: &str) -> &str {
    s.trim_matches(is_blank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(" \t\n x \r\n", "x")]
    #[case("\u{feff}x\u{feff}", "x")]
    #[case("\u{a0}\u{2028}x\u{3000}", "x")]
    #[case("\u{85}x\u{85}", "\u{85}x\u{85}")]
    #[case("\u{feff}", "")]
    #[case("", "")]
    fn trims_like_stored_drafts(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(trim_blank(input), expected);
    }
}
