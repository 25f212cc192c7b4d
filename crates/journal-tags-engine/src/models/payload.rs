use serde::{Deserialize, Serialize};

use crate::blocks::Block;
use crate::parsing::trim_blank;

/// Path of the remote collection that receives saved entry blocks.
pub const ENTRY_BLOCKS_PATH: &str = "/api/entry-blocks";

/// Full endpoint URL for saving entry blocks under `base_url`.
pub fn entry_blocks_endpoint(base_url: &str) -> String {
    format!("{}{ENTRY_BLOCKS_PATH}", base_url.trim_end_matches('/'))
}

/// What an explicit save hands to collaborators: the raw buffer for reload and
/// the parsed blocks for durable storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutput {
    pub text: String,
    pub blocks: Vec<Block>,
}

impl SaveOutput {
    pub fn payload(&self, entry_id: &str) -> SavePayload {
        SavePayload {
            career_path_id: EntryRef::from_id(entry_id),
            content: self.blocks.clone(),
        }
    }
}

/// Identifier of the entry a payload belongs to.
///
/// Ids that read as a non-zero number (decimal, exponent or `0x`/`0o`/`0b`
/// literal) are sent as numbers, integral ones without a fraction. Anything
/// else, including zero, is sent as the original string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryRef {
    Number(i64),
    Float(f64),
    Text(String),
}

/// Largest integer an `f64` holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl EntryRef {
    pub fn from_id(id: &str) -> Self {
        match numeric_value(trim_blank(id)) {
            Some(n) if n != 0.0 && n.is_finite() => {
                if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
                    EntryRef::Number(n as i64)
                } else {
                    EntryRef::Float(n)
                }
            }
            _ => EntryRef::Text(id.to_string()),
        }
    }
}

fn numeric_value(s: &str) -> Option<f64> {
    let prefixed = s.get(..2).map(str::to_ascii_lowercase);
    let radix = match prefixed.as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
    }

    let decimal = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if decimal { s.parse::<f64>().ok() } else { None }
}

/// Body posted to the remote persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavePayload {
    pub career_path_id: EntryRef,
    pub content: Vec<Block>,
}

impl SavePayload {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockKind;
    use rstest::rstest;

    #[rstest]
    #[case("42", EntryRef::Number(42))]
    #[case(" 7 ", EntryRef::Number(7))]
    #[case("-3", EntryRef::Number(-3))]
    #[case("1e3", EntryRef::Number(1000))]
    #[case("0x10", EntryRef::Number(16))]
    #[case("0B101", EntryRef::Number(5))]
    #[case("1.5", EntryRef::Float(1.5))]
    #[case(".25", EntryRef::Float(0.25))]
    #[case("0", EntryRef::Text("0".into()))]
    #[case("0.0", EntryRef::Text("0.0".into()))]
    #[case("0x", EntryRef::Text("0x".into()))]
    #[case("0x+1", EntryRef::Text("0x+1".into()))]
    #[case("inf", EntryRef::Text("inf".into()))]
    #[case("NaN", EntryRef::Text("NaN".into()))]
    #[case("1e999", EntryRef::Text("1e999".into()))]
    #[case("12abc", EntryRef::Text("12abc".into()))]
    #[case("abc", EntryRef::Text("abc".into()))]
    #[case("", EntryRef::Text(String::new()))]
    fn entry_ref_from_id(#[case] id: &str, #[case] expected: EntryRef) {
        assert_eq!(EntryRef::from_id(id), expected);
    }

    #[test]
    fn payload_json_shape() {
        let output = SaveOutput {
            text: "<Code-- x --Code/>".into(),
            blocks: vec![Block::new(BlockKind::Code, "x")],
        };
        let json = output.payload("12").to_json().unwrap();
        assert_eq!(
            json,
            r#"{"career_path_id":12,"content":[{"type":"code","content":"x"}]}"#
        );
    }

    #[test]
    fn payload_with_text_id() {
        let output = SaveOutput {
            text: String::new(),
            blocks: vec![],
        };
        let json = output.payload("draft-a").to_json().unwrap();
        assert_eq!(json, r#"{"career_path_id":"draft-a","content":[]}"#);
    }

    #[test]
    fn payload_with_fractional_id() {
        let output = SaveOutput {
            text: String::new(),
            blocks: vec![],
        };
        let json = output.payload("2.5").to_json().unwrap();
        assert_eq!(json, r#"{"career_path_id":2.5,"content":[]}"#);
    }

    #[test]
    fn endpoint_joins_base_url() {
        assert_eq!(
            entry_blocks_endpoint("https://api.example.test/"),
            "https://api.example.test/api/entry-blocks"
        );
        assert_eq!(
            entry_blocks_endpoint("http://localhost:8000"),
            "http://localhost:8000/api/entry-blocks"
        );
    }
}
