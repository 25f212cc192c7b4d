//! Route-safe obfuscation of entry ids.
//!
//! Ids are written into routes as URL-safe base64 without padding. This hides
//! sequential ids from casual view; it is not a security boundary.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

/// Encodes an id for use in a route segment.
pub fn encode_id(id: &str) -> String {
    URL_SAFE_NO_PAD.encode(id.as_bytes())
}

/// Decodes a route segment back into an id.
///
/// Accepts padded input and the standard alphabet as well. Anything that is
/// not valid base64 of UTF-8 text is returned unchanged, so raw ids pass
/// through.
pub fn decode_id(value: &str) -> String {
    let normalized: String = value
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_else(|| value.to_string())
}
