//! # Delimiter Kinds
//!
//! Types that own the tag-document syntax. The scanner and the encoder call
//! these; neither hardcodes `<`, `--` or `/>`.

pub mod tag;

pub use tag::TagDelimiters;
