//! # Block Model
//!
//! The closed catalog of block kinds and the flat in-memory block types.
//!
//! ## Modules
//!
//! - **`kind`**: `BlockKind` enum with labels, canonical tag names and
//!   case-insensitive lookup
//! - **`block`**: `Block` (parsed, typed) and `LegacyBlock` (previously stored
//!   block arrays whose fields may be missing)
//!
//! Blocks never nest. A document is an ordered `Vec<Block>`.

pub mod block;
pub mod kind;

pub use block::{Block, LegacyBlock};
pub use kind::{BlockKind, capitalize, is_known};
