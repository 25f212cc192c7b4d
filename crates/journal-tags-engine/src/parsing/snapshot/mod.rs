//! # Snapshot Testing Support
//!
//! - **`normalize`**: converts scanner output into `NodeSnap`s, a stable
//!   `Debug`/`Serialize` view for `insta` assertions
//! - **`invariants`**: runtime checks for scanner correctness (spans in bounds,
//!   ordered, gap-free, tag parts contained in their tag)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{NodeSnap, normalize};
