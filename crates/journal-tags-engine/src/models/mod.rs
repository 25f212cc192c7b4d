pub mod document;
pub mod entry_id;
pub mod payload;
pub mod storage_keys;

pub use document::TagDocument;
pub use entry_id::{decode_id, encode_id};
pub use payload::{ENTRY_BLOCKS_PATH, EntryRef, SaveOutput, SavePayload, entry_blocks_endpoint};
pub use storage_keys::StorageKeys;
