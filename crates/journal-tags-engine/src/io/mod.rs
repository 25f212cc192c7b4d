//! File-backed drafts.
//!
//! Each entry has up to two files under the drafts root: `{doc key}.txt`
//! holds the raw tag document and `{blocks key}.json` the parsed block array.

use std::fs;
use std::path::{Path, PathBuf};

use crate::blocks::LegacyBlock;
use crate::encoding::legacy_blocks_to_text;
use crate::models::{SaveOutput, StorageKeys};

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not encode blocks: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Invalid drafts directory: {0}")]
    InvalidDraftsDir(String),
}

/// Where a loaded draft came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftSource {
    /// A previously saved tag document.
    Text(String),
    /// A block array saved without its text.
    LegacyBlocks(Vec<LegacyBlock>),
}

impl DraftSource {
    /// The buffer an editing session should start from.
    pub fn into_text(self) -> String {
        match self {
            DraftSource::Text(text) => text,
            DraftSource::LegacyBlocks(blocks) => legacy_blocks_to_text(&blocks),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DraftStore {
    root: PathBuf,
}

impl DraftStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn doc_path(&self, keys: &StorageKeys) -> PathBuf {
        self.root.join(format!("{}.txt", keys.doc))
    }

    fn blocks_path(&self, keys: &StorageKeys) -> PathBuf {
        self.root.join(format!("{}.json", keys.blocks))
    }

    /// Loads the draft for `keys`, preferring the raw text.
    ///
    /// A block file that does not decode is logged and treated as missing.
    pub fn load(&self, keys: &StorageKeys) -> Result<Option<DraftSource>, DraftError> {
        if let Some(text) = read_optional(&self.doc_path(keys))?
            && !text.is_empty()
        {
            log::debug!("loaded draft text for {}", keys.doc);
            return Ok(Some(DraftSource::Text(text)));
        }

        let blocks_path = self.blocks_path(keys);
        let Some(raw) = read_optional(&blocks_path)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Vec<LegacyBlock>>(&raw) {
            Ok(blocks) => {
                log::debug!("loaded {} legacy blocks for {}", blocks.len(), keys.blocks);
                Ok(Some(DraftSource::LegacyBlocks(blocks)))
            }
            Err(e) => {
                log::warn!("Ignoring unreadable draft {}: {e}", blocks_path.display());
                Ok(None)
            }
        }
    }

    /// Writes both the text and the block array, creating the root if needed.
    pub fn save(&self, keys: &StorageKeys, output: &SaveOutput) -> Result<(), DraftError> {
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string(&output.blocks)?;
        fs::write(self.doc_path(keys), &output.text)?;
        fs::write(self.blocks_path(keys), json)?;
        log::debug!("saved draft {} to {}", keys.doc, self.root.display());
        Ok(())
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, DraftError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DraftError::Io(e)),
    }
}

pub fn validate_drafts_dir(path: &Path) -> Result<(), DraftError> {
    if !path.exists() || !path.is_dir() {
        return Err(DraftError::InvalidDraftsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
