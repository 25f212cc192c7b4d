/// Keys under which an entry's draft is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Key of the raw tag-document text.
    pub doc: String,
    /// Key of the parsed block array.
    pub blocks: String,
}

impl StorageKeys {
    const DOC_PREFIX: &'static str = "journal_doc";
    const BLOCKS_PREFIX: &'static str = "journal_blocks";

    /// Per-entry keys, or the shared keys when there is no entry id.
    pub fn for_entry(entry_id: Option<&str>) -> Self {
        match entry_id.filter(|id| !id.is_empty()) {
            Some(id) => Self {
                doc: format!("{}_{id}", Self::DOC_PREFIX),
                blocks: format!("{}_{id}", Self::BLOCKS_PREFIX),
            },
            None => Self {
                doc: Self::DOC_PREFIX.to_string(),
                blocks: Self::BLOCKS_PREFIX.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_entry_keys() {
        let keys = StorageKeys::for_entry(Some("12"));
        assert_eq!(keys.doc, "journal_doc_12");
        assert_eq!(keys.blocks, "journal_blocks_12");
    }

    #[test]
    fn shared_keys_without_entry() {
        assert_eq!(StorageKeys::for_entry(None).doc, "journal_doc");
        assert_eq!(StorageKeys::for_entry(Some("")).blocks, "journal_blocks");
    }
}
