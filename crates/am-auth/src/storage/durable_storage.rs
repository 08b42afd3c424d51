use crate::StorageResult;

/// String-keyed persistence that survives a reload, in the manner of a
/// browser's local storage. Each key is written atomically on its own.
pub trait DurableStorage: Send + Sync {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> StorageResult<()>;

    /// Removes a value known to be unreadable. Backends that can keep a copy
    /// for diagnosis return where they put it.
    fn discard_corrupted(&self, key: &str) -> StorageResult<Option<String>> {
        self.remove_item(key)?;
        Ok(None)
    }
}
