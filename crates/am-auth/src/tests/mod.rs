mod property_tests;

use crate::{
    DurableStorage, MemoryStorage, MockCredentialStore, SessionStore, StorageError, StorageResult,
};

use std::path::PathBuf;
use std::sync::Arc;

/// Store over the seeded demo accounts plus the storage it writes to.
pub(crate) fn seeded_store() -> (SessionStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let store = SessionStore::new(Arc::new(MockCredentialStore::seeded()), storage.clone());
    (store, storage)
}

/// Reads succeed and report nothing stored; every write fails.
pub(crate) struct ReadOnlyStorage;

impl DurableStorage for ReadOnlyStorage {
    fn get_item(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn set_item(&self, key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::file_write(
            PathBuf::from(format!("/read-only/{key}.json")),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        Err(StorageError::file_remove(
            PathBuf::from(format!("/read-only/{key}.json")),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }
}
