mod logger;
mod portal;

use crate::Portal;

use am_auth::{MemoryStorage, MockCredentialStore};

use std::sync::Arc;

/// Portal over the demo accounts, plus the storage it writes to.
pub(crate) fn demo_portal() -> (Portal, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let portal = Portal::with_parts(Arc::new(MockCredentialStore::seeded()), storage.clone());
    (portal, storage)
}
