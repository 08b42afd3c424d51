pub mod durable_storage;
pub mod error;
pub mod file_storage;
pub mod memory_storage;

pub use durable_storage::DurableStorage;
pub use error::{Result as StorageResult, StorageError};
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
