//! Job tracker engine: durable key-value storage and the JSON persistence adapter.
mod adapter;
mod file_store;
mod persist;
mod store;

pub use adapter::PersistenceAdapter;
pub use file_store::FileStore;
pub use persist::{ensure_storage_dir, AtomicFileWriter};
pub use store::{KeyValueStore, MemoryStore, StoreError};
