pub mod loader;
pub mod store;

pub use loader::{DataSource, DatasetLoader, LoadError};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
