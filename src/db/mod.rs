pub mod initialize;
pub mod kv;
pub mod log;
pub mod memory;
pub mod migrate;
pub mod pool;

pub use kv::{KeyValueStore, SqliteKvStore};
pub use memory::MemoryKvStore;
