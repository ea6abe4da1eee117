/// In memory store.
pub mod memory_store;

/// SQLite store.
pub mod sqlite_store;
