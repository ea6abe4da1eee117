//! Durable backing store for torrents, users, peers and the client whitelist.
//!
//! The tracker keeps its aggregates in memory and treats the store as the
//! place they are hydrated from and synced back to. Every `*_sync` method is
//! additive: it receives deltas, never absolute values.
//!
//! # Drivers
//!
//! - `memory` - process local maps, used for tests and throwaway instances
//! - `sqlite3` - SQLite through `sqlx`

/// Store driver selection and store errors.
pub mod enums;

/// Implementations of the store drivers.
pub mod impls;

/// Store driver structs.
pub mod structs;

/// The `StoreBackend` trait.
pub mod traits;
