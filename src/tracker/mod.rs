//! Core private tracker implementation.
//!
//! This module contains the announce state machine, the swarm bookkeeping,
//! the torrent and user aggregates, and the batch sync towards the store.
//!
//! # Architecture
//!
//! - Torrents are cached in one map, each entry holds its record and its
//!   swarm behind separate `RwLock`s so announces on different torrents never
//!   contend.
//! - Users are cached by passkey, each record behind its own `RwLock`.
//! - An announce locks swarm, then torrent, then user, always in that order.
//! - Dirty aggregates are pushed once onto a bounded queue and written to the
//!   store in additive batches by the sync worker.
//!
//! # Main Components
//!
//! - `TorrentTracker` - The registry and announce orchestrator
//! - `Query` - Hand-rolled query string parser
//! - `AnnounceQueryRequest` - A validated announce
//! - `Swarm` - The peers of one torrent with cached counts
//! - `TorrentPeer`, `TorrentEntry`, `UserEntryItem` - The aggregates
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use mika_tracker::config::structs::configuration::Configuration;
//! use mika_tracker::store::structs::memory_store::MemoryStore;
//! use mika_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let config = Arc::new(Configuration::init());
//! let tracker = Arc::new(TorrentTracker::new(config, Arc::new(MemoryStore::new())));
//! let response = tracker.handle_announce(passkey, request).await?;
//! ```

/// Enumerations for tracker operations.
///
/// Contains the announce event, the tracker error taxonomy and the sync queue items.
pub mod enums;

/// Implementation blocks for tracker structs.
///
/// Contains the method implementations for all tracker-related structs
/// including the `TorrentTracker` operations split per concern.
pub mod impls;

/// Data structures for tracker operations.
///
/// Contains struct definitions for torrents, peers, users, and request/response types.
pub mod structs;

/// Type aliases for the shared cache maps.
pub mod types;

#[cfg(test)]
mod tests;
