//! Data structures for private tracker operations.
//!
//! This module contains all the struct definitions used throughout the tracker,
//! including core identifier types, peer information, and request structures.

/// Main tracker instance struct.
///
/// The central struct that holds the configuration, the store, the cached
/// torrents and users, the whitelist, the sync queue and the statistics.
pub mod torrent_tracker;

/// Validated announce request.
pub mod announce_query_request;

/// The data returned for a successful announce.
pub mod announce_response;

/// Counters collected by a reaper pass.
pub mod cleanup_stats;

/// 20-byte torrent info hash identifier.
///
/// A wrapper around `[u8; 20]` that implements common traits for use as
/// a map key and for serialization.
pub mod info_hash;

/// Info hash and peer id combined into one 40-byte key.
pub mod peer_hash;

/// 20-byte peer identifier.
pub mod peer_id;

/// Pending peer changes for the store.
pub mod peer_stats;

/// Parsed query string.
pub mod query;

/// Scrape counters of one torrent.
pub mod scrape_entry;

/// Scrape request parameters.
pub mod scrape_query_request;

/// Lock protected swarm of one torrent.
pub mod swarm;

/// Peers of one torrent with cached seeder and leecher counts.
pub mod swarm_peers;

/// The persisted torrent record.
pub mod torrent_entry;

/// One peer in a swarm.
pub mod torrent_peer;

/// Pending torrent changes for the store.
pub mod torrent_stats;

/// Administrative torrent changes.
pub mod torrent_update;

/// A cached torrent with its swarm.
pub mod tracked_torrent;

/// User account record.
pub mod user_entry_item;

/// Pending user changes for the store.
pub mod user_stats;

/// Per user torrent membership sets.
pub mod user_torrents;

/// Allowed client prefixes.
pub mod whitelist_client;
