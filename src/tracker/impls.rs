//! Implementation blocks for tracker types.
//!
//! `TorrentTracker` is implemented across several files, one per concern:
//! torrents, users, whitelist, admin flags, announce handling, store sync
//! and peer reaping.

pub mod announce_event;
pub mod announce_query_request;
pub mod cleanup_stats;
pub mod info_hash;
pub mod peer_hash;
pub mod peer_id;
pub mod query;
pub mod scrape_query_request;
pub mod stats_batches;
pub mod swarm;
pub mod swarm_peers;
pub mod torrent_entry;
pub mod torrent_peer;
pub mod torrent_tracker;
pub mod torrent_tracker_admin;
pub mod torrent_tracker_handlers;
pub mod torrent_tracker_reaper;
pub mod torrent_tracker_torrents;
pub mod torrent_tracker_updates;
pub mod torrent_tracker_users;
pub mod torrent_tracker_whitelist;
pub mod tracked_torrent;
pub mod tracker_error;
pub mod user_entry_item;
pub mod whitelist_client;
