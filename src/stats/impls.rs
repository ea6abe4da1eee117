//! Statistics implementations.

/// `update_stats` and `get_stats` on the tracker.
pub mod torrent_tracker;

/// Construction of the atomic counters.
pub mod stats_atomics;
