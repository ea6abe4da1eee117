use serde::{Deserialize, Serialize};

/// A point in time copy of `StatsAtomics`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_sync: i64,
    pub timestamp_run_reap: i64,
    pub timestamp_run_console: i64,
    pub torrents: i64,
    pub users: i64,
    pub whitelist: i64,
    pub seeds: i64,
    pub peers: i64,
    pub completed: i64,
    pub announces_handled: i64,
    pub scrapes_handled: i64,
    pub failures: i64,
    pub queue_len: i64,
    pub sync_ok: i64,
    pub sync_failed: i64,
    pub peers_reaped: i64,
    pub torrents_reaped: i64,
}
