use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_sync: AtomicI64,
    pub timestamp_run_reap: AtomicI64,
    pub timestamp_run_console: AtomicI64,
    pub torrents: AtomicI64,
    pub users: AtomicI64,
    pub whitelist: AtomicI64,
    pub seeds: AtomicI64,
    pub peers: AtomicI64,
    pub completed: AtomicI64,
    pub announces_handled: AtomicI64,
    pub scrapes_handled: AtomicI64,
    pub failures: AtomicI64,
    pub queue_len: AtomicI64,
    pub sync_ok: AtomicI64,
    pub sync_failed: AtomicI64,
    pub peers_reaped: AtomicI64,
    pub torrents_reaped: AtomicI64,
}
