use std::sync::atomic::AtomicU64;

/// Counters collected by one reaper pass.
#[derive(Debug, Default)]
pub struct CleanupStats {
    pub torrents: AtomicU64,
    pub seeds: AtomicU64,
    pub peers: AtomicU64,
}
