use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::cleanup_stats::CleanupStats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl CleanupStats {
    pub(crate) fn new() -> Self {
        Self {
            torrents: AtomicU64::new(0),
            seeds: AtomicU64::new(0),
            peers: AtomicU64::new(0),
        }
    }

    pub(crate) fn add_torrents(&self, n: u64) {
        self.torrents.fetch_add(n, Ordering::Relaxed);
    }

    pub(crate) fn add_seeds(&self, n: u64) {
        self.seeds.fetch_add(n, Ordering::Relaxed);
    }

    pub(crate) fn add_peers(&self, n: u64) {
        self.peers.fetch_add(n, Ordering::Relaxed);
    }

    pub fn reaped(&self) -> u64 {
        self.seeds.load(Ordering::Relaxed) + self.peers.load(Ordering::Relaxed)
    }

    /// Moves the collected counters into the tracker statistics.
    pub(crate) fn apply_to_tracker(&self, tracker: &Arc<TorrentTracker>) {
        let torrents = self.torrents.load(Ordering::Relaxed);
        let seeds = self.seeds.load(Ordering::Relaxed);
        let peers = self.peers.load(Ordering::Relaxed);
        if seeds > 0 {
            tracker.update_stats(StatsEvent::Seeds, -(seeds as i64));
        }
        if peers > 0 {
            tracker.update_stats(StatsEvent::Peers, -(peers as i64));
        }
        if seeds + peers > 0 {
            tracker.update_stats(StatsEvent::PeersReaped, (seeds + peers) as i64);
        }
        if torrents > 0 {
            tracker.update_stats(StatsEvent::TorrentsReaped, torrents as i64);
        }
    }
}
