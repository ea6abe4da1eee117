use std::sync::atomic::Ordering;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            timestamp_run_sync: self.stats.timestamp_run_sync.load(Ordering::SeqCst),
            timestamp_run_reap: self.stats.timestamp_run_reap.load(Ordering::SeqCst),
            timestamp_run_console: self.stats.timestamp_run_console.load(Ordering::SeqCst),
            torrents: self.stats.torrents.load(Ordering::SeqCst),
            users: self.stats.users.load(Ordering::SeqCst),
            whitelist: self.stats.whitelist.load(Ordering::SeqCst),
            seeds: self.stats.seeds.load(Ordering::SeqCst),
            peers: self.stats.peers.load(Ordering::SeqCst),
            completed: self.stats.completed.load(Ordering::SeqCst),
            announces_handled: self.stats.announces_handled.load(Ordering::SeqCst),
            scrapes_handled: self.stats.scrapes_handled.load(Ordering::SeqCst),
            failures: self.stats.failures.load(Ordering::SeqCst),
            queue_len: self.stats.queue_len.load(Ordering::SeqCst),
            sync_ok: self.stats.sync_ok.load(Ordering::SeqCst),
            sync_failed: self.stats.sync_failed.load(Ordering::SeqCst),
            peers_reaped: self.stats.peers_reaped.load(Ordering::SeqCst),
            torrents_reaped: self.stats.torrents_reaped.load(Ordering::SeqCst),
        }
    }

    /// Adds `value` to a counter. Timestamp events overwrite instead of adding.
    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.stats.counter(event);
        match event {
            StatsEvent::TimestampSync | StatsEvent::TimestampReap | StatsEvent::TimestampConsole => {
                counter.store(value, Ordering::SeqCst);
            }
            _ => {
                if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
            }
        }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats.counter(event).store(value, Ordering::SeqCst);
    }
}
