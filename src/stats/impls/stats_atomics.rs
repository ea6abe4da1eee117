use std::sync::atomic::{AtomicI64, Ordering};
use crate::common::common::current_time;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(current_time(), Ordering::SeqCst);
        stats
    }

    pub(crate) fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::Torrents => &self.torrents,
            StatsEvent::Users => &self.users,
            StatsEvent::Whitelist => &self.whitelist,
            StatsEvent::Seeds => &self.seeds,
            StatsEvent::Peers => &self.peers,
            StatsEvent::Completed => &self.completed,
            StatsEvent::AnnouncesHandled => &self.announces_handled,
            StatsEvent::ScrapesHandled => &self.scrapes_handled,
            StatsEvent::Failures => &self.failures,
            StatsEvent::QueueLen => &self.queue_len,
            StatsEvent::SyncOk => &self.sync_ok,
            StatsEvent::SyncFailed => &self.sync_failed,
            StatsEvent::PeersReaped => &self.peers_reaped,
            StatsEvent::TorrentsReaped => &self.torrents_reaped,
            StatsEvent::TimestampSync => &self.timestamp_run_sync,
            StatsEvent::TimestampReap => &self.timestamp_run_reap,
            StatsEvent::TimestampConsole => &self.timestamp_run_console,
        }
    }
}
