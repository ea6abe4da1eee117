//! Statistics event types for tracking various metrics.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant names one counter. Used with `TorrentTracker::update_stats()`,
/// which adds the given (possibly negative) value to it.
///
/// # Example
///
/// ```rust,ignore
/// use mika_tracker::stats::enums::stats_event::StatsEvent;
///
/// tracker.update_stats(StatsEvent::AnnouncesHandled, 1);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Torrents,
    Users,
    Whitelist,
    Seeds,
    Peers,
    Completed,
    AnnouncesHandled,
    ScrapesHandled,
    Failures,
    QueueLen,
    SyncOk,
    SyncFailed,
    PeersReaped,
    TorrentsReaped,
    TimestampSync,
    TimestampReap,
    TimestampConsole,
}
