use serde::{Deserialize, Serialize};
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_stats::TorrentStats;

/// The persisted torrent record.
///
/// `seeders` and `leechers` always mirror the swarm counts, they are never
/// incremented on their own. A `multi_up` or `multi_dn` of 0 means freeleech.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TorrentEntry {
    pub info_hash: InfoHash,
    pub release_name: String,
    pub snatches: u64,
    pub uploaded: u64,
    pub downloaded: u64,
    pub announces: u64,
    pub seeders: u64,
    pub leechers: u64,
    pub is_deleted: bool,
    pub is_enabled: bool,
    pub reason: String,
    pub multi_up: f64,
    pub multi_dn: f64,
    #[serde(skip)]
    pub pending: TorrentStats,
    #[serde(skip)]
    pub in_queue: bool,
}
