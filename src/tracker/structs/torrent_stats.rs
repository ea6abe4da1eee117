use serde::{Deserialize, Serialize};

/// Pending torrent counter deltas. Seeders and leechers are signed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TorrentStats {
    pub seeders: i64,
    pub leechers: i64,
    pub snatches: u64,
    pub uploaded: u64,
    pub downloaded: u64,
    pub announces: u64,
}
