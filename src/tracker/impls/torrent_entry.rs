use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::torrent_stats::TorrentStats;
use crate::tracker::structs::torrent_update::TorrentUpdate;

impl TorrentEntry {
    pub fn new(info_hash: InfoHash, release_name: &str) -> TorrentEntry {
        TorrentEntry {
            info_hash,
            release_name: release_name.to_string(),
            snatches: 0,
            uploaded: 0,
            downloaded: 0,
            announces: 0,
            seeders: 0,
            leechers: 0,
            is_deleted: false,
            is_enabled: true,
            reason: String::new(),
            multi_up: 1.0,
            multi_dn: 1.0,
            pending: TorrentStats::default(),
            in_queue: false,
        }
    }

    pub fn del_reason(&self) -> String {
        if self.reason.is_empty() {
            return String::from("Torrent deleted");
        }
        self.reason.clone()
    }

    /// Adds one announce worth of changes, `counts` are the swarm's `(seeders, leechers)`.
    pub fn apply_announce(&mut self, up: u64, dn: u64, counts: (u64, u64), snatched: bool) {
        self.announces += 1;
        self.uploaded += up;
        self.downloaded += dn;
        self.pending.announces += 1;
        self.pending.uploaded += up;
        self.pending.downloaded += dn;
        self.set_counts(counts);
        if snatched {
            self.snatches += 1;
            self.pending.snatches += 1;
        }
    }

    /// Mirrors the swarm counts, keeping the signed difference as a pending delta.
    pub fn set_counts(&mut self, (seeders, leechers): (u64, u64)) {
        self.pending.seeders += seeders as i64 - self.seeders as i64;
        self.pending.leechers += leechers as i64 - self.leechers as i64;
        self.seeders = seeders;
        self.leechers = leechers;
    }

    pub fn apply_update(&mut self, update: &TorrentUpdate) {
        if let Some(release_name) = &update.release_name {
            self.release_name = release_name.clone();
        }
        if let Some(is_enabled) = update.is_enabled {
            self.is_enabled = is_enabled;
        }
        if let Some(reason) = &update.reason {
            self.reason = reason.clone();
        }
        if let Some(multi_up) = update.multi_up {
            self.multi_up = multi_up;
        }
        if let Some(multi_dn) = update.multi_dn {
            self.multi_dn = multi_dn;
        }
    }

    pub fn take_pending(&mut self) -> TorrentStats {
        std::mem::take(&mut self.pending)
    }
}
