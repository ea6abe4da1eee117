use crate::tracker::structs::peer_stats::PeerStats;
use crate::tracker::structs::torrent_stats::TorrentStats;
use crate::tracker::structs::user_stats::UserStats;

impl TorrentStats {
    pub fn merge(&mut self, other: &TorrentStats) {
        self.seeders += other.seeders;
        self.leechers += other.leechers;
        self.snatches += other.snatches;
        self.uploaded += other.uploaded;
        self.downloaded += other.downloaded;
        self.announces += other.announces;
    }

    pub fn is_empty(&self) -> bool {
        *self == TorrentStats::default()
    }
}

impl UserStats {
    /// Adds the counters of `other`. A membership snapshot in `other` only
    /// replaces ours when we have none, since ours is the newer one.
    pub fn merge(&mut self, other: UserStats) {
        self.uploaded += other.uploaded;
        self.downloaded += other.downloaded;
        self.corrupt += other.corrupt;
        self.snatches += other.snatches;
        self.announces += other.announces;
        if self.torrents.is_none() {
            self.torrents = other.torrents;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == UserStats::default()
    }
}

impl PeerStats {
    /// Adds the deltas of `other`, the latest values come from whichever
    /// batch saw the later announce.
    pub fn merge(&mut self, other: &PeerStats) {
        self.uploaded += other.uploaded;
        self.downloaded += other.downloaded;
        self.corrupt += other.corrupt;
        self.announces += other.announces;
        if other.announce_last > self.announce_last {
            self.left = other.left;
            self.total_time = other.total_time;
            self.announce_last = other.announce_last;
        }
        self.speed_up_max = self.speed_up_max.max(other.speed_up_max);
        self.speed_dn_max = self.speed_dn_max.max(other.speed_dn_max);
    }

    pub fn is_empty(&self) -> bool {
        *self == PeerStats::default()
    }
}
