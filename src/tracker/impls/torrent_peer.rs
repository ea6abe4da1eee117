use std::net::SocketAddr;
use crate::common::common::est_speed;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_stats::PeerStats;
use crate::tracker::structs::torrent_peer::TorrentPeer;

impl TorrentPeer {
    pub fn new(info_hash: InfoHash, peer_id: PeerId, user_id: u32, peer_addr: SocketAddr) -> TorrentPeer {
        TorrentPeer {
            peer_id,
            info_hash,
            user_id,
            peer_addr,
            client: peer_id.get_client_name().unwrap_or("Unknown").to_string(),
            uploaded: 0,
            downloaded: 0,
            corrupt: 0,
            left: 0,
            total_time: 0,
            speed_up: 0,
            speed_dn: 0,
            speed_up_max: 0,
            speed_dn_max: 0,
            announces: 0,
            announce_first: 0,
            announce_last: 0,
            active: false,
            snatched: false,
            pending: PeerStats::default(),
            in_queue: false,
            stored: false,
        }
    }

    pub fn is_new(&self) -> bool {
        self.announces == 0
    }

    pub fn is_seeder(&self) -> bool {
        self.left == 0
    }

    /// Applies one announce and returns the `(uploaded, downloaded, corrupt)`
    /// deltas it produced.
    ///
    /// The first announce of a peer only sets the baseline, all deltas are 0.
    pub fn apply_announce(&mut self, request: &AnnounceQueryRequest, now: i64, config: &TrackerConfig) -> (u64, u64, u64)
    {
        let (up, dn, corrupt) = if self.is_new() {
            self.announce_first = now;
            (0, 0, 0)
        } else {
            (
                request.uploaded.saturating_sub(self.uploaded),
                request.downloaded.saturating_sub(self.downloaded),
                request.corrupt.saturating_sub(self.corrupt)
            )
        };

        self.speed_up = est_speed(self.announce_last, now, up);
        self.speed_dn = est_speed(self.announce_last, now, dn);
        self.speed_up_max = self.speed_up_max.max(self.speed_up);
        self.speed_dn_max = self.speed_dn_max.max(self.speed_dn);

        if self.active && self.announce_last > 0 && now > self.announce_last {
            let elapsed = (now - self.announce_last) as u64;
            if elapsed < config.request_interval * 4 {
                self.total_time += elapsed;
            }
        }

        self.announces += 1;
        self.uploaded = request.uploaded;
        self.downloaded = request.downloaded;
        self.corrupt = request.corrupt;
        self.left = request.left;
        self.peer_addr = request.peer_addr();
        self.announce_last = now;
        self.active = request.event != AnnounceEvent::Stopped;

        self.pending.uploaded += up;
        self.pending.downloaded += dn;
        self.pending.corrupt += corrupt;
        self.pending.announces += 1;
        self.pending.left = self.left;
        self.pending.total_time = self.total_time;
        self.pending.speed_up_max = self.speed_up_max;
        self.pending.speed_dn_max = self.speed_dn_max;
        self.pending.announce_last = now;

        (up, dn, corrupt)
    }

    /// Downloaded a meaningful amount, never finished and did not stay long enough.
    pub fn is_hnr(&self, config: &TrackerConfig) -> bool {
        self.downloaded > config.hnr_min_bytes && self.left > 0 && self.total_time < config.hnr_threshold
    }

    pub fn expired(&self, now: i64, timeout: u64) -> bool {
        now - self.announce_last > timeout as i64
    }

    pub fn take_pending(&mut self) -> PeerStats {
        std::mem::take(&mut self.pending)
    }
}
