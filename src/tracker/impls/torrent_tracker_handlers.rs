use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use log::{debug, error};
use parking_lot::RwLock;
use crate::common::common::current_time;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::sync_item::SyncItem;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::announce_response::AnnounceResponse;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_hash::PeerHash;
use crate::tracker::structs::query::Query;
use crate::tracker::structs::scrape_entry::ScrapeEntry;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;
use crate::tracker::structs::user_entry_item::UserEntryItem;

impl TorrentTracker {
    pub fn validate_announce(&self, query: &Query, remote_addr: Option<IpAddr>, forwarded_for: Option<&str>) -> Result<AnnounceQueryRequest, TrackerError>
    {
        AnnounceQueryRequest::from_query(query, remote_addr, forwarded_for, &self.config.tracker_config)
    }

    /// Runs one announce for the user owning `passkey`.
    ///
    /// Nothing is mutated until every check passed. Once the peer, torrent and
    /// user were updated the announce counts as committed, later failures do
    /// not roll it back.
    #[tracing::instrument(level = "debug")]
    pub async fn handle_announce(&self, passkey: &str, request: AnnounceQueryRequest) -> Result<AnnounceResponse, TrackerError>
    {
        let timeout = Duration::from_secs(self.config.tracker_config.announce_timeout);
        let result = match tokio::time::timeout(timeout, self.process_announce(passkey, &request)).await {
            Ok(result) => result,
            Err(_) => {
                error!("[ANNOUNCE] Timed out handling {} for {}", request.info_hash, request.peer_id);
                Err(TrackerError::Timeout)
            }
        };
        match &result {
            Ok(_) => self.update_stats(StatsEvent::AnnouncesHandled, 1),
            Err(_) => self.update_stats(StatsEvent::Failures, 1)
        }
        result
    }

    async fn process_announce(&self, passkey: &str, request: &AnnounceQueryRequest) -> Result<AnnounceResponse, TrackerError>
    {
        let tracker_config = &self.config.tracker_config;

        let user = self.get_user(passkey).await?.ok_or(TrackerError::Unauthorized)?;
        {
            let lock = user.read_recursive();
            if !lock.valid() {
                return Err(TrackerError::Unauthorized);
            }
            if !lock.enabled {
                return Err(TrackerError::UserDisabled);
            }
            if !lock.download_enabled && request.left > 0 {
                return Err(TrackerError::LeechDisabled);
            }
        }

        if tracker_config.whitelist_enabled && !self.check_whitelist(&request.peer_id) {
            return Err(TrackerError::InvalidClient);
        }

        let torrent = self.get_torrent(&request.info_hash).await?.ok_or(TrackerError::InfoHashNotFound)?;
        {
            let lock = torrent.entry.read_recursive();
            if lock.is_deleted {
                return Err(TrackerError::InfoHashNotFound);
            }
            if !lock.is_enabled {
                return Err(TrackerError::TorrentDisabled(lock.del_reason()));
            }
        }

        let now = current_time();
        if tracker_config.enforce_min_interval && request.event == AnnounceEvent::None {
            if let Some(peer) = torrent.swarm.get(&request.peer_id) {
                if peer.announce_last > 0 && now - peer.announce_last < tracker_config.request_interval_minimum as i64 {
                    return Err(TrackerError::RequestTooFast);
                }
            }
        }

        Ok(self.apply_announce(&torrent, &user, request, now))
    }

    /// Applies the announce to the peer, the torrent and the user.
    ///
    /// Locks are taken swarm first, then torrent, then user, and all of them
    /// are held until the response peers are selected.
    pub(crate) fn apply_announce(&self, torrent: &Arc<TrackedTorrent>, user: &Arc<RwLock<UserEntryItem>>, request: &AnnounceQueryRequest, now: i64) -> AnnounceResponse
    {
        let tracker_config = &self.config.tracker_config;
        let info_hash = request.info_hash;

        let mut swarm = torrent.swarm.write();
        let counts_before = swarm.counts();
        let user_id = user.read_recursive().user_id;

        let mut peer = swarm.remove(&request.peer_id)
            .unwrap_or_else(|| TorrentPeer::new(info_hash, request.peer_id, user_id, request.peer_addr()));
        let was_new = peer.is_new();
        let previous_left = peer.left;

        let (up, dn, corrupt) = peer.apply_announce(request, now, tracker_config);

        let snatched = !peer.snatched
            && request.left == 0
            && (request.event == AnnounceEvent::Completed || (!was_new && previous_left > 0));
        if snatched {
            peer.snatched = true;
        }

        let stopped = request.event == AnnounceEvent::Stopped;
        let is_hnr = stopped && peer.is_hnr(tracker_config);

        if stopped {
            if !peer.in_queue {
                self.enqueue_peer_delete(PeerHash::new(&info_hash, &request.peer_id));
            }
        } else {
            if !peer.in_queue {
                peer.in_queue = self.enqueue_sync(SyncItem::Peer(PeerHash::new(&info_hash, &request.peer_id)));
            }
            swarm.add(peer);
        }

        let counts = swarm.counts();
        let peers = if stopped {
            Vec::new()
        } else {
            swarm.get_n(request.numwant as usize, Some(&request.peer_id), request.left == 0)
        };

        let (multi_up, multi_dn) = {
            let mut entry = torrent.entry.write();
            entry.apply_announce(up, dn, counts, snatched);
            if !entry.in_queue {
                entry.in_queue = self.enqueue_sync(SyncItem::Torrent(info_hash));
            }
            (entry.multi_up, entry.multi_dn)
        };

        {
            let mut lock = user.write();
            lock.apply_announce(request.event, up, dn, corrupt, multi_up, multi_dn, snatched);
            lock.apply_transition(info_hash, request.event, request.left, is_hnr, snatched);
            if !lock.in_queue {
                lock.in_queue = self.enqueue_sync(SyncItem::User(lock.user_id));
            }
        }

        drop(swarm);

        self.update_stats(StatsEvent::Seeds, counts.0 as i64 - counts_before.0 as i64);
        self.update_stats(StatsEvent::Peers, counts.1 as i64 - counts_before.1 as i64);
        if snatched {
            self.update_stats(StatsEvent::Completed, 1);
        }
        debug!("[ANNOUNCE] {info_hash} {} event {} up {up} dn {dn} snatched {snatched}", request.peer_id, request.event);

        AnnounceResponse {
            interval: tracker_config.request_interval,
            min_interval: tracker_config.request_interval_minimum,
            complete: counts.0,
            incomplete: counts.1,
            peers,
        }
    }

    /// Scrapes every known torrent in `info_hashes`, unknown ones are left out.
    #[tracing::instrument(level = "debug")]
    pub async fn handle_scrape(&self, passkey: &str, info_hashes: &[InfoHash]) -> Result<Vec<(InfoHash, ScrapeEntry)>, TrackerError>
    {
        let user = self.get_user(passkey).await?.ok_or(TrackerError::Unauthorized)?;
        if !user.read_recursive().valid() {
            self.update_stats(StatsEvent::Failures, 1);
            return Err(TrackerError::Unauthorized);
        }
        let mut entries = Vec::with_capacity(info_hashes.len());
        for info_hash in info_hashes {
            if let Some(entry) = self.scrape_torrent(info_hash).await? {
                entries.push((*info_hash, entry));
            }
        }
        self.update_stats(StatsEvent::ScrapesHandled, 1);
        Ok(entries)
    }
}
