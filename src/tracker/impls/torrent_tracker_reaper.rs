use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use log::{debug, info};
use tokio_shutdown::Shutdown;
use crate::common::common::current_time;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::sync_item::SyncItem;
use crate::tracker::structs::cleanup_stats::CleanupStats;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_hash::PeerHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::swarm_peers::SwarmPeers;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;

impl TorrentTracker {
    /// Removes every peer that has not announced for `peers_timeout` seconds.
    #[tracing::instrument(level = "debug")]
    pub fn reap_peers(self: &Arc<Self>, now: i64) -> CleanupStats
    {
        let threshold = now - self.config.tracker_config.peers_timeout as i64;
        let stats = CleanupStats::new();
        for torrent in self.get_torrents_cached() {
            let reaped = self.reap_torrent_peers(&torrent, |swarm| swarm.reap_expired(threshold));
            if reaped.is_empty() {
                continue;
            }
            stats.add_torrents(1);
            for peer in reaped.iter() {
                if peer.is_seeder() {
                    stats.add_seeds(1);
                } else {
                    stats.add_peers(1);
                }
            }
        }
        stats.apply_to_tracker(self);
        self.set_stats(StatsEvent::TimestampReap, now);
        info!("[PEERS CLEANUP] Removed {} seeds and {} peers from {} torrents",
            stats.seeds.load(Ordering::Relaxed),
            stats.peers.load(Ordering::Relaxed),
            stats.torrents.load(Ordering::Relaxed)
        );
        stats
    }

    /// Removes one peer, for stores that report expiry themselves.
    #[tracing::instrument(level = "debug")]
    pub fn reap_peer(self: &Arc<Self>, info_hash: &InfoHash, peer_id: &PeerId) -> bool
    {
        let torrent = match self.get_torrent_cached(info_hash) {
            None => return false,
            Some(torrent) => torrent
        };
        let reaped = self.reap_torrent_peers(&torrent, |swarm| swarm.remove(peer_id).into_iter().collect());
        let stats = CleanupStats::new();
        for peer in reaped.iter() {
            if peer.is_seeder() {
                stats.add_seeds(1);
            } else {
                stats.add_peers(1);
            }
        }
        stats.apply_to_tracker(self);
        !reaped.is_empty()
    }

    /// Removes the peers picked by `select` and applies what a stopped
    /// announce would: the torrent counts follow the swarm, the users lose the
    /// torrent from their active set and the peer rows get deleted.
    pub(crate) fn reap_torrent_peers<F>(&self, torrent: &Arc<TrackedTorrent>, select: F) -> Vec<TorrentPeer>
    where
        F: FnOnce(&mut SwarmPeers) -> Vec<TorrentPeer>
    {
        let tracker_config = &self.config.tracker_config;
        let mut swarm = torrent.swarm.write();
        let reaped = select(&mut *swarm);
        if reaped.is_empty() {
            return reaped;
        }
        let counts = swarm.counts();

        let info_hash = {
            let mut entry = torrent.entry.write();
            entry.set_counts(counts);
            if !entry.in_queue {
                entry.in_queue = self.enqueue_sync(SyncItem::Torrent(entry.info_hash));
            }
            entry.info_hash
        };

        for peer in reaped.iter() {
            if let Some(user) = self.get_user_cached_by_id(peer.user_id) {
                let mut lock = user.write();
                lock.apply_reap(info_hash, peer.is_hnr(tracker_config));
                if !lock.in_queue {
                    lock.in_queue = self.enqueue_sync(SyncItem::User(lock.user_id));
                }
            }
            if !peer.in_queue {
                self.enqueue_peer_delete(PeerHash::new(&info_hash, &peer.peer_id));
            }
            debug!("[PEERS CLEANUP] Reaped {} from {info_hash}", peer.peer_id);
        }
        reaped
    }

    /// Runs `reap_peers` every `peers_cleanup_interval` seconds until shutdown.
    pub async fn reaper_worker(self: Arc<Self>, shutdown: Shutdown)
    {
        let cleanup_interval = self.config.tracker_config.peers_cleanup_interval.max(1);
        info!("[BOOT] Starting thread for peers cleanup with {cleanup_interval} seconds delay...");
        let mut interval = tokio::time::interval(Duration::from_secs(cleanup_interval));
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.reap_peers(current_time());
                }
                _ = shutdown.handle() => {
                    info!("[BOOT] Shutting down thread for peers cleanup...");
                    return;
                }
            }
        }
    }
}
