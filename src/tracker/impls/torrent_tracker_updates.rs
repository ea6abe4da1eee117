use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use ahash::{AHashMap, AHashSet};
use log::{error, info, warn};
use tokio::sync::mpsc::error::TrySendError;
use tokio_shutdown::Shutdown;
use crate::common::common::current_time;
use crate::stats::enums::stats_event::StatsEvent;
use crate::store::enums::store_error::StoreError;
use crate::tracker::enums::sync_item::SyncItem;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_hash::PeerHash;
use crate::tracker::structs::peer_stats::PeerStats;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_stats::TorrentStats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::user_stats::UserStats;

impl TorrentTracker {
    /// Queues a dirty aggregate for the sync writer.
    ///
    /// Returns false when the queue is full or closed, the caller then leaves
    /// its `in_queue` flag unset so the next announce tries again.
    pub(crate) fn enqueue_sync(&self, item: SyncItem) -> bool
    {
        match self.sync_sender.try_send(item) {
            Ok(_) => {
                self.update_stats(StatsEvent::QueueLen, 1);
                true
            }
            Err(TrySendError::Full(item)) => {
                warn!("[SYNC QUEUE] Queue full, {item:?} stays pending");
                false
            }
            Err(TrySendError::Closed(item)) => {
                error!("[SYNC QUEUE] Queue closed, {item:?} stays pending");
                false
            }
        }
    }

    /// Queues the store deletion of a peer that left its swarm.
    ///
    /// A removed peer never announces again, so when the queue is full its
    /// hash is kept aside and merged into the next sync pass.
    pub(crate) fn enqueue_peer_delete(&self, peer_hash: PeerHash)
    {
        if !self.enqueue_sync(SyncItem::Peer(peer_hash)) {
            self.pending_deletes.lock().insert(peer_hash);
        }
    }

    pub(crate) fn has_pending_deletes(&self) -> bool
    {
        !self.pending_deletes.lock().is_empty()
    }

    /// Writes the pending deltas of every item in `pending` to the store.
    ///
    /// Peer deletions that could not be queued are merged into `pending` first.
    ///
    /// Items are removed from the set once their aggregate has nothing left to
    /// write. When a store call fails the taken deltas are merged back and the
    /// items stay in the set. Returns true when every store call succeeded.
    #[tracing::instrument(level = "debug")]
    pub async fn sync_updates(&self, pending: &mut AHashSet<SyncItem>) -> bool
    {
        let deletes = std::mem::take(&mut *self.pending_deletes.lock());
        pending.extend(deletes.into_iter().map(SyncItem::Peer));

        let mut torrents = Vec::new();
        let mut users = Vec::new();
        let mut peers = Vec::new();
        for item in pending.iter() {
            match item {
                SyncItem::Torrent(info_hash) => torrents.push(*info_hash),
                SyncItem::User(user_id) => users.push(*user_id),
                SyncItem::Peer(peer_hash) => peers.push(*peer_hash)
            }
        }

        let mut success = true;
        success &= self.sync_torrent_updates(&torrents, pending).await;
        success &= self.sync_user_updates(&users, pending).await;
        success &= self.sync_peer_updates(&peers, pending).await;

        self.set_stats(StatsEvent::QueueLen, pending.len() as i64);
        self.set_stats(StatsEvent::TimestampSync, current_time());
        if success {
            self.update_stats(StatsEvent::SyncOk, 1);
        } else {
            self.update_stats(StatsEvent::SyncFailed, 1);
        }
        success
    }

    async fn sync_torrent_updates(&self, items: &[InfoHash], pending: &mut AHashSet<SyncItem>) -> bool
    {
        let mut batch = BTreeMap::new();
        for info_hash in items {
            match self.get_torrent_cached(info_hash) {
                None => { pending.remove(&SyncItem::Torrent(*info_hash)); }
                Some(torrent) => {
                    let stats = torrent.entry.write().take_pending();
                    if !stats.is_empty() {
                        batch.insert(*info_hash, stats);
                    }
                }
            }
        }

        let batch_len = batch.len();
        let result = if batch.is_empty() { Ok(()) } else { self.store.torrent_sync(batch.clone()).await };
        let failed = match result {
            Ok(_) => {
                if batch_len > 0 {
                    info!("[SYNC TORRENT UPDATES] Synced {batch_len} torrents");
                }
                None
            }
            Err(error) => {
                error!("[SYNC TORRENT UPDATES] Unable to sync {batch_len} torrents: {error}");
                Some(batch)
            }
        };

        for info_hash in items {
            if let Some(torrent) = self.get_torrent_cached(info_hash) {
                let mut entry = torrent.entry.write();
                if let Some(stats) = failed.as_ref().and_then(|batch: &BTreeMap<InfoHash, TorrentStats>| batch.get(info_hash)) {
                    entry.pending.merge(stats);
                }
                if failed.is_none() && entry.pending.is_empty() {
                    entry.in_queue = false;
                    pending.remove(&SyncItem::Torrent(*info_hash));
                }
            }
        }
        failed.is_none()
    }

    async fn sync_user_updates(&self, items: &[u32], pending: &mut AHashSet<SyncItem>) -> bool
    {
        let mut batch = BTreeMap::new();
        // The passkey can be rotated while the batch is written.
        let mut batch_keys: AHashMap<u32, String> = AHashMap::new();
        for user_id in items {
            match self.get_user_cached_by_id(*user_id) {
                None => { pending.remove(&SyncItem::User(*user_id)); }
                Some(user) => {
                    let mut lock = user.write();
                    let stats = lock.take_pending();
                    if !stats.is_empty() {
                        batch.insert(lock.passkey.clone(), stats);
                        batch_keys.insert(*user_id, lock.passkey.clone());
                    }
                }
            }
        }

        let batch_len = batch.len();
        let result = if batch.is_empty() { Ok(()) } else { self.store.user_sync(batch.clone()).await };
        let mut failed: Option<BTreeMap<String, UserStats>> = match result {
            Ok(_) => {
                if batch_len > 0 {
                    info!("[SYNC USER UPDATES] Synced {batch_len} users");
                }
                None
            }
            Err(error) => {
                error!("[SYNC USER UPDATES] Unable to sync {batch_len} users: {error}");
                Some(batch)
            }
        };
        let success = failed.is_none();

        for user_id in items {
            if let Some(user) = self.get_user_cached_by_id(*user_id) {
                let mut lock = user.write();
                let taken = batch_keys.get(user_id).and_then(|passkey| failed.as_mut().and_then(|batch| batch.remove(passkey)));
                if let Some(stats) = taken {
                    lock.pending.merge(stats);
                }
                if success && lock.pending.is_empty() {
                    lock.in_queue = false;
                    pending.remove(&SyncItem::User(*user_id));
                }
            }
        }
        success
    }

    async fn sync_peer_updates(&self, items: &[PeerHash], pending: &mut AHashSet<SyncItem>) -> bool
    {
        let mut inserts: Vec<TorrentPeer> = Vec::new();
        let mut batch: BTreeMap<PeerHash, PeerStats> = BTreeMap::new();
        let mut deletes: Vec<PeerHash> = Vec::new();

        for peer_hash in items {
            let torrent = match self.get_torrent_cached(&peer_hash.info_hash()) {
                None => {
                    deletes.push(*peer_hash);
                    continue;
                }
                Some(torrent) => torrent
            };
            let mut swarm = torrent.swarm.write();
            match swarm.get_mut(&peer_hash.peer_id()) {
                None => deletes.push(*peer_hash),
                Some(peer) => {
                    let stats = peer.take_pending();
                    if !peer.stored {
                        inserts.push(peer.clone());
                    } else if !stats.is_empty() {
                        batch.insert(*peer_hash, stats);
                    }
                }
            }
        }

        let mut success = true;

        for peer in inserts {
            let info_hash = peer.info_hash;
            let peer_hash = PeerHash::new(&info_hash, &peer.peer_id);
            let result = match self.store.peer_add(&info_hash, peer.clone()).await {
                Err(StoreError::Duplicate) => self.store.peer_update(&info_hash, peer).await,
                result => result
            };
            match result {
                Ok(_) => {
                    if let Some(torrent) = self.get_torrent_cached(&info_hash) {
                        if let Some(peer) = torrent.swarm.write().get_mut(&peer_hash.peer_id()) {
                            peer.stored = true;
                        }
                    }
                }
                Err(error) => {
                    error!("[SYNC PEER UPDATES] Unable to store peer {peer_hash}: {error}");
                    success = false;
                }
            }
        }

        let batch_len = batch.len();
        let result = if batch.is_empty() { Ok(()) } else { self.store.peer_sync(batch.clone()).await };
        let failed = match result {
            Ok(_) => {
                if batch_len > 0 {
                    info!("[SYNC PEER UPDATES] Synced {batch_len} peers");
                }
                None
            }
            Err(error) => {
                error!("[SYNC PEER UPDATES] Unable to sync {batch_len} peers: {error}");
                success = false;
                Some(batch)
            }
        };

        for peer_hash in deletes.iter() {
            match self.store.peer_delete(&peer_hash.info_hash(), &peer_hash.peer_id()).await {
                Ok(_) => { pending.remove(&SyncItem::Peer(*peer_hash)); }
                Err(error) => {
                    error!("[SYNC PEER UPDATES] Unable to delete peer {peer_hash}: {error}");
                    success = false;
                }
            }
        }

        for peer_hash in items {
            if deletes.contains(peer_hash) {
                continue;
            }
            let torrent = match self.get_torrent_cached(&peer_hash.info_hash()) {
                None => continue,
                Some(torrent) => torrent
            };
            let mut swarm = torrent.swarm.write();
            match swarm.get_mut(&peer_hash.peer_id()) {
                // Removed while syncing, the next pass deletes the row.
                None => {}
                Some(peer) => {
                    if let Some(stats) = failed.as_ref().and_then(|batch| batch.get(peer_hash)) {
                        peer.pending.merge(stats);
                    }
                    if peer.stored && peer.pending.is_empty() && failed.is_none() {
                        peer.in_queue = false;
                        pending.remove(&SyncItem::Peer(*peer_hash));
                    }
                }
            }
        }
        success
    }

    /// Drains the sync queue and flushes on a timer, when the batch is full and once more on shutdown.
    pub async fn sync_worker(self: Arc<Self>, shutdown: Shutdown)
    {
        let receiver = self.sync_receiver.lock().take();
        let mut receiver = match receiver {
            None => {
                error!("[SYNC] Sync worker already running");
                return;
            }
            Some(receiver) => receiver
        };
        let persistent_interval = self.config.database.persistent_interval.max(1);
        let batch_size = self.config.database.sync_batch_size;
        info!("[BOOT] Starting thread for store sync with {persistent_interval} seconds delay...");

        let mut pending: AHashSet<SyncItem> = AHashSet::new();
        let mut interval = tokio::time::interval(Duration::from_secs(persistent_interval));
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if !pending.is_empty() || self.has_pending_deletes() {
                        self.sync_updates(&mut pending).await;
                    }
                }
                item = receiver.recv() => {
                    match item {
                        Some(item) => {
                            pending.insert(item);
                            if pending.len() >= batch_size {
                                self.sync_updates(&mut pending).await;
                            }
                        }
                        None => break
                    }
                }
                _ = shutdown.handle() => {
                    break;
                }
            }
        }

        while let Ok(item) = receiver.try_recv() {
            pending.insert(item);
        }
        if !pending.is_empty() || self.has_pending_deletes() {
            info!("[SYNC] Flushing {} pending items before shutdown...", pending.len());
            if !self.sync_updates(&mut pending).await {
                error!("[SYNC] {} items could not be written before shutdown", pending.len());
            }
        }
        info!("[BOOT] Shutting down thread for store sync...");
    }
}
