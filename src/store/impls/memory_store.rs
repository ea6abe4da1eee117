use std::collections::BTreeMap;
use async_trait::async_trait;
use crate::store::enums::store_error::StoreError;
use crate::store::structs::memory_store::MemoryStore;
use crate::store::traits::store_backend::StoreBackend;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_hash::PeerHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_stats::PeerStats;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_stats::TorrentStats;
use crate::tracker::structs::torrent_update::TorrentUpdate;
use crate::tracker::structs::user_entry_item::UserEntryItem;
use crate::tracker::structs::user_stats::UserStats;
use crate::tracker::structs::whitelist_client::WhitelistClient;

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    fn apply_signed(value: u64, delta: i64) -> u64 {
        (value as i64 + delta).max(0) as u64
    }
}

#[async_trait]
impl StoreBackend for MemoryStore {
    async fn torrent_get(&self, info_hash: &InfoHash, deleted_ok: bool) -> Result<Option<TorrentEntry>, StoreError> {
        let lock = self.torrents.read_recursive();
        Ok(lock.get(info_hash)
            .filter(|torrent| deleted_ok || !torrent.is_deleted)
            .cloned())
    }

    async fn torrent_add(&self, mut torrent: TorrentEntry) -> Result<(), StoreError> {
        let mut lock = self.torrents.write();
        if lock.contains_key(&torrent.info_hash) {
            return Err(StoreError::Duplicate);
        }
        torrent.pending = TorrentStats::default();
        torrent.in_queue = false;
        lock.insert(torrent.info_hash, torrent);
        Ok(())
    }

    async fn torrent_update(&self, info_hash: &InfoHash, update: TorrentUpdate) -> Result<(), StoreError> {
        let mut lock = self.torrents.write();
        let torrent = lock.get_mut(info_hash).ok_or(StoreError::InvalidInfoHash)?;
        torrent.apply_update(&update);
        Ok(())
    }

    async fn torrent_delete(&self, info_hash: &InfoHash, drop_row: bool) -> Result<(), StoreError> {
        let mut lock = self.torrents.write();
        if drop_row {
            return lock.remove(info_hash).map(|_| ()).ok_or(StoreError::InvalidInfoHash);
        }
        let torrent = lock.get_mut(info_hash).ok_or(StoreError::InvalidInfoHash)?;
        torrent.is_deleted = true;
        Ok(())
    }

    async fn torrent_sync(&self, batch: BTreeMap<InfoHash, TorrentStats>) -> Result<(), StoreError> {
        let mut lock = self.torrents.write();
        for (info_hash, stats) in batch {
            if let Some(torrent) = lock.get_mut(&info_hash) {
                torrent.seeders = Self::apply_signed(torrent.seeders, stats.seeders);
                torrent.leechers = Self::apply_signed(torrent.leechers, stats.leechers);
                torrent.snatches += stats.snatches;
                torrent.uploaded += stats.uploaded;
                torrent.downloaded += stats.downloaded;
                torrent.announces += stats.announces;
            }
        }
        Ok(())
    }

    async fn user_get_by_passkey(&self, passkey: &str) -> Result<Option<UserEntryItem>, StoreError> {
        let lock = self.users.read_recursive();
        Ok(lock.values().find(|user| user.passkey == passkey).cloned())
    }

    async fn user_get_by_id(&self, user_id: u32) -> Result<Option<UserEntryItem>, StoreError> {
        Ok(self.users.read_recursive().get(&user_id).cloned())
    }

    async fn user_add(&self, mut user: UserEntryItem) -> Result<(), StoreError> {
        let mut lock = self.users.write();
        if lock.contains_key(&user.user_id) || lock.values().any(|existing| existing.passkey == user.passkey) {
            return Err(StoreError::Duplicate);
        }
        user.pending = UserStats::default();
        user.in_queue = false;
        lock.insert(user.user_id, user);
        Ok(())
    }

    async fn user_update(&self, user: UserEntryItem, old_passkey: &str) -> Result<(), StoreError> {
        let mut lock = self.users.write();
        let stored = lock.values_mut()
            .find(|existing| existing.passkey == old_passkey)
            .ok_or(StoreError::InvalidUser)?;
        stored.passkey = user.passkey;
        stored.is_deleted = user.is_deleted;
        stored.enabled = user.enabled;
        stored.download_enabled = user.download_enabled;
        Ok(())
    }

    async fn user_delete(&self, user_id: u32) -> Result<(), StoreError> {
        self.users.write().remove(&user_id).map(|_| ()).ok_or(StoreError::InvalidUser)
    }

    async fn user_sync(&self, batch: BTreeMap<String, UserStats>) -> Result<(), StoreError> {
        let mut lock = self.users.write();
        for (passkey, stats) in batch {
            if let Some(user) = lock.values_mut().find(|user| user.passkey == passkey) {
                user.uploaded += stats.uploaded;
                user.downloaded += stats.downloaded;
                user.corrupt += stats.corrupt;
                user.snatches += stats.snatches;
                user.announces += stats.announces;
                if let Some(torrents) = stats.torrents {
                    user.torrents = torrents;
                }
            }
        }
        Ok(())
    }

    async fn peer_add(&self, info_hash: &InfoHash, mut peer: TorrentPeer) -> Result<(), StoreError> {
        let mut lock = self.peers.write();
        let key = PeerHash::new(info_hash, &peer.peer_id);
        if lock.contains_key(&key) {
            return Err(StoreError::Duplicate);
        }
        peer.pending = PeerStats::default();
        peer.in_queue = false;
        peer.stored = true;
        lock.insert(key, peer);
        Ok(())
    }

    async fn peer_update(&self, info_hash: &InfoHash, mut peer: TorrentPeer) -> Result<(), StoreError> {
        let mut lock = self.peers.write();
        let key = PeerHash::new(info_hash, &peer.peer_id);
        if !lock.contains_key(&key) {
            return Err(StoreError::InvalidPeerId);
        }
        peer.pending = PeerStats::default();
        peer.in_queue = false;
        peer.stored = true;
        lock.insert(key, peer);
        Ok(())
    }

    async fn peer_delete(&self, info_hash: &InfoHash, peer_id: &PeerId) -> Result<(), StoreError> {
        self.peers.write().remove(&PeerHash::new(info_hash, peer_id));
        Ok(())
    }

    async fn peer_get(&self, info_hash: &InfoHash, peer_id: &PeerId) -> Result<Option<TorrentPeer>, StoreError> {
        Ok(self.peers.read_recursive().get(&PeerHash::new(info_hash, peer_id)).cloned())
    }

    async fn peer_get_n(&self, info_hash: &InfoHash, limit: usize) -> Result<Vec<TorrentPeer>, StoreError> {
        let lock = self.peers.read_recursive();
        Ok(lock.values()
            .filter(|peer| peer.info_hash == *info_hash)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn peer_sync(&self, batch: BTreeMap<PeerHash, PeerStats>) -> Result<(), StoreError> {
        let mut lock = self.peers.write();
        for (peer_hash, stats) in batch {
            if let Some(peer) = lock.get_mut(&peer_hash) {
                peer.uploaded += stats.uploaded;
                peer.downloaded += stats.downloaded;
                peer.corrupt += stats.corrupt;
                peer.announces += stats.announces;
                peer.left = stats.left;
                peer.total_time = stats.total_time;
                peer.speed_up_max = peer.speed_up_max.max(stats.speed_up_max);
                peer.speed_dn_max = peer.speed_dn_max.max(stats.speed_dn_max);
                peer.announce_last = stats.announce_last;
            }
        }
        Ok(())
    }

    async fn whitelist_add(&self, client: WhitelistClient) -> Result<(), StoreError> {
        let mut lock = self.whitelist.write();
        if lock.contains_key(&client.client_prefix) {
            return Err(StoreError::Duplicate);
        }
        lock.insert(client.client_prefix.clone(), client);
        Ok(())
    }

    async fn whitelist_delete(&self, client_prefix: &str) -> Result<(), StoreError> {
        self.whitelist.write().remove(client_prefix).map(|_| ()).ok_or(StoreError::InvalidClient)
    }

    async fn whitelist_get_all(&self) -> Result<Vec<WhitelistClient>, StoreError> {
        Ok(self.whitelist.read_recursive().values().cloned().collect())
    }
}
