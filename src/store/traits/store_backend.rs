use std::collections::BTreeMap;
use async_trait::async_trait;
use crate::store::enums::store_error::StoreError;
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

/// Persistence contract for the tracker.
///
/// Lookups return `Ok(None)` for unknown keys. The `*_sync` methods receive
/// batches of deltas and must add them to what is stored, a batch is either
/// written completely or the call fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreBackend: Send + Sync {
    /// Returns a torrent, soft deleted ones only when `deleted_ok` is set.
    async fn torrent_get(&self, info_hash: &InfoHash, deleted_ok: bool) -> Result<Option<TorrentEntry>, StoreError>;

    async fn torrent_add(&self, torrent: TorrentEntry) -> Result<(), StoreError>;

    async fn torrent_update(&self, info_hash: &InfoHash, update: TorrentUpdate) -> Result<(), StoreError>;

    /// Soft deletes a torrent, or removes the row when `drop_row` is set.
    async fn torrent_delete(&self, info_hash: &InfoHash, drop_row: bool) -> Result<(), StoreError>;

    async fn torrent_sync(&self, batch: BTreeMap<InfoHash, TorrentStats>) -> Result<(), StoreError>;

    async fn user_get_by_passkey(&self, passkey: &str) -> Result<Option<UserEntryItem>, StoreError>;

    async fn user_get_by_id(&self, user_id: u32) -> Result<Option<UserEntryItem>, StoreError>;

    async fn user_add(&self, user: UserEntryItem) -> Result<(), StoreError>;

    /// Replaces the account fields of a user, `old_passkey` locates the row.
    async fn user_update(&self, user: UserEntryItem, old_passkey: &str) -> Result<(), StoreError>;

    async fn user_delete(&self, user_id: u32) -> Result<(), StoreError>;

    /// Batches are keyed by passkey.
    async fn user_sync(&self, batch: BTreeMap<String, UserStats>) -> Result<(), StoreError>;

    async fn peer_add(&self, info_hash: &InfoHash, peer: TorrentPeer) -> Result<(), StoreError>;

    async fn peer_update(&self, info_hash: &InfoHash, peer: TorrentPeer) -> Result<(), StoreError>;

    async fn peer_delete(&self, info_hash: &InfoHash, peer_id: &PeerId) -> Result<(), StoreError>;

    async fn peer_get(&self, info_hash: &InfoHash, peer_id: &PeerId) -> Result<Option<TorrentPeer>, StoreError>;

    async fn peer_get_n(&self, info_hash: &InfoHash, limit: usize) -> Result<Vec<TorrentPeer>, StoreError>;

    async fn peer_sync(&self, batch: BTreeMap<PeerHash, PeerStats>) -> Result<(), StoreError>;

    async fn whitelist_add(&self, client: WhitelistClient) -> Result<(), StoreError>;

    async fn whitelist_delete(&self, client_prefix: &str) -> Result<(), StoreError>;

    async fn whitelist_get_all(&self) -> Result<Vec<WhitelistClient>, StoreError>;
}
