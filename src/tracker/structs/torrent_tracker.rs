use std::collections::BTreeMap;
use std::sync::Arc;
use ahash::{AHashMap, AHashSet};
use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::traits::store_backend::StoreBackend;
use crate::tracker::enums::sync_item::SyncItem;
use crate::tracker::structs::peer_hash::PeerHash;
use crate::tracker::structs::whitelist_client::WhitelistClient;
use crate::tracker::types::torrents_map::TorrentsMap;
use crate::tracker::types::users_map::UsersMap;

/// The tracker registry.
///
/// Holds the in-memory aggregates, which are authoritative while the process
/// runs, and the store they are hydrated from and synced to. Both the
/// configuration and the store are injected through `TorrentTracker::new`.
pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub store: Arc<dyn StoreBackend>,
    pub torrents: TorrentsMap,
    pub users: UsersMap,
    pub users_ids: Arc<RwLock<AHashMap<u32, String>>>,
    pub whitelist: Arc<RwLock<BTreeMap<String, WhitelistClient>>>,
    pub sync_sender: mpsc::Sender<SyncItem>,
    pub sync_receiver: Mutex<Option<mpsc::Receiver<SyncItem>>>,
    /// Peers that left their swarm while the sync queue was full.
    pub pending_deletes: Mutex<AHashSet<PeerHash>>,
    pub stats: Arc<StatsAtomics>,
}
