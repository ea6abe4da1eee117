use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use ahash::{AHashMap, AHashSet};
use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::enums::store_drivers::StoreDrivers;
use crate::store::enums::store_error::StoreError;
use crate::store::structs::memory_store::MemoryStore;
use crate::store::structs::sqlite_store::SqliteStore;
use crate::store::traits::store_backend::StoreBackend;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn new(config: Arc<Configuration>, store: Arc<dyn StoreBackend>) -> TorrentTracker
    {
        let (sync_sender, sync_receiver) = mpsc::channel(config.database.sync_queue_size.max(1));
        TorrentTracker {
            config,
            store,
            torrents: Arc::new(RwLock::new(AHashMap::new())),
            users: Arc::new(RwLock::new(AHashMap::new())),
            users_ids: Arc::new(RwLock::new(AHashMap::new())),
            whitelist: Arc::new(RwLock::new(BTreeMap::new())),
            sync_sender,
            sync_receiver: Mutex::new(Some(sync_receiver)),
            pending_deletes: Mutex::new(AHashSet::new()),
            stats: Arc::new(StatsAtomics::new()),
        }
    }

    /// Opens the store selected in the configuration.
    #[tracing::instrument(level = "debug")]
    pub async fn create_store(config: &Configuration) -> Result<Arc<dyn StoreBackend>, StoreError>
    {
        match config.database.engine {
            StoreDrivers::memory => Ok(Arc::new(MemoryStore::new())),
            StoreDrivers::sqlite3 => Ok(Arc::new(SqliteStore::connect(&config.database.path).await?))
        }
    }
}

impl fmt::Debug for TorrentTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TorrentTracker")
            .field("engine", &self.config.database.engine)
            .field("torrents", &self.torrents.read_recursive().len())
            .field("users", &self.users.read_recursive().len())
            .finish_non_exhaustive()
    }
}
