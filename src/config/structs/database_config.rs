use serde::{Deserialize, Serialize};
use crate::store::enums::store_drivers::StoreDrivers;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    pub engine: StoreDrivers,
    pub path: String,
    /// Seconds between batch syncs to the store.
    pub persistent_interval: u64,
    /// Pending items that trigger an early sync.
    pub sync_batch_size: usize,
    pub sync_queue_size: usize
}
