use log::info;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::whitelist_client::WhitelistClient;

impl TorrentTracker {
    #[tracing::instrument(level = "debug")]
    pub async fn load_whitelist(&self) -> Result<u64, TrackerError>
    {
        let clients = self.store.whitelist_get_all().await?;
        let count = clients.len() as u64;
        let mut lock = self.whitelist.write();
        lock.clear();
        for client in clients {
            lock.insert(client.client_prefix.clone(), client);
        }
        drop(lock);
        self.set_stats(StatsEvent::Whitelist, count as i64);
        info!("[WHITELIST] Loaded {count} clients");
        Ok(count)
    }

    #[tracing::instrument(level = "debug")]
    pub async fn add_whitelist(&self, client_prefix: &str, client_name: &str) -> Result<(), TrackerError>
    {
        let client = WhitelistClient::new(client_prefix, client_name);
        self.store.whitelist_add(client.clone()).await?;
        if self.whitelist.write().insert(client.client_prefix.clone(), client).is_none() {
            self.update_stats(StatsEvent::Whitelist, 1);
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    pub async fn remove_whitelist(&self, client_prefix: &str) -> Result<(), TrackerError>
    {
        self.store.whitelist_delete(client_prefix).await?;
        if self.whitelist.write().remove(client_prefix).is_some() {
            self.update_stats(StatsEvent::Whitelist, -1);
        }
        Ok(())
    }

    pub fn check_whitelist(&self, peer_id: &PeerId) -> bool
    {
        self.whitelist.read_recursive().values().any(|client| client.matches(peer_id))
    }
}
