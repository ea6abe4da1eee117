use std::collections::hash_map::Entry;
use std::sync::Arc;
use log::info;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::scrape_entry::ScrapeEntry;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::torrent_update::TorrentUpdate;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;

impl TorrentTracker {
    /// Registers a new torrent in the store and the cache.
    #[tracing::instrument(level = "debug")]
    pub async fn add_torrent(&self, info_hash: InfoHash, release_name: &str) -> Result<(), TrackerError>
    {
        let torrent = TorrentEntry::new(info_hash, release_name);
        self.store.torrent_add(torrent.clone()).await?;
        self.cache_torrent(torrent);
        info!("[TORRENTS] Added torrent {info_hash} ({release_name})");
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    pub async fn update_torrent(&self, info_hash: InfoHash, update: TorrentUpdate) -> Result<(), TrackerError>
    {
        self.store.torrent_update(&info_hash, update.clone()).await?;
        if let Some(torrent) = self.get_torrent_cached(&info_hash) {
            torrent.entry.write().apply_update(&update);
        }
        Ok(())
    }

    /// Soft deletes a torrent, or drops it completely when `drop_row` is set.
    #[tracing::instrument(level = "debug")]
    pub async fn delete_torrent(&self, info_hash: InfoHash, drop_row: bool) -> Result<(), TrackerError>
    {
        self.store.torrent_delete(&info_hash, drop_row).await?;
        if drop_row {
            if self.torrents.write().remove(&info_hash).is_some() {
                self.update_stats(StatsEvent::Torrents, -1);
            }
        } else if let Some(torrent) = self.get_torrent_cached(&info_hash) {
            torrent.entry.write().is_deleted = true;
        }
        info!("[TORRENTS] Deleted torrent {info_hash} (drop: {drop_row})");
        Ok(())
    }

    pub fn get_torrent_cached(&self, info_hash: &InfoHash) -> Option<Arc<TrackedTorrent>>
    {
        self.torrents.read_recursive().get(info_hash).cloned()
    }

    /// Returns the cached torrent, hydrating it from the store on first
    /// reference. Soft deleted torrents are not hydrated.
    #[tracing::instrument(level = "debug")]
    pub async fn get_torrent(&self, info_hash: &InfoHash) -> Result<Option<Arc<TrackedTorrent>>, TrackerError>
    {
        if let Some(torrent) = self.get_torrent_cached(info_hash) {
            return Ok(Some(torrent));
        }
        match self.store.torrent_get(info_hash, false).await? {
            None => Ok(None),
            Some(torrent) => Ok(Some(self.cache_torrent(torrent)))
        }
    }

    /// Inserts a torrent unless another request cached it first, returning the cached one.
    pub(crate) fn cache_torrent(&self, torrent: TorrentEntry) -> Arc<TrackedTorrent>
    {
        let mut lock = self.torrents.write();
        match lock.entry(torrent.info_hash) {
            Entry::Occupied(o) => o.get().clone(),
            Entry::Vacant(v) => {
                self.update_stats(StatsEvent::Torrents, 1);
                v.insert(Arc::new(TrackedTorrent::new(torrent))).clone()
            }
        }
    }

    pub fn get_torrents_cached(&self) -> Vec<Arc<TrackedTorrent>>
    {
        self.torrents.read_recursive().values().cloned().collect()
    }

    /// Scrape counters for one torrent, `None` when unknown or deleted.
    #[tracing::instrument(level = "debug")]
    pub async fn scrape_torrent(&self, info_hash: &InfoHash) -> Result<Option<ScrapeEntry>, TrackerError>
    {
        let torrent = match self.get_torrent(info_hash).await? {
            None => return Ok(None),
            Some(torrent) => torrent
        };
        let (complete, incomplete) = torrent.swarm.counts();
        let entry = torrent.entry.read_recursive();
        if entry.is_deleted {
            return Ok(None);
        }
        Ok(Some(ScrapeEntry {
            complete,
            incomplete,
            downloaded: entry.snatches,
        }))
    }
}
