use std::sync::Arc;
use log::info;
use parking_lot::RwLock;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::user_entry_item::UserEntryItem;

impl TorrentTracker {
    #[tracing::instrument(level = "debug")]
    pub async fn add_user(&self, user_id: u32, passkey: &str) -> Result<(), TrackerError>
    {
        let user = UserEntryItem::new(user_id, passkey);
        self.store.user_add(user.clone()).await?;
        self.cache_user(user);
        info!("[USERS] Added user {user_id}");
        Ok(())
    }

    /// Replaces the account fields of a user. Counters and membership stay
    /// with the cached record.
    #[tracing::instrument(level = "debug")]
    pub async fn update_user(&self, user: UserEntryItem, old_passkey: &str) -> Result<(), TrackerError>
    {
        self.store.user_update(user.clone(), old_passkey).await?;
        let cached = self.users.write().remove(old_passkey);
        if let Some(cached) = cached {
            {
                let mut lock = cached.write();
                lock.passkey = user.passkey.clone();
                lock.is_deleted = user.is_deleted;
                lock.enabled = user.enabled;
                lock.download_enabled = user.download_enabled;
            }
            self.users.write().insert(user.passkey.clone(), cached);
            self.users_ids.write().insert(user.user_id, user.passkey.clone());
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    pub async fn delete_user(&self, user_id: u32) -> Result<(), TrackerError>
    {
        self.store.user_delete(user_id).await?;
        let passkey = self.users_ids.write().remove(&user_id);
        if let Some(passkey) = passkey {
            if let Some(user) = self.users.write().remove(&passkey) {
                user.write().is_deleted = true;
                self.update_stats(StatsEvent::Users, -1);
            }
        }
        info!("[USERS] Deleted user {user_id}");
        Ok(())
    }

    pub fn get_user_cached(&self, passkey: &str) -> Option<Arc<RwLock<UserEntryItem>>>
    {
        self.users.read_recursive().get(passkey).cloned()
    }

    pub fn get_user_cached_by_id(&self, user_id: u32) -> Option<Arc<RwLock<UserEntryItem>>>
    {
        let passkey = self.users_ids.read_recursive().get(&user_id).cloned()?;
        self.get_user_cached(&passkey)
    }

    /// Returns the user for a passkey, hydrating it from the store on first reference.
    #[tracing::instrument(level = "debug")]
    pub async fn get_user(&self, passkey: &str) -> Result<Option<Arc<RwLock<UserEntryItem>>>, TrackerError>
    {
        if let Some(user) = self.get_user_cached(passkey) {
            return Ok(Some(user));
        }
        match self.store.user_get_by_passkey(passkey).await? {
            None => Ok(None),
            Some(user) => Ok(Some(self.cache_user(user)))
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn get_user_by_id(&self, user_id: u32) -> Result<Option<Arc<RwLock<UserEntryItem>>>, TrackerError>
    {
        if let Some(user) = self.get_user_cached_by_id(user_id) {
            return Ok(Some(user));
        }
        match self.store.user_get_by_id(user_id).await? {
            None => Ok(None),
            Some(user) => Ok(Some(self.cache_user(user)))
        }
    }

    pub(crate) fn cache_user(&self, user: UserEntryItem) -> Arc<RwLock<UserEntryItem>>
    {
        let user_id = user.user_id;
        let passkey = user.passkey.clone();
        let cached = {
            let mut lock = self.users.write();
            if let Some(existing) = lock.get(&passkey) {
                return existing.clone();
            }
            let cached = Arc::new(RwLock::new(user));
            lock.insert(passkey.clone(), cached.clone());
            cached
        };
        self.users_ids.write().insert(user_id, passkey);
        self.update_stats(StatsEvent::Users, 1);
        cached
    }
}
