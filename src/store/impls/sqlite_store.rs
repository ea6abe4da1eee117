use std::collections::BTreeMap;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{ConnectOptions, Error, Row, Sqlite, Transaction};
use crate::store::enums::store_error::StoreError;
use crate::store::structs::sqlite_store::SqliteStore;
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
use crate::tracker::structs::user_torrents::UserTorrents;
use crate::tracker::structs::whitelist_client::WhitelistClient;

const LOG_PREFIX: &str = "[SQLite]";

const CREATE_TABLES: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS `torrents` (\
        `info_hash` TEXT PRIMARY KEY NOT NULL, \
        `release_name` TEXT NOT NULL DEFAULT '', \
        `snatches` INTEGER NOT NULL DEFAULT 0, \
        `uploaded` INTEGER NOT NULL DEFAULT 0, \
        `downloaded` INTEGER NOT NULL DEFAULT 0, \
        `announces` INTEGER NOT NULL DEFAULT 0, \
        `seeders` INTEGER NOT NULL DEFAULT 0, \
        `leechers` INTEGER NOT NULL DEFAULT 0, \
        `is_deleted` INTEGER NOT NULL DEFAULT 0, \
        `is_enabled` INTEGER NOT NULL DEFAULT 1, \
        `reason` TEXT NOT NULL DEFAULT '', \
        `multi_up` REAL NOT NULL DEFAULT 1.0, \
        `multi_dn` REAL NOT NULL DEFAULT 1.0)",
    "CREATE TABLE IF NOT EXISTS `users` (\
        `user_id` INTEGER PRIMARY KEY NOT NULL, \
        `passkey` TEXT NOT NULL UNIQUE, \
        `is_deleted` INTEGER NOT NULL DEFAULT 0, \
        `enabled` INTEGER NOT NULL DEFAULT 1, \
        `download_enabled` INTEGER NOT NULL DEFAULT 1, \
        `uploaded` INTEGER NOT NULL DEFAULT 0, \
        `downloaded` INTEGER NOT NULL DEFAULT 0, \
        `corrupt` INTEGER NOT NULL DEFAULT 0, \
        `snatches` INTEGER NOT NULL DEFAULT 0, \
        `announces` INTEGER NOT NULL DEFAULT 0, \
        `torrents` TEXT NOT NULL DEFAULT '{}')",
    "CREATE TABLE IF NOT EXISTS `peers` (\
        `info_hash` TEXT NOT NULL, \
        `peer_id` TEXT NOT NULL, \
        `user_id` INTEGER NOT NULL, \
        `ip` TEXT NOT NULL, \
        `port` INTEGER NOT NULL, \
        `client` TEXT NOT NULL DEFAULT '', \
        `uploaded` INTEGER NOT NULL DEFAULT 0, \
        `downloaded` INTEGER NOT NULL DEFAULT 0, \
        `corrupt` INTEGER NOT NULL DEFAULT 0, \
        `left` INTEGER NOT NULL DEFAULT 0, \
        `total_time` INTEGER NOT NULL DEFAULT 0, \
        `speed_up_max` INTEGER NOT NULL DEFAULT 0, \
        `speed_dn_max` INTEGER NOT NULL DEFAULT 0, \
        `announces` INTEGER NOT NULL DEFAULT 0, \
        `announce_first` INTEGER NOT NULL DEFAULT 0, \
        `announce_last` INTEGER NOT NULL DEFAULT 0, \
        `active` INTEGER NOT NULL DEFAULT 1, \
        `snatched` INTEGER NOT NULL DEFAULT 0, \
        PRIMARY KEY (`info_hash`, `peer_id`))",
    "CREATE TABLE IF NOT EXISTS `whitelist` (\
        `client_prefix` TEXT PRIMARY KEY NOT NULL, \
        `client_name` TEXT NOT NULL DEFAULT '')",
];

const UPSERT_PEER: &str = "INSERT INTO `peers` (`info_hash`, `peer_id`, `user_id`, `ip`, `port`, `client`, `uploaded`, `downloaded`, `corrupt`, `left`, `total_time`, `speed_up_max`, `speed_dn_max`, `announces`, `announce_first`, `announce_last`, `active`, `snatched`) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

impl SqliteStore {
    /// Connects to the database at `dsl` and creates the tables when missing.
    #[tracing::instrument(level = "debug")]
    pub async fn connect(dsl: &str) -> Result<SqliteStore, StoreError> {
        let options = SqliteConnectOptions::from_str(dsl)?
            .create_if_missing(true)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        let pool = match SqlitePoolOptions::new().connect_with(options).await {
            Ok(pool) => pool,
            Err(error) => {
                error!("{LOG_PREFIX} Unable to connect to SQLite on DSL {dsl}");
                error!("{LOG_PREFIX} Message: {error}");
                return Err(StoreError::Database(error));
            }
        };
        let store = SqliteStore { pool };
        store.create_tables().await?;
        Ok(store)
    }

    #[tracing::instrument(level = "debug")]
    async fn create_tables(&self) -> Result<(), StoreError> {
        info!("{LOG_PREFIX} Setting the PRAGMA config...");
        let _ = sqlx::query("PRAGMA temp_store = memory;").execute(&self.pool).await;
        let _ = sqlx::query("PRAGMA synchronous = normal;").execute(&self.pool).await;
        for query in CREATE_TABLES {
            if let Err(error) = sqlx::query(query).execute(&self.pool).await {
                error!("{LOG_PREFIX} Error: {error}");
                return Err(StoreError::Database(error));
            }
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    pub async fn commit(&self, transaction: Transaction<'_, Sqlite>) -> Result<(), Error> {
        match transaction.commit().await {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("{LOG_PREFIX} Error: {e}");
                Err(e)
            }
        }
    }

    fn map_insert_error(error: Error) -> StoreError {
        match error.as_database_error() {
            Some(database_error) if database_error.is_unique_violation() => StoreError::Duplicate,
            _ => StoreError::Database(error)
        }
    }

    fn torrent_from_row(row: &SqliteRow) -> Result<TorrentEntry, StoreError> {
        let info_hash: String = row.try_get("info_hash")?;
        let info_hash = InfoHash::from_str(&info_hash)
            .map_err(|_| StoreError::Decode(format!("info_hash {info_hash}")))?;
        let mut torrent = TorrentEntry::new(info_hash, row.try_get::<String, _>("release_name")?.as_str());
        torrent.snatches = row.try_get::<i64, _>("snatches")? as u64;
        torrent.uploaded = row.try_get::<i64, _>("uploaded")? as u64;
        torrent.downloaded = row.try_get::<i64, _>("downloaded")? as u64;
        torrent.announces = row.try_get::<i64, _>("announces")? as u64;
        torrent.seeders = row.try_get::<i64, _>("seeders")?.max(0) as u64;
        torrent.leechers = row.try_get::<i64, _>("leechers")?.max(0) as u64;
        torrent.is_deleted = row.try_get("is_deleted")?;
        torrent.is_enabled = row.try_get("is_enabled")?;
        torrent.reason = row.try_get("reason")?;
        torrent.multi_up = row.try_get("multi_up")?;
        torrent.multi_dn = row.try_get("multi_dn")?;
        Ok(torrent)
    }

    fn user_from_row(row: &SqliteRow) -> Result<UserEntryItem, StoreError> {
        let user_id: i64 = row.try_get("user_id")?;
        let passkey: String = row.try_get("passkey")?;
        let mut user = UserEntryItem::new(user_id as u32, &passkey);
        user.is_deleted = row.try_get("is_deleted")?;
        user.enabled = row.try_get("enabled")?;
        user.download_enabled = row.try_get("download_enabled")?;
        user.uploaded = row.try_get::<i64, _>("uploaded")? as u64;
        user.downloaded = row.try_get::<i64, _>("downloaded")? as u64;
        user.corrupt = row.try_get::<i64, _>("corrupt")? as u64;
        user.snatches = row.try_get::<i64, _>("snatches")? as u64;
        user.announces = row.try_get::<i64, _>("announces")? as u64;
        let torrents: String = row.try_get("torrents")?;
        user.torrents = serde_json::from_str::<UserTorrents>(&torrents)
            .map_err(|error| StoreError::Decode(format!("torrents of user {user_id}: {error}")))?;
        Ok(user)
    }

    fn peer_from_row(row: &SqliteRow) -> Result<TorrentPeer, StoreError> {
        let info_hash: String = row.try_get("info_hash")?;
        let info_hash = InfoHash::from_str(&info_hash)
            .map_err(|_| StoreError::Decode(format!("info_hash {info_hash}")))?;
        let peer_id: String = row.try_get("peer_id")?;
        let peer_id = PeerId::from_str(&peer_id)
            .map_err(|_| StoreError::Decode(format!("peer_id {peer_id}")))?;
        let ip: String = row.try_get("ip")?;
        let ip = IpAddr::from_str(&ip)
            .map_err(|_| StoreError::Decode(format!("ip {ip}")))?;
        let port: i64 = row.try_get("port")?;
        let user_id: i64 = row.try_get("user_id")?;
        let mut peer = TorrentPeer::new(info_hash, peer_id, user_id as u32, SocketAddr::new(ip, port as u16));
        peer.client = row.try_get("client")?;
        peer.uploaded = row.try_get::<i64, _>("uploaded")? as u64;
        peer.downloaded = row.try_get::<i64, _>("downloaded")? as u64;
        peer.corrupt = row.try_get::<i64, _>("corrupt")? as u64;
        peer.left = row.try_get::<i64, _>("left")? as u64;
        peer.total_time = row.try_get::<i64, _>("total_time")? as u64;
        peer.speed_up_max = row.try_get::<i64, _>("speed_up_max")? as u64;
        peer.speed_dn_max = row.try_get::<i64, _>("speed_dn_max")? as u64;
        peer.announces = row.try_get::<i64, _>("announces")? as u64;
        peer.announce_first = row.try_get("announce_first")?;
        peer.announce_last = row.try_get("announce_last")?;
        peer.active = row.try_get("active")?;
        peer.snatched = row.try_get("snatched")?;
        peer.stored = true;
        Ok(peer)
    }

    fn torrents_json(torrents: &UserTorrents) -> Result<String, StoreError> {
        serde_json::to_string(torrents).map_err(|error| StoreError::Decode(error.to_string()))
    }

    async fn write_peer(&self, info_hash: &InfoHash, peer: &TorrentPeer, replace: bool) -> Result<u64, Error> {
        let query = if replace {
            UPSERT_PEER.replacen("INSERT INTO", "INSERT OR REPLACE INTO", 1)
        } else {
            UPSERT_PEER.to_string()
        };
        let result = sqlx::query(&query)
            .bind(info_hash.to_string())
            .bind(peer.peer_id.to_string())
            .bind(peer.user_id as i64)
            .bind(peer.peer_addr.ip().to_string())
            .bind(peer.peer_addr.port() as i64)
            .bind(&peer.client)
            .bind(peer.uploaded as i64)
            .bind(peer.downloaded as i64)
            .bind(peer.corrupt as i64)
            .bind(peer.left as i64)
            .bind(peer.total_time as i64)
            .bind(peer.speed_up_max as i64)
            .bind(peer.speed_dn_max as i64)
            .bind(peer.announces as i64)
            .bind(peer.announce_first)
            .bind(peer.announce_last)
            .bind(peer.active)
            .bind(peer.snatched)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl StoreBackend for SqliteStore {
    #[tracing::instrument(level = "debug")]
    async fn torrent_get(&self, info_hash: &InfoHash, deleted_ok: bool) -> Result<Option<TorrentEntry>, StoreError> {
        let row = sqlx::query("SELECT * FROM `torrents` WHERE `info_hash` = ?")
            .bind(info_hash.to_string())
            .fetch_optional(&self.pool)
            .await?;
        match row {
            None => Ok(None),
            Some(row) => {
                let torrent = Self::torrent_from_row(&row)?;
                if torrent.is_deleted && !deleted_ok {
                    return Ok(None);
                }
                Ok(Some(torrent))
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    async fn torrent_add(&self, torrent: TorrentEntry) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO `torrents` (`info_hash`, `release_name`, `is_enabled`, `reason`, `multi_up`, `multi_dn`) VALUES (?, ?, ?, ?, ?, ?)")
            .bind(torrent.info_hash.to_string())
            .bind(&torrent.release_name)
            .bind(torrent.is_enabled)
            .bind(&torrent.reason)
            .bind(torrent.multi_up)
            .bind(torrent.multi_dn)
            .execute(&self.pool)
            .await
            .map_err(Self::map_insert_error)?;
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    async fn torrent_update(&self, info_hash: &InfoHash, update: TorrentUpdate) -> Result<(), StoreError> {
        let mut torrent = self.torrent_get(info_hash, true).await?.ok_or(StoreError::InvalidInfoHash)?;
        torrent.apply_update(&update);
        sqlx::query("UPDATE `torrents` SET `release_name` = ?, `is_enabled` = ?, `reason` = ?, `multi_up` = ?, `multi_dn` = ? WHERE `info_hash` = ?")
            .bind(&torrent.release_name)
            .bind(torrent.is_enabled)
            .bind(&torrent.reason)
            .bind(torrent.multi_up)
            .bind(torrent.multi_dn)
            .bind(info_hash.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    async fn torrent_delete(&self, info_hash: &InfoHash, drop_row: bool) -> Result<(), StoreError> {
        let query = if drop_row {
            "DELETE FROM `torrents` WHERE `info_hash` = ?"
        } else {
            "UPDATE `torrents` SET `is_deleted` = 1 WHERE `info_hash` = ?"
        };
        let result = sqlx::query(query)
            .bind(info_hash.to_string())
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::InvalidInfoHash);
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    async fn torrent_sync(&self, batch: BTreeMap<InfoHash, TorrentStats>) -> Result<(), StoreError> {
        let mut transaction = self.pool.begin().await?;
        for (info_hash, stats) in batch.iter() {
            let query = "UPDATE `torrents` SET \
                `seeders` = MAX(0, `seeders` + ?), `leechers` = MAX(0, `leechers` + ?), \
                `snatches` = `snatches` + ?, `uploaded` = `uploaded` + ?, \
                `downloaded` = `downloaded` + ?, `announces` = `announces` + ? \
                WHERE `info_hash` = ?";
            if let Err(e) = sqlx::query(query)
                .bind(stats.seeders)
                .bind(stats.leechers)
                .bind(stats.snatches as i64)
                .bind(stats.uploaded as i64)
                .bind(stats.downloaded as i64)
                .bind(stats.announces as i64)
                .bind(info_hash.to_string())
                .execute(&mut *transaction)
                .await
            {
                error!("{LOG_PREFIX} Error: {e}");
                return Err(StoreError::Database(e));
            }
        }
        self.commit(transaction).await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    async fn user_get_by_passkey(&self, passkey: &str) -> Result<Option<UserEntryItem>, StoreError> {
        let row = sqlx::query("SELECT * FROM `users` WHERE `passkey` = ?")
            .bind(passkey)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| Self::user_from_row(&row)).transpose()
    }

    #[tracing::instrument(level = "debug")]
    async fn user_get_by_id(&self, user_id: u32) -> Result<Option<UserEntryItem>, StoreError> {
        let row = sqlx::query("SELECT * FROM `users` WHERE `user_id` = ?")
            .bind(user_id as i64)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| Self::user_from_row(&row)).transpose()
    }

    #[tracing::instrument(level = "debug")]
    async fn user_add(&self, user: UserEntryItem) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO `users` (`user_id`, `passkey`, `is_deleted`, `enabled`, `download_enabled`, `uploaded`, `downloaded`, `corrupt`, `snatches`, `announces`, `torrents`) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)")
            .bind(user.user_id as i64)
            .bind(&user.passkey)
            .bind(user.is_deleted)
            .bind(user.enabled)
            .bind(user.download_enabled)
            .bind(user.uploaded as i64)
            .bind(user.downloaded as i64)
            .bind(user.corrupt as i64)
            .bind(user.snatches as i64)
            .bind(user.announces as i64)
            .bind(Self::torrents_json(&user.torrents)?)
            .execute(&self.pool)
            .await
            .map_err(Self::map_insert_error)?;
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    async fn user_update(&self, user: UserEntryItem, old_passkey: &str) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE `users` SET `passkey` = ?, `is_deleted` = ?, `enabled` = ?, `download_enabled` = ? WHERE `passkey` = ?")
            .bind(&user.passkey)
            .bind(user.is_deleted)
            .bind(user.enabled)
            .bind(user.download_enabled)
            .bind(old_passkey)
            .execute(&self.pool)
            .await
            .map_err(Self::map_insert_error)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::InvalidUser);
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    async fn user_delete(&self, user_id: u32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM `users` WHERE `user_id` = ?")
            .bind(user_id as i64)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::InvalidUser);
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    async fn user_sync(&self, batch: BTreeMap<String, UserStats>) -> Result<(), StoreError> {
        let mut transaction = self.pool.begin().await?;
        for (passkey, stats) in batch.iter() {
            let query = "UPDATE `users` SET \
                `uploaded` = `uploaded` + ?, `downloaded` = `downloaded` + ?, `corrupt` = `corrupt` + ?, \
                `snatches` = `snatches` + ?, `announces` = `announces` + ? \
                WHERE `passkey` = ?";
            if let Err(e) = sqlx::query(query)
                .bind(stats.uploaded as i64)
                .bind(stats.downloaded as i64)
                .bind(stats.corrupt as i64)
                .bind(stats.snatches as i64)
                .bind(stats.announces as i64)
                .bind(passkey)
                .execute(&mut *transaction)
                .await
            {
                error!("{LOG_PREFIX} Error: {e}");
                return Err(StoreError::Database(e));
            }
            if let Some(torrents) = &stats.torrents {
                if let Err(e) = sqlx::query("UPDATE `users` SET `torrents` = ? WHERE `passkey` = ?")
                    .bind(Self::torrents_json(torrents)?)
                    .bind(passkey)
                    .execute(&mut *transaction)
                    .await
                {
                    error!("{LOG_PREFIX} Error: {e}");
                    return Err(StoreError::Database(e));
                }
            }
        }
        self.commit(transaction).await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    async fn peer_add(&self, info_hash: &InfoHash, peer: TorrentPeer) -> Result<(), StoreError> {
        self.write_peer(info_hash, &peer, false).await.map_err(Self::map_insert_error)?;
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    async fn peer_update(&self, info_hash: &InfoHash, peer: TorrentPeer) -> Result<(), StoreError> {
        if self.peer_get(info_hash, &peer.peer_id).await?.is_none() {
            return Err(StoreError::InvalidPeerId);
        }
        self.write_peer(info_hash, &peer, true).await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    async fn peer_delete(&self, info_hash: &InfoHash, peer_id: &PeerId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM `peers` WHERE `info_hash` = ? AND `peer_id` = ?")
            .bind(info_hash.to_string())
            .bind(peer_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    async fn peer_get(&self, info_hash: &InfoHash, peer_id: &PeerId) -> Result<Option<TorrentPeer>, StoreError> {
        let row = sqlx::query("SELECT * FROM `peers` WHERE `info_hash` = ? AND `peer_id` = ?")
            .bind(info_hash.to_string())
            .bind(peer_id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| Self::peer_from_row(&row)).transpose()
    }

    #[tracing::instrument(level = "debug")]
    async fn peer_get_n(&self, info_hash: &InfoHash, limit: usize) -> Result<Vec<TorrentPeer>, StoreError> {
        let info_hash = info_hash.to_string();
        let mut rows = sqlx::query("SELECT * FROM `peers` WHERE `info_hash` = ? LIMIT ?")
            .bind(&info_hash)
            .bind(limit as i64)
            .fetch(&self.pool);
        let mut peers = Vec::new();
        while let Some(row) = rows.try_next().await? {
            peers.push(Self::peer_from_row(&row)?);
        }
        Ok(peers)
    }

    #[tracing::instrument(level = "debug")]
    async fn peer_sync(&self, batch: BTreeMap<PeerHash, PeerStats>) -> Result<(), StoreError> {
        let mut transaction = self.pool.begin().await?;
        for (peer_hash, stats) in batch.iter() {
            let query = "UPDATE `peers` SET \
                `uploaded` = `uploaded` + ?, `downloaded` = `downloaded` + ?, `corrupt` = `corrupt` + ?, \
                `announces` = `announces` + ?, `left` = ?, `total_time` = ?, \
                `speed_up_max` = MAX(`speed_up_max`, ?), `speed_dn_max` = MAX(`speed_dn_max`, ?), \
                `announce_last` = ? \
                WHERE `info_hash` = ? AND `peer_id` = ?";
            if let Err(e) = sqlx::query(query)
                .bind(stats.uploaded as i64)
                .bind(stats.downloaded as i64)
                .bind(stats.corrupt as i64)
                .bind(stats.announces as i64)
                .bind(stats.left as i64)
                .bind(stats.total_time as i64)
                .bind(stats.speed_up_max as i64)
                .bind(stats.speed_dn_max as i64)
                .bind(stats.announce_last)
                .bind(peer_hash.info_hash().to_string())
                .bind(peer_hash.peer_id().to_string())
                .execute(&mut *transaction)
                .await
            {
                error!("{LOG_PREFIX} Error: {e}");
                return Err(StoreError::Database(e));
            }
        }
        self.commit(transaction).await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    async fn whitelist_add(&self, client: WhitelistClient) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO `whitelist` (`client_prefix`, `client_name`) VALUES (?, ?)")
            .bind(&client.client_prefix)
            .bind(&client.client_name)
            .execute(&self.pool)
            .await
            .map_err(Self::map_insert_error)?;
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    async fn whitelist_delete(&self, client_prefix: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM `whitelist` WHERE `client_prefix` = ?")
            .bind(client_prefix)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::InvalidClient);
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    async fn whitelist_get_all(&self) -> Result<Vec<WhitelistClient>, StoreError> {
        let rows = sqlx::query("SELECT `client_prefix`, `client_name` FROM `whitelist`")
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(|row| -> Result<WhitelistClient, StoreError> {
                Ok(WhitelistClient {
                    client_prefix: row.try_get("client_prefix")?,
                    client_name: row.try_get("client_name")?,
                })
            })
            .collect()
    }
}
