mod common;

use std::sync::Arc;
use ahash::AHashSet;
use mika_tracker::store::enums::store_drivers::StoreDrivers;
use mika_tracker::tracker::enums::announce_event::AnnounceEvent;
use mika_tracker::tracker::enums::sync_item::SyncItem;
use mika_tracker::tracker::structs::info_hash::InfoHash;
use mika_tracker::tracker::structs::torrent_tracker::TorrentTracker;

fn drain_queue(tracker: &TorrentTracker) -> AHashSet<SyncItem> {
    let mut pending = AHashSet::new();
    let mut lock = tracker.sync_receiver.lock();
    if let Some(receiver) = lock.as_mut() {
        while let Ok(item) = receiver.try_recv() {
            pending.insert(item);
        }
    }
    pending
}

async fn announce_session(tracker: &Arc<TorrentTracker>, info_hash: InfoHash) {
    let peer_id = common::random_peer_id();
    tracker.handle_announce(common::PASSKEY, common::announce_request(info_hash, peer_id, 1000, AnnounceEvent::Started)).await.unwrap();
    let mut request = common::announce_request(info_hash, peer_id, 0, AnnounceEvent::Completed);
    request.uploaded = 300;
    request.downloaded = 1000;
    tracker.handle_announce(common::PASSKEY, request).await.unwrap();
}

async fn check_sync(tracker: Arc<TorrentTracker>) {
    let info_hash = common::random_info_hash();
    tracker.add_user(common::USER_ID, common::PASSKEY).await.unwrap();
    tracker.add_torrent(info_hash, "Synced.Release").await.unwrap();
    announce_session(&tracker, info_hash).await;

    let mut pending = drain_queue(&tracker);
    assert_eq!(pending.len(), 3, "Torrent, user and peer should each be queued once");
    assert!(pending.contains(&SyncItem::Torrent(info_hash)));
    assert!(pending.contains(&SyncItem::User(common::USER_ID)));

    assert!(tracker.sync_updates(&mut pending).await, "Sync should succeed");
    assert!(pending.is_empty(), "Written items leave the pending set");

    let torrent = tracker.store.torrent_get(&info_hash, false).await.unwrap().expect("Torrent row should exist");
    assert_eq!(torrent.uploaded, 300);
    assert_eq!(torrent.downloaded, 1000);
    assert_eq!(torrent.snatches, 1);
    assert_eq!(torrent.announces, 2);
    assert_eq!((torrent.seeders, torrent.leechers), (1, 0));

    let user = tracker.store.user_get_by_id(common::USER_ID).await.unwrap().expect("User row should exist");
    assert_eq!((user.uploaded, user.downloaded, user.snatches, user.announces), (300, 1000, 1, 2));
    assert!(user.torrents.complete.contains(&info_hash));
    assert_eq!(tracker.store.peer_get_n(&info_hash, 10).await.unwrap().len(), 1, "Peer row should be inserted");

    let mut again: AHashSet<SyncItem> = [SyncItem::Torrent(info_hash), SyncItem::User(common::USER_ID)].into_iter().collect();
    assert!(tracker.sync_updates(&mut again).await);
    let torrent = tracker.store.torrent_get(&info_hash, false).await.unwrap().unwrap();
    assert_eq!(torrent.uploaded, 300, "Deltas are written exactly once");
    let user = tracker.store.user_get_by_id(common::USER_ID).await.unwrap().unwrap();
    assert_eq!(user.announces, 2, "Deltas are written exactly once");

    let cached = tracker.get_torrent_cached(&info_hash).unwrap();
    assert!(!cached.entry.read().in_queue, "Synced torrents can be queued again");
    let stats = tracker.get_stats();
    assert_eq!(stats.sync_ok, 2);
    assert_eq!(stats.queue_len, 0);
}

#[tokio::test]
async fn test_sync_memory_store() {
    check_sync(common::create_test_tracker()).await;
}

#[tokio::test]
async fn test_sync_sqlite_store() {
    let dir = common::create_temp_dir();
    let mut config = common::create_test_config();
    config.database.engine = StoreDrivers::sqlite3;
    config.database.path = format!("sqlite://{}", dir.path().join("sync.db").display());
    let store = TorrentTracker::create_store(&config).await.expect("Failed to open the SQLite store");
    check_sync(Arc::new(TorrentTracker::new(Arc::new(config), store))).await;
}

#[tokio::test]
async fn test_sync_removes_stopped_peers() {
    let (tracker, info_hash) = common::create_seeded_tracker().await;
    let peer_id = common::random_peer_id();
    tracker.handle_announce(common::PASSKEY, common::announce_request(info_hash, peer_id, 1000, AnnounceEvent::Started)).await.unwrap();
    let mut pending = drain_queue(&tracker);
    assert!(tracker.sync_updates(&mut pending).await);
    assert!(tracker.store.peer_get(&info_hash, &peer_id).await.unwrap().is_some());

    tracker.handle_announce(common::PASSKEY, common::announce_request(info_hash, peer_id, 1000, AnnounceEvent::Stopped)).await.unwrap();
    let mut pending = drain_queue(&tracker);
    assert!(tracker.sync_updates(&mut pending).await);
    assert!(tracker.store.peer_get(&info_hash, &peer_id).await.unwrap().is_none(), "Stopped peers are deleted from the store");
}

#[tokio::test]
async fn test_sync_rehydrated_tracker_sees_totals() {
    let (tracker, info_hash) = common::create_seeded_tracker().await;
    announce_session(&tracker, info_hash).await;
    let mut pending = drain_queue(&tracker);
    assert!(tracker.sync_updates(&mut pending).await);

    let restarted = TorrentTracker::new(tracker.config.clone(), tracker.store.clone());
    let torrent = restarted.get_torrent(&info_hash).await.unwrap().expect("Torrent should hydrate");
    assert_eq!(torrent.entry.read().snatches, 1, "Hydrated torrent carries the synced totals");
    let user = restarted.get_user(common::PASSKEY).await.unwrap().expect("User should hydrate");
    assert_eq!(user.read().uploaded, 300);
}
