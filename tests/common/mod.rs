#![allow(dead_code)]
use rand::RngExt;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use tempfile::TempDir;
use mika_tracker::config::structs::configuration::Configuration;
use mika_tracker::config::structs::http_trackers_config::HttpTrackersConfig;
use mika_tracker::store::structs::memory_store::MemoryStore;
use mika_tracker::tracker::enums::announce_event::AnnounceEvent;
use mika_tracker::tracker::structs::announce_query_request::AnnounceQueryRequest;
use mika_tracker::tracker::structs::info_hash::InfoHash;
use mika_tracker::tracker::structs::peer_id::PeerId;
use mika_tracker::tracker::structs::torrent_tracker::TorrentTracker;

pub type TestTracker = Arc<TorrentTracker>;
pub type TestConfig = Arc<Configuration>;

pub const PASSKEY: &str = "0123456789abcdef0123456789abcdef";
pub const USER_ID: u32 = 1000;

pub fn create_test_config() -> Configuration {
    let mut config: Configuration = Configuration::init();
    config.tracker_config.whitelist_enabled = false;
    config.sentry_config.enabled = false;
    config
}

pub fn create_test_http_config() -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:6969".to_string(),
        real_ip: "X-Forwarded-For".to_string(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        max_connections: 1000,
        threads: 1,
    })
}

pub fn create_tracker_with(config: Configuration) -> TestTracker {
    Arc::new(TorrentTracker::new(Arc::new(config), Arc::new(MemoryStore::new())))
}

pub fn create_test_tracker() -> TestTracker {
    create_tracker_with(create_test_config())
}

/// A tracker that already knows one user and one torrent.
pub async fn create_seeded_tracker() -> (TestTracker, InfoHash) {
    let tracker = create_test_tracker();
    let info_hash = random_info_hash();
    tracker.add_user(USER_ID, PASSKEY).await.expect("Failed to add user");
    tracker.add_torrent(info_hash, "Test.Release.1080p").await.expect("Failed to add torrent");
    (tracker, info_hash)
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let mut bytes: [u8; 20] = rng.random();
    bytes[..8].copy_from_slice(b"-qB4650-");
    PeerId(bytes)
}

pub fn announce_request(info_hash: InfoHash, peer_id: PeerId, left: u64, event: AnnounceEvent) -> AnnounceQueryRequest {
    AnnounceQueryRequest {
        info_hash,
        peer_id,
        ip: IpAddr::V4(Ipv4Addr::new(198, 51, 100, peer_id.0[19])),
        port: 51413,
        uploaded: 0,
        downloaded: 0,
        corrupt: 0,
        left,
        numwant: 30,
        event,
        compact: true,
        no_peer_id: false,
    }
}

pub fn encode(bytes: &[u8]) -> String {
    percent_encode(bytes, NON_ALPHANUMERIC).to_string()
}

pub fn announce_query(info_hash: &InfoHash, peer_id: &PeerId, extra: &str) -> String {
    format!("info_hash={}&peer_id={}&{extra}", encode(&info_hash.0), encode(&peer_id.0))
}
