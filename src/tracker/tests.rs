mod query_tests {
    use proptest::prelude::*;
    use crate::tracker::enums::tracker_error::TrackerError;
    use crate::tracker::structs::query::Query;

    #[test]
    fn test_parse_basic_query() {
        let query = Query::parse("info_hash=%41%42&Peer_ID=abc&port=6881").unwrap();
        assert_eq!(query.params.len(), 3, "Three pairs should give three params");
        assert_eq!(query.bytes("info_hash").unwrap(), b"AB");
        assert_eq!(query.string("peer_id").unwrap(), "abc", "Keys should be lowercased");
        assert_eq!(query.u16("port").unwrap(), 6881);
    }

    #[test]
    fn test_parse_separators_and_plus() {
        let query = Query::parse("?a=1;b=hello+world&c=3").unwrap();
        assert_eq!(query.string("b").unwrap(), "hello world");
        assert_eq!(query.u32("c").unwrap(), 3);
    }

    #[test]
    fn test_parse_trailing_key_is_tolerated() {
        let query = Query::parse("a=1&b").unwrap();
        assert_eq!(query.params.len(), 1);
        let query = Query::parse("a=1&b=").unwrap();
        assert!(!query.contains("b"), "Trailing empty value should be dropped");
    }

    #[test]
    fn test_parse_rejects_key_without_value_in_the_middle() {
        assert!(matches!(Query::parse("a&b=1"), Err(TrackerError::MalformedRequest)));
        assert!(matches!(Query::parse("a=&b=1"), Err(TrackerError::MalformedRequest)));
        assert!(matches!(Query::parse("=1&b=1"), Err(TrackerError::MalformedRequest)));
    }

    #[test]
    fn test_unescape_rejects_bad_escapes() {
        assert!(Query::unescape("%4").is_err(), "Truncated escape");
        assert!(Query::unescape("abc%").is_err(), "Dangling percent");
        assert!(Query::unescape("%zz").is_err(), "Non hex escape");
        assert_eq!(Query::unescape("%ff%00").unwrap(), vec![0xff, 0x00]);
    }

    #[test]
    fn test_info_hashes_are_collected_once() {
        let query = Query::parse("info_hash=aaa&info_hash=bbb&info_hash=aaa").unwrap();
        assert_eq!(query.info_hashes, vec![b"aaa".to_vec(), b"bbb".to_vec()]);
    }

    #[test]
    fn test_numeric_accessors() {
        let query = Query::parse("left=-5&uploaded=abc&big=18446744073709551615").unwrap();
        assert_eq!(query.clamped_u64("left").unwrap(), 0, "Negative counters clamp to 0");
        assert!(matches!(query.clamped_u64("uploaded"), Err(TrackerError::ParseError { .. })));
        assert_eq!(query.u64("big").unwrap(), u64::MAX);
        assert!(matches!(query.u64("missing"), Err(TrackerError::InvalidMapKey(_))));
        assert_eq!(query.i64("left").unwrap(), -5);
    }

    proptest! {
        #[test]
        fn test_distinct_pairs_parse_to_same_count(pairs in prop::collection::btree_map("[a-z]{1,8}", "[a-zA-Z0-9]{1,8}", 1..16)) {
            let raw = pairs.iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<String>>()
                .join("&");
            let query = Query::parse(&raw).unwrap();
            prop_assert_eq!(query.params.len(), pairs.len());
            for (key, value) in pairs.iter() {
                prop_assert_eq!(query.bytes(key).unwrap(), value.as_bytes());
            }
        }
    }
}

mod validation_tests {
    use std::net::{IpAddr, Ipv4Addr};
    use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
    use crate::config::structs::configuration::Configuration;
    use crate::config::structs::tracker_config::TrackerConfig;
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::enums::tracker_error::TrackerError;
    use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
    use crate::tracker::structs::query::Query;

    const REMOTE: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7));

    fn config() -> TrackerConfig {
        Configuration::init().tracker_config
    }

    fn base_query(extra: &str) -> String {
        let info_hash = percent_encode(&[0x11u8; 20], NON_ALPHANUMERIC).to_string();
        let peer_id = percent_encode(b"-MK0100-abcdefghijkl", NON_ALPHANUMERIC).to_string();
        format!("info_hash={info_hash}&peer_id={peer_id}&{extra}")
    }

    fn validate(extra: &str) -> Result<AnnounceQueryRequest, TrackerError> {
        let query = Query::parse(&base_query(extra)).unwrap();
        AnnounceQueryRequest::from_query(&query, Some(REMOTE), None, &config())
    }

    #[test]
    fn test_port_bounds() {
        assert!(matches!(validate("port=1023&left=0"), Err(TrackerError::InvalidPort)), "1023 is below the allowed range");
        assert!(validate("port=1024&left=0").is_ok(), "1024 is the lowest allowed port");
        assert!(validate("port=65535&left=0").is_ok(), "65535 is the highest allowed port");
        assert!(matches!(validate("port=65536&left=0"), Err(TrackerError::InvalidPort)), "65536 does not fit a port");
        assert!(matches!(validate("port=abc&left=0"), Err(TrackerError::InvalidPort)));
        assert!(matches!(validate("left=0"), Err(TrackerError::MissingPort)));
    }

    #[test]
    fn test_required_fields() {
        let query = Query::parse("port=6881&left=0").unwrap();
        assert!(matches!(AnnounceQueryRequest::from_query(&query, Some(REMOTE), None, &config()), Err(TrackerError::MissingInfoHash)));

        let query = Query::parse("info_hash=short&port=6881&left=0").unwrap();
        assert!(matches!(AnnounceQueryRequest::from_query(&query, Some(REMOTE), None, &config()), Err(TrackerError::InvalidInfoHash)));

        let info_hash = percent_encode(&[0x11u8; 20], NON_ALPHANUMERIC).to_string();
        let query = Query::parse(&format!("info_hash={info_hash}&port=6881&left=0")).unwrap();
        assert!(matches!(AnnounceQueryRequest::from_query(&query, Some(REMOTE), None, &config()), Err(TrackerError::MissingPeerId)));

        assert!(matches!(validate("port=6881"), Err(TrackerError::MissingLeft)));
    }

    #[test]
    fn test_defaults_and_flags() {
        let request = validate("port=6881&left=10&event=started&numwant=500&compact=0&no_peer_id=1").unwrap();
        assert_eq!(request.event, AnnounceEvent::Started);
        assert_eq!(request.numwant, config().peers_returned_max, "numwant should be capped");
        assert!(!request.compact);
        assert!(request.no_peer_id);
        assert_eq!(request.uploaded, 0, "Missing counters default to 0");
        assert_eq!(request.ip, REMOTE);

        let request = validate("port=6881&left=10&event=bogus").unwrap();
        assert_eq!(request.event, AnnounceEvent::None);
        assert_eq!(request.numwant, config().peers_returned);
        assert!(request.compact, "Compact is the default");
    }

    #[test]
    fn test_ip_resolution_order() {
        let query = Query::parse(&base_query("port=6881&left=0&ip=198.51.100.1")).unwrap();
        let request = AnnounceQueryRequest::from_query(&query, Some(REMOTE), Some("192.0.2.1, 10.0.0.1"), &config()).unwrap();
        assert_eq!(request.ip, IpAddr::V4(Ipv4Addr::new(198, 51, 100, 1)), "The ip parameter wins");

        let query = Query::parse(&base_query("port=6881&left=0&ip=2001:db8::1")).unwrap();
        let request = AnnounceQueryRequest::from_query(&query, Some(REMOTE), Some("192.0.2.1, 10.0.0.1"), &config()).unwrap();
        assert_eq!(request.ip, IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)), "IPv6 ip parameters are ignored, first forwarded entry is used");

        let query = Query::parse(&base_query("port=6881&left=0")).unwrap();
        assert!(matches!(AnnounceQueryRequest::from_query(&query, None, None, &config()), Err(TrackerError::InvalidIp)));
    }

    #[test]
    fn test_private_ip_policy() {
        let query = Query::parse(&base_query("port=6881&left=0")).unwrap();
        let private = Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5)));
        assert!(AnnounceQueryRequest::from_query(&query, private, None, &config()).is_ok(), "Private addresses are allowed by default");

        let mut strict = config();
        strict.reject_private_ip = true;
        assert!(matches!(AnnounceQueryRequest::from_query(&query, private, None, &strict), Err(TrackerError::InvalidIp)));
    }
}

mod error_tests {
    use actix_web::http::StatusCode;
    use crate::store::enums::store_error::StoreError;
    use crate::tracker::enums::tracker_error::TrackerError;

    #[test]
    fn test_codes_and_statuses() {
        let cases = vec![
            (TrackerError::MissingInfoHash, 101, StatusCode::BAD_REQUEST),
            (TrackerError::InvalidPort, 104, StatusCode::BAD_REQUEST),
            (TrackerError::InvalidInfoHash, 150, StatusCode::BAD_REQUEST),
            (TrackerError::InfoHashNotFound, 200, StatusCode::NOT_FOUND),
            (TrackerError::TorrentDisabled(String::from("dupe")), 200, StatusCode::NOT_FOUND),
            (TrackerError::Unauthorized, 300, StatusCode::FORBIDDEN),
            (TrackerError::InvalidClient, 301, StatusCode::FORBIDDEN),
            (TrackerError::LeechDisabled, 302, StatusCode::FORBIDDEN),
            (TrackerError::RequestTooFast, 500, StatusCode::TOO_MANY_REQUESTS),
            (TrackerError::Timeout, 900, StatusCode::INTERNAL_SERVER_ERROR),
            (TrackerError::MalformedRequest, 901, StatusCode::BAD_REQUEST),
        ];
        for (error, code, status) in cases {
            assert_eq!(error.code(), code, "Code of {error:?}");
            assert_eq!(error.http_status(), status, "Status of {error:?}");
        }
    }

    #[test]
    fn test_internal_errors_are_not_leaked() {
        let error = TrackerError::from(StoreError::Decode(String::from("column users.torrents")));
        assert_eq!(error.message(), "Generic Error :(");
        assert_eq!(TrackerError::TorrentDisabled(String::from("Dupe of 1234")).message(), "Dupe of 1234");
        assert_eq!(TrackerError::ParseError { key: String::from("left") }.message(), "Malformed request");
    }
}

mod swarm_tests {
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::tracker::structs::swarm::Swarm;
    use crate::tracker::structs::torrent_peer::TorrentPeer;

    fn peer(id: u8, left: u64, announce_last: i64) -> TorrentPeer {
        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(192, 0, 2, id)), 6881);
        let mut peer = TorrentPeer::new(InfoHash([1u8; 20]), PeerId([id; 20]), 1, addr);
        peer.left = left;
        peer.announce_last = announce_last;
        peer
    }

    #[test]
    fn test_add_leecher_and_seeder() {
        let swarm = Swarm::new();
        assert!(swarm.add(peer(1, 100, 10)).is_none());
        assert_eq!(swarm.counts(), (0, 1), "A peer with left > 0 is a leecher");
        swarm.add(peer(2, 0, 10));
        assert_eq!(swarm.counts(), (1, 1));
        assert_eq!(swarm.len(), 2);
    }

    #[test]
    fn test_replacing_peer_moves_between_counts() {
        let swarm = Swarm::new();
        swarm.add(peer(1, 100, 10));
        let previous = swarm.add(peer(1, 0, 20));
        assert_eq!(previous.map(|peer| peer.left), Some(100));
        assert_eq!(swarm.counts(), (1, 0), "Finishing moves the peer to the seeders");
        assert_eq!(swarm.len(), 1);
    }

    #[test]
    fn test_remove_peer() {
        let swarm = Swarm::new();
        swarm.add(peer(1, 100, 10));
        swarm.add(peer(2, 0, 10));
        assert!(swarm.remove(&PeerId([1; 20])).is_some());
        assert!(swarm.remove(&PeerId([1; 20])).is_none(), "Removing twice finds nothing");
        assert_eq!(swarm.counts(), (1, 0));
    }

    #[test]
    fn test_get_n_excludes_requester_and_seeders_for_seeders() {
        let swarm = Swarm::new();
        for id in 1..=5 {
            swarm.add(peer(id, 0, 10));
        }
        for id in 6..=10 {
            swarm.add(peer(id, 50, 10));
        }
        let requester = PeerId([6; 20]);

        let peers = swarm.get_n(100, Some(&requester), false);
        assert_eq!(peers.len(), 9, "Everyone but the requester");
        assert!(peers.iter().all(|peer| peer.peer_id != requester));

        let peers = swarm.get_n(100, Some(&PeerId([1; 20])), true);
        assert_eq!(peers.len(), 5, "Seeders only get leechers");
        assert!(peers.iter().all(|peer| !peer.is_seeder()));

        assert_eq!(swarm.get_n(3, None, false).len(), 3, "Limit is respected");
        assert!(swarm.get_n(0, None, false).is_empty());
    }

    #[test]
    fn test_reap_expired() {
        let swarm = Swarm::new();
        swarm.add(peer(1, 100, 100));
        swarm.add(peer(2, 0, 500));
        swarm.add(peer(3, 0, 50));
        let reaped = swarm.reap_expired(200);
        assert_eq!(reaped.len(), 2, "Two peers announced before the threshold");
        assert_eq!(swarm.counts(), (1, 0));
        assert!(swarm.get(&PeerId([2; 20])).is_some());
    }

    #[test]
    fn test_recount_matches_counts() {
        let swarm = Swarm::new();
        swarm.add(peer(1, 100, 10));
        swarm.add(peer(2, 0, 10));
        swarm.write().get_mut(&PeerId([1; 20])).unwrap().left = 0;
        assert_eq!(swarm.recount(), (2, 0));
    }
}

mod peer_tests {
    use std::net::{IpAddr, Ipv4Addr};
    use crate::config::structs::configuration::Configuration;
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::tracker::structs::torrent_peer::TorrentPeer;

    fn request(uploaded: u64, downloaded: u64, left: u64, event: AnnounceEvent) -> AnnounceQueryRequest {
        AnnounceQueryRequest {
            info_hash: InfoHash([2; 20]),
            peer_id: PeerId(*b"-qB4650-abcdefghijkl"),
            ip: IpAddr::V4(Ipv4Addr::new(198, 51, 100, 20)),
            port: 51413,
            uploaded,
            downloaded,
            corrupt: 0,
            left,
            numwant: 30,
            event,
            compact: true,
            no_peer_id: false,
        }
    }

    #[test]
    fn test_client_name_is_resolved() {
        let req = request(0, 0, 0, AnnounceEvent::Started);
        let peer = TorrentPeer::new(req.info_hash, req.peer_id, 1, req.peer_addr());
        assert_ne!(peer.client, "Unknown", "qBittorrent peer ids should be recognized");
    }

    #[test]
    fn test_first_announce_sets_baseline() {
        let config = Configuration::init().tracker_config;
        let req = request(1000, 2000, 10, AnnounceEvent::Started);
        let mut peer = TorrentPeer::new(req.info_hash, req.peer_id, 1, req.peer_addr());
        assert!(peer.is_new());
        assert_eq!(peer.apply_announce(&req, 1000, &config), (0, 0, 0), "No delta on the first announce");
        assert_eq!(peer.announce_first, 1000);
        assert_eq!(peer.uploaded, 1000);
        assert!(peer.active);
    }

    #[test]
    fn test_delta_speed_and_seed_time() {
        let config = Configuration::init().tracker_config;
        let req = request(1000, 0, 10, AnnounceEvent::Started);
        let mut peer = TorrentPeer::new(req.info_hash, req.peer_id, 1, req.peer_addr());
        peer.apply_announce(&req, 1000, &config);

        let (up, dn, _) = peer.apply_announce(&request(1500, 0, 10, AnnounceEvent::None), 1010, &config);
        assert_eq!(up, 500, "Uploaded went from 1000 to 1500");
        assert_eq!(dn, 0);
        assert_eq!(peer.speed_up, 50, "500 bytes over 10 seconds");
        assert_eq!(peer.speed_up_max, 50);
        assert_eq!(peer.total_time, 10);

        let (up, _, _) = peer.apply_announce(&request(1500, 0, 10, AnnounceEvent::None), 1020, &config);
        assert_eq!(up, 0, "Repeating the same values gives no delta");
        assert_eq!(peer.speed_up_max, 50, "Max speed is kept");
        assert_eq!(peer.pending.uploaded, 500);
        assert_eq!(peer.pending.announces, 3);
    }

    #[test]
    fn test_counters_going_backwards_give_zero() {
        let config = Configuration::init().tracker_config;
        let req = request(1000, 1000, 10, AnnounceEvent::Started);
        let mut peer = TorrentPeer::new(req.info_hash, req.peer_id, 1, req.peer_addr());
        peer.apply_announce(&req, 1000, &config);
        assert_eq!(peer.apply_announce(&request(0, 0, 10, AnnounceEvent::None), 1010, &config), (0, 0, 0));
    }

    #[test]
    fn test_long_gaps_do_not_count_as_seed_time() {
        let config = Configuration::init().tracker_config;
        let req = request(0, 0, 0, AnnounceEvent::Started);
        let mut peer = TorrentPeer::new(req.info_hash, req.peer_id, 1, req.peer_addr());
        peer.apply_announce(&req, 1000, &config);
        peer.apply_announce(&request(0, 0, 0, AnnounceEvent::None), 1000 + (config.request_interval * 4) as i64, &config);
        assert_eq!(peer.total_time, 0);
    }

    #[test]
    fn test_hnr_detection() {
        let config = Configuration::init().tracker_config;
        let req = request(0, 600_000_000, 500_000_000, AnnounceEvent::Stopped);
        let mut peer = TorrentPeer::new(req.info_hash, req.peer_id, 1, req.peer_addr());
        peer.downloaded = req.downloaded;
        peer.left = req.left;
        peer.total_time = 10;
        assert!(peer.is_hnr(&config), "Downloaded a lot, unfinished, barely seeded");

        peer.total_time = config.hnr_threshold;
        assert!(!peer.is_hnr(&config), "Seeded long enough");

        peer.total_time = 10;
        peer.left = 0;
        assert!(!peer.is_hnr(&config), "Finished downloads are never hit and runs");
    }
}

mod user_tests {
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::user_entry_item::UserEntryItem;

    #[test]
    fn test_started_announce_carries_no_transfer() {
        let mut user = UserEntryItem::new(7, "passkey");
        user.apply_announce(AnnounceEvent::Started, 100, 100, 0, 1.0, 1.0, false);
        assert_eq!((user.uploaded, user.downloaded), (0, 0));
        assert_eq!(user.announces, 1);
    }

    #[test]
    fn test_multipliers_are_floored() {
        let mut user = UserEntryItem::new(7, "passkey");
        user.apply_announce(AnnounceEvent::None, 101, 101, 3, 1.5, 0.5, true);
        assert_eq!(user.uploaded, 151);
        assert_eq!(user.downloaded, 50, "Freeleech halves the download");
        assert_eq!(user.corrupt, 3);
        assert_eq!(user.snatches, 1);
        assert_eq!(user.pending.uploaded, 151);
    }

    #[test]
    fn test_membership_transitions() {
        let info_hash = InfoHash([3; 20]);
        let mut user = UserEntryItem::new(7, "passkey");

        user.apply_transition(info_hash, AnnounceEvent::Started, 100, false, false);
        assert!(user.torrents.incomplete.contains(&info_hash));
        assert!(user.torrents.active.contains(&info_hash));
        assert!(user.pending.torrents.is_some(), "Changed sets are queued");

        user.apply_transition(info_hash, AnnounceEvent::Completed, 0, false, true);
        assert!(user.torrents.complete.contains(&info_hash));
        assert!(!user.torrents.incomplete.contains(&info_hash));

        user.apply_transition(info_hash, AnnounceEvent::Stopped, 0, false, false);
        assert!(!user.torrents.active.contains(&info_hash));
        assert!(user.torrents.hnr.is_empty());
    }

    #[test]
    fn test_stopping_early_marks_hnr() {
        let info_hash = InfoHash([4; 20]);
        let mut user = UserEntryItem::new(7, "passkey");
        user.apply_transition(info_hash, AnnounceEvent::Started, 500_000_000, false, false);
        user.apply_transition(info_hash, AnnounceEvent::Stopped, 500_000_000, true, false);
        assert!(user.torrents.hnr.contains(&info_hash));

        user.apply_transition(info_hash, AnnounceEvent::Started, 0, false, false);
        assert!(!user.torrents.hnr.contains(&info_hash), "Coming back as a seeder clears the hit and run");
    }

    #[test]
    fn test_leecher_without_started_event_can_be_hnr() {
        let info_hash = InfoHash([6; 20]);
        let mut user = UserEntryItem::new(7, "passkey");
        user.apply_transition(info_hash, AnnounceEvent::None, 500_000_000, false, false);
        assert!(user.torrents.incomplete.contains(&info_hash));
        user.apply_transition(info_hash, AnnounceEvent::Stopped, 500_000_000, true, false);
        assert!(user.torrents.hnr.contains(&info_hash));

        let seeded = InfoHash([7; 20]);
        user.apply_transition(seeded, AnnounceEvent::Started, 0, false, false);
        user.apply_transition(seeded, AnnounceEvent::None, 100, false, false);
        assert!(!user.torrents.incomplete.contains(&seeded), "Completed torrents stay complete");
    }

    #[test]
    fn test_unchanged_sets_are_not_queued() {
        let info_hash = InfoHash([5; 20]);
        let mut user = UserEntryItem::new(7, "passkey");
        user.apply_transition(info_hash, AnnounceEvent::Started, 100, false, false);
        user.take_pending();
        user.apply_transition(info_hash, AnnounceEvent::None, 100, false, false);
        assert!(user.pending.torrents.is_none());
    }
}

mod tracker_tests {
    use std::collections::BTreeMap;
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::Arc;
    use ahash::AHashSet;
    use mockall::Sequence;
    use parking_lot::RwLock;
    use crate::common::common::current_time;
    use crate::config::structs::configuration::Configuration;
    use crate::store::enums::store_error::StoreError;
    use crate::store::structs::memory_store::MemoryStore;
    use crate::store::traits::store_backend::{MockStoreBackend, StoreBackend};
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::enums::sync_item::SyncItem;
    use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::tracker::structs::torrent_entry::TorrentEntry;
    use crate::tracker::structs::peer_hash::PeerHash;
    use crate::tracker::structs::torrent_stats::TorrentStats;
    use crate::tracker::structs::torrent_tracker::TorrentTracker;
    use crate::tracker::structs::tracked_torrent::TrackedTorrent;
    use crate::tracker::structs::user_entry_item::UserEntryItem;
    use crate::tracker::structs::user_stats::UserStats;

    fn request(peer: u8, left: u64, event: AnnounceEvent) -> AnnounceQueryRequest {
        AnnounceQueryRequest {
            info_hash: InfoHash([9; 20]),
            peer_id: PeerId([peer; 20]),
            ip: IpAddr::V4(Ipv4Addr::new(198, 51, 100, peer)),
            port: 6881,
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

    fn tracker() -> Arc<TorrentTracker> {
        Arc::new(TorrentTracker::new(Arc::new(Configuration::init()), Arc::new(MemoryStore::new())))
    }

    fn fixtures() -> (Arc<TrackedTorrent>, Arc<RwLock<UserEntryItem>>) {
        (
            Arc::new(TrackedTorrent::new(TorrentEntry::new(InfoHash([9; 20]), "Some.Release"))),
            Arc::new(RwLock::new(UserEntryItem::new(1, "passkey")))
        )
    }

    #[test]
    fn test_snatch_is_counted_once() {
        let tracker = tracker();
        let (torrent, user) = fixtures();

        tracker.apply_announce(&torrent, &user, &request(1, 100, AnnounceEvent::Started), 1000);
        assert_eq!(torrent.entry.read().snatches, 0);

        tracker.apply_announce(&torrent, &user, &request(1, 0, AnnounceEvent::None), 1010);
        assert_eq!(torrent.entry.read().snatches, 1, "Reaching left 0 after leeching is a snatch");

        tracker.apply_announce(&torrent, &user, &request(1, 0, AnnounceEvent::Completed), 1020);
        assert_eq!(torrent.entry.read().snatches, 1, "A peer snatches at most once");
        assert_eq!(user.read().snatches, 1);
        assert!(user.read().torrents.complete.contains(&InfoHash([9; 20])));
    }

    #[test]
    fn test_seeder_starting_is_not_a_snatch() {
        let tracker = tracker();
        let (torrent, user) = fixtures();
        tracker.apply_announce(&torrent, &user, &request(1, 0, AnnounceEvent::Started), 1000);
        tracker.apply_announce(&torrent, &user, &request(1, 0, AnnounceEvent::None), 1010);
        assert_eq!(torrent.entry.read().snatches, 0);
    }

    #[test]
    fn test_counts_are_mirrored_and_stopped_gets_no_peers() {
        let tracker = tracker();
        let (torrent, user) = fixtures();

        let response = tracker.apply_announce(&torrent, &user, &request(1, 100, AnnounceEvent::Started), 1000);
        assert_eq!((response.complete, response.incomplete), (0, 1));
        assert!(response.peers.is_empty(), "The requester is never returned");

        let response = tracker.apply_announce(&torrent, &user, &request(2, 0, AnnounceEvent::Started), 1000);
        assert_eq!((response.complete, response.incomplete), (1, 1));
        assert_eq!(response.peers.len(), 1);

        let response = tracker.apply_announce(&torrent, &user, &request(2, 0, AnnounceEvent::Stopped), 1005);
        assert_eq!((response.complete, response.incomplete), (0, 1));
        assert!(response.peers.is_empty());

        let entry = torrent.entry.read();
        assert_eq!((entry.seeders, entry.leechers), (0, 1));
        assert_eq!(entry.pending.leechers, 1);
        assert_eq!(entry.pending.seeders, 0, "Seeder came and went");
    }

    #[test]
    fn test_aggregates_are_queued_once() {
        let tracker = tracker();
        let (torrent, user) = fixtures();
        tracker.apply_announce(&torrent, &user, &request(1, 100, AnnounceEvent::Started), 1000);
        tracker.apply_announce(&torrent, &user, &request(1, 100, AnnounceEvent::None), 1010);
        tracker.apply_announce(&torrent, &user, &request(2, 100, AnnounceEvent::Started), 1010);

        let mut receiver = tracker.sync_receiver.lock().take().unwrap();
        let mut items = Vec::new();
        while let Ok(item) = receiver.try_recv() {
            items.push(item);
        }
        assert_eq!(items.len(), 4, "One torrent, one user and two peers");
        assert!(items.contains(&SyncItem::Torrent(InfoHash([9; 20]))));
        assert!(items.contains(&SyncItem::User(1)));
    }

    #[tokio::test]
    async fn test_failed_sync_keeps_deltas() {
        let info_hash = InfoHash([9; 20]);
        let mut store = MockStoreBackend::new();
        let mut sequence = Sequence::new();
        store.expect_torrent_sync()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Err(StoreError::Decode(String::from("store offline"))));
        store.expect_torrent_sync()
            .times(1)
            .in_sequence(&mut sequence)
            .withf(move |batch: &BTreeMap<InfoHash, TorrentStats>| {
                batch.get(&info_hash).map(|stats| stats.uploaded == 150 && stats.announces == 2).unwrap_or(false)
            })
            .returning(|_| Ok(()));

        let tracker = Arc::new(TorrentTracker::new(Arc::new(Configuration::init()), Arc::new(store)));
        let torrent = tracker.cache_torrent(TorrentEntry::new(info_hash, "Some.Release"));
        torrent.entry.write().apply_announce(100, 0, (0, 0), false);

        let mut pending = AHashSet::new();
        pending.insert(SyncItem::Torrent(info_hash));
        assert!(!tracker.sync_updates(&mut pending).await, "First sync fails");
        assert!(pending.contains(&SyncItem::Torrent(info_hash)), "Failed items stay queued");
        assert_eq!(torrent.entry.read().pending.uploaded, 100, "Deltas are merged back");

        torrent.entry.write().apply_announce(50, 0, (0, 0), false);
        assert!(tracker.sync_updates(&mut pending).await, "Second sync succeeds");
        assert!(pending.is_empty());
        assert!(torrent.entry.read().pending.is_empty());
        assert!(!torrent.entry.read().in_queue);
    }

    #[tokio::test]
    async fn test_full_queue_leaves_flag_unset() {
        let mut config = Configuration::init();
        config.database.sync_queue_size = 1;
        let tracker = Arc::new(TorrentTracker::new(Arc::new(config), Arc::new(MemoryStore::new())));
        let (torrent, user) = fixtures();
        tracker.apply_announce(&torrent, &user, &request(1, 100, AnnounceEvent::Started), current_time());
        assert!(user.read().pending.announces > 0);
        assert!(!user.read().in_queue, "The queue only had room for the peer");
        assert!(!torrent.entry.read().in_queue);
    }

    /// A tracker with a queue of three, one cached torrent and user, and one
    /// leecher that is already stored.
    async fn tracker_with_stored_peer() -> (Arc<TorrentTracker>, Arc<MemoryStore>, AHashSet<SyncItem>) {
        let mut config = Configuration::init();
        config.database.sync_queue_size = 3;
        let store = Arc::new(MemoryStore::new());
        let tracker = Arc::new(TorrentTracker::new(Arc::new(config), store.clone()));
        let torrent = tracker.cache_torrent(TorrentEntry::new(InfoHash([9; 20]), "Some.Release"));
        let user = tracker.cache_user(UserEntryItem::new(1, "passkey"));

        tracker.apply_announce(&torrent, &user, &request(1, 100, AnnounceEvent::Started), current_time());
        let mut pending = AHashSet::new();
        drain(&tracker, &mut pending);
        assert!(tracker.sync_updates(&mut pending).await);
        assert!(store.peer_get(&InfoHash([9; 20]), &PeerId([1; 20])).await.unwrap().is_some());

        for filler in 0..3u8 {
            assert!(tracker.enqueue_sync(SyncItem::Torrent(InfoHash([filler; 20]))));
        }
        (tracker, store, pending)
    }

    fn drain(tracker: &TorrentTracker, pending: &mut AHashSet<SyncItem>) {
        let mut lock = tracker.sync_receiver.lock();
        let receiver = lock.as_mut().unwrap();
        while let Ok(item) = receiver.try_recv() {
            pending.insert(item);
        }
    }

    #[tokio::test]
    async fn test_stopped_peer_is_deleted_after_full_queue() {
        let (tracker, store, mut pending) = tracker_with_stored_peer().await;
        let torrent = tracker.get_torrent_cached(&InfoHash([9; 20])).unwrap();
        let user = tracker.get_user_cached("passkey").unwrap();

        tracker.apply_announce(&torrent, &user, &request(1, 100, AnnounceEvent::Stopped), current_time());
        assert!(torrent.swarm.is_empty());
        assert!(tracker.has_pending_deletes(), "The deletion is kept aside");

        drain(&tracker, &mut pending);
        assert!(tracker.sync_updates(&mut pending).await);
        assert!(store.peer_get(&InfoHash([9; 20]), &PeerId([1; 20])).await.unwrap().is_none());
        assert!(!tracker.has_pending_deletes());
        assert!(!pending.contains(&SyncItem::Peer(PeerHash::new(&InfoHash([9; 20]), &PeerId([1; 20])))));
    }

    #[tokio::test]
    async fn test_reaped_peer_is_deleted_after_full_queue() {
        let (tracker, store, mut pending) = tracker_with_stored_peer().await;

        assert!(tracker.reap_peer(&InfoHash([9; 20]), &PeerId([1; 20])));
        assert!(tracker.has_pending_deletes());

        drain(&tracker, &mut pending);
        assert!(tracker.sync_updates(&mut pending).await);
        assert!(store.peer_get(&InfoHash([9; 20]), &PeerId([1; 20])).await.unwrap().is_none());
        assert!(!tracker.has_pending_deletes());
    }

    #[tokio::test]
    async fn test_failed_user_sync_survives_passkey_change() {
        let slot: Arc<parking_lot::Mutex<Option<Arc<TorrentTracker>>>> = Arc::new(parking_lot::Mutex::new(None));
        let rekey = slot.clone();
        let mut store = MockStoreBackend::new();
        store.expect_user_sync()
            .times(1)
            .withf(|batch: &BTreeMap<String, UserStats>| batch.contains_key("oldkey"))
            .returning(move |_| {
                if let Some(tracker) = rekey.lock().clone() {
                    let user = tracker.users.write().remove("oldkey");
                    if let Some(user) = user {
                        user.write().passkey = String::from("newkey");
                        tracker.users.write().insert(String::from("newkey"), user);
                        tracker.users_ids.write().insert(1, String::from("newkey"));
                    }
                }
                Err(StoreError::Decode(String::from("store offline")))
            });

        let tracker = Arc::new(TorrentTracker::new(Arc::new(Configuration::init()), Arc::new(store)));
        *slot.lock() = Some(tracker.clone());
        let user = tracker.cache_user(UserEntryItem::new(1, "oldkey"));
        user.write().apply_announce(AnnounceEvent::None, 100, 40, 0, 1.0, 1.0, false);

        let mut pending = AHashSet::new();
        pending.insert(SyncItem::User(1));
        assert!(!tracker.sync_updates(&mut pending).await);
        *slot.lock() = None;

        let lock = user.read();
        assert_eq!(lock.passkey, "newkey");
        assert_eq!((lock.pending.uploaded, lock.pending.downloaded), (100, 40), "Deltas are merged back under the new passkey");
        assert!(pending.contains(&SyncItem::User(1)));
    }
}
