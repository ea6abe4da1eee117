// Performance benchmarks for Mika Tracker
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use mika_tracker::config::structs::configuration::Configuration;
use mika_tracker::http::http::http_service_compact_peers;
use mika_tracker::store::structs::memory_store::MemoryStore;
use mika_tracker::tracker::enums::announce_event::AnnounceEvent;
use mika_tracker::tracker::structs::announce_query_request::AnnounceQueryRequest;
use mika_tracker::tracker::structs::info_hash::InfoHash;
use mika_tracker::tracker::structs::peer_id::PeerId;
use mika_tracker::tracker::structs::query::Query;
use mika_tracker::tracker::structs::swarm::Swarm;
use mika_tracker::tracker::structs::torrent_peer::TorrentPeer;
use mika_tracker::tracker::structs::torrent_tracker::TorrentTracker;
use rand::RngExt;

const PASSKEY: &str = "0123456789abcdef0123456789abcdef";

fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    InfoHash(rng.random())
}

fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    PeerId(rng.random())
}

fn create_peer(info_hash: InfoHash, i: u32) -> TorrentPeer {
    let ip = if i % 2 == 0 {
        IpAddr::V4(Ipv4Addr::from(0x0a00_0000 + i))
    } else {
        IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, (i >> 16) as u16, i as u16))
    };
    let mut peer = TorrentPeer::new(info_hash, random_peer_id(), 1, SocketAddr::new(ip, 6881));
    peer.left = (i % 3) as u64;
    peer
}

fn announce_request(info_hash: InfoHash, peer_id: PeerId, left: u64) -> AnnounceQueryRequest {
    AnnounceQueryRequest {
        info_hash,
        peer_id,
        ip: IpAddr::V4(Ipv4Addr::new(198, 51, 100, 7)),
        port: 6881,
        uploaded: 0,
        downloaded: 0,
        corrupt: 0,
        left,
        numwant: 50,
        event: AnnounceEvent::None,
        compact: true,
        no_peer_id: false,
    }
}

async fn create_tracker() -> (Arc<TorrentTracker>, InfoHash) {
    let mut config = Configuration::init();
    config.tracker_config.whitelist_enabled = false;
    config.database.sync_queue_size = 1 << 20;
    let tracker = Arc::new(TorrentTracker::new(Arc::new(config), Arc::new(MemoryStore::new())));
    let info_hash = random_info_hash();
    let _ = tracker.add_user(1, PASSKEY).await;
    let _ = tracker.add_torrent(info_hash, "Benchmark.Release").await;
    (tracker, info_hash)
}

fn bench_query_parse(c: &mut Criterion) {
    let query = "info_hash=%12%34%56%78%9A%BC%DE%F0%12%34%56%78%9A%BC%DE%F0%12%34%56%78\
        &peer_id=-qB4650-%AA%BB%CC%DD%EE%FF%00%11%22%33%44%55&port=6881&uploaded=1024\
        &downloaded=2048&left=4096&corrupt=0&event=started&numwant=50&compact=1";

    c.bench_function("query_parse", |b| {
        b.iter(|| black_box(Query::parse(black_box(query))));
    });
}

fn bench_swarm_get_n(c: &mut Criterion) {
    let info_hash = random_info_hash();
    let swarm = Swarm::new();
    for i in 0..1000 {
        swarm.add(create_peer(info_hash, i));
    }

    let mut group = c.benchmark_group("swarm_get_n");
    for limit in [10, 50, 100, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(limit), limit, |b, &limit| {
            b.iter(|| black_box(swarm.get_n(limit, None, false)));
        });
    }
    group.finish();
}

fn bench_compact_peers(c: &mut Criterion) {
    let info_hash = random_info_hash();
    let peers: Vec<TorrentPeer> = (0..100).map(|i| create_peer(info_hash, i)).collect();

    c.bench_function("compact_100_peers", |b| {
        b.iter(|| black_box(http_service_compact_peers(black_box(&peers))));
    });
}

fn bench_handle_announce(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("Failed to build runtime");
    let (tracker, info_hash) = rt.block_on(create_tracker());
    let peer_ids: Vec<PeerId> = (0..500).map(|_| random_peer_id()).collect();
    rt.block_on(async {
        for (i, peer_id) in peer_ids.iter().enumerate() {
            let _ = tracker.handle_announce(PASSKEY, announce_request(info_hash, *peer_id, (i % 2) as u64)).await;
        }
    });

    let mut group = c.benchmark_group("handle_announce");
    group.bench_function("existing_peer", |b| {
        let mut index = 0;
        b.to_async(&rt).iter(|| {
            index = (index + 1) % peer_ids.len();
            let request = announce_request(info_hash, peer_ids[index], 1);
            let tracker = tracker.clone();
            async move { black_box(tracker.handle_announce(PASSKEY, request).await) }
        });
    });
    group.bench_function("new_peer", |b| {
        b.to_async(&rt).iter(|| {
            let request = announce_request(info_hash, random_peer_id(), 1);
            let tracker = tracker.clone();
            async move { black_box(tracker.handle_announce(PASSKEY, request).await) }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_query_parse,
    bench_swarm_get_n,
    bench_compact_peers,
    bench_handle_announce,
);

criterion_main!(benches);
