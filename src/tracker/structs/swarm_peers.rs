use ahash::AHashMap;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

/// The peers of one torrent with cached seeder and leecher counts.
///
/// `seeders + leechers == peers.len()` holds after every mutation.
#[derive(Debug, Default)]
pub struct SwarmPeers {
    pub(crate) peers: AHashMap<PeerId, TorrentPeer>,
    pub(crate) seeders: u64,
    pub(crate) leechers: u64,
}
