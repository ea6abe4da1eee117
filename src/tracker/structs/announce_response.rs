use serde::Serialize;
use crate::tracker::structs::torrent_peer::TorrentPeer;

/// The data of a successful announce, encoded by the HTTP layer.
#[derive(Serialize, Clone, Debug)]
pub struct AnnounceResponse {
    pub interval: u64,
    pub min_interval: u64,
    pub complete: u64,
    pub incomplete: u64,
    pub peers: Vec<TorrentPeer>,
}
