use std::net::SocketAddr;
use serde::{Deserialize, Serialize};
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_stats::PeerStats;

/// One participant of a swarm.
///
/// `uploaded`, `downloaded`, `corrupt` and `left` are the totals last reported
/// by the client, the next announce is diffed against them. Timestamps are unix
/// seconds, 0 means unset.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TorrentPeer {
    pub peer_id: PeerId,
    pub info_hash: InfoHash,
    pub user_id: u32,
    pub peer_addr: SocketAddr,
    pub client: String,
    pub uploaded: u64,
    pub downloaded: u64,
    pub corrupt: u64,
    pub left: u64,
    pub total_time: u64,
    pub speed_up: u64,
    pub speed_dn: u64,
    pub speed_up_max: u64,
    pub speed_dn_max: u64,
    pub announces: u64,
    pub announce_first: i64,
    pub announce_last: i64,
    pub active: bool,
    pub snatched: bool,
    #[serde(skip)]
    pub pending: PeerStats,
    #[serde(skip)]
    pub in_queue: bool,
    #[serde(skip)]
    pub stored: bool,
}
