use std::net::IpAddr;
use serde::{Deserialize, Serialize};
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// A validated announce, built by `AnnounceQueryRequest::from_query`.
///
/// Counters are already clamped to be non-negative and `numwant` is already
/// capped to the configured maximum.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AnnounceQueryRequest {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub ip: IpAddr,
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub corrupt: u64,
    pub left: u64,
    pub numwant: u64,
    pub event: AnnounceEvent,
    pub compact: bool,
    pub no_peer_id: bool,
}
