use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_hash::PeerHash;

/// A dirty aggregate waiting for the sync writer.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum SyncItem {
    Torrent(InfoHash),
    User(u32),
    Peer(PeerHash)
}
