//! Composite peer key.

/// The info hash followed by the peer id (40 bytes).
///
/// Used as the peer key by stores that keep peers outside of the
/// per-torrent swarm structures.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerHash(pub [u8; 40]);
