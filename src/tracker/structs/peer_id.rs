//! BitTorrent peer identifier.

/// A 20-byte peer id as reported by the client.
///
/// Most clients encode their name and version in the first bytes
/// (`-qB4650-...`), which is what the client whitelist matches against.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerId(pub [u8; 20]);
