//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The info hash is the SHA-1 hash of the "info" dictionary in a torrent file
/// and identifies a torrent for its whole lifetime. Equality is byte-wise.
///
/// # Example
///
/// ```rust
/// use mika_tracker::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash([0u8; 20]);
/// assert_eq!(hash.to_string(), "0000000000000000000000000000000000000000");
/// ```
///
/// # Serialization
///
/// Serialized as a 40-character lowercase hexadecimal string.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
