use ahash::AHashMap;

/// A parsed tracker query string.
///
/// `params` holds every key lowercased and mapped to its unescaped value, the
/// last occurrence of a key wins. `info_hashes` keeps each distinct
/// `info_hash` value in the order it was first seen, which is what multi
/// torrent scrapes read.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub params: AHashMap<String, Vec<u8>>,
    pub info_hashes: Vec<Vec<u8>>,
}
