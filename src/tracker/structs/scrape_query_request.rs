//! Scrape request query parameters.

use serde::Deserialize;
use crate::tracker::structs::info_hash::InfoHash;

/// Parsed scrape request parameters.
///
/// Scrape requests allow clients to query torrent statistics without
/// performing a full announce. Every `info_hash` occurrence in the query is
/// collected, duplicates are dropped.
///
/// # Example Request
///
/// ```text
/// GET /{passkey}/scrape?info_hash=%xx...&info_hash=%yy...
/// ```
#[derive(Deserialize, Clone, Debug)]
pub struct ScrapeQueryRequest {
    pub info_hashes: Vec<InfoHash>,
}
