use serde::Serialize;

/// Scrape counters for one torrent.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrapeEntry {
    pub complete: u64,
    pub incomplete: u64,
    pub downloaded: u64,
}
