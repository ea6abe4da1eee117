use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerConfig {
    /// Seconds a client is told to wait between announces.
    pub request_interval: u64,
    pub request_interval_minimum: u64,
    /// Seconds without an announce before a peer is reaped.
    pub peers_timeout: u64,
    pub peers_cleanup_interval: u64,
    /// Peers returned when the client sends no usable `numwant`.
    pub peers_returned: u64,
    pub peers_returned_max: u64,
    /// Seeding seconds a leecher must reach to avoid a hit-and-run.
    pub hnr_threshold: u64,
    /// Bytes that must be downloaded before hit-and-run rules apply.
    pub hnr_min_bytes: u64,
    pub whitelist_enabled: bool,
    pub reject_private_ip: bool,
    pub enforce_min_interval: bool,
    /// Seconds an announce may take before it fails with a generic error.
    pub announce_timeout: u64,
}
