use serde::{Deserialize, Serialize};

/// Pending peer changes waiting for the store.
///
/// `uploaded`, `downloaded`, `corrupt` and `announces` are deltas, the other
/// fields carry the latest known value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PeerStats {
    pub uploaded: u64,
    pub downloaded: u64,
    pub corrupt: u64,
    pub announces: u64,
    pub left: u64,
    pub total_time: u64,
    pub speed_up_max: u64,
    pub speed_dn_max: u64,
    pub announce_last: i64,
}
