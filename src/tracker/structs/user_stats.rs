use serde::{Deserialize, Serialize};
use crate::tracker::structs::user_torrents::UserTorrents;

/// Pending user counter deltas.
///
/// `torrents` is a snapshot of the membership sets and replaces the stored
/// sets instead of adding to them.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UserStats {
    pub uploaded: u64,
    pub downloaded: u64,
    pub corrupt: u64,
    pub snatches: u64,
    pub announces: u64,
    pub torrents: Option<UserTorrents>,
}
