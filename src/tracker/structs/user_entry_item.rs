//! User account entry for private tracker functionality.

use serde::{Deserialize, Serialize};
use crate::tracker::structs::user_stats::UserStats;
use crate::tracker::structs::user_torrents::UserTorrents;

/// User account information.
///
/// Each user is identified by a numeric `user_id` and authenticates with the
/// passkey embedded in the announce URL. Transfer totals are credited with the
/// torrent's multipliers applied.
///
/// # Example
///
/// ```rust,ignore
/// use mika_tracker::tracker::structs::user_entry_item::UserEntryItem;
///
/// let user = UserEntryItem::new(1, "0123456789abcdef0123");
/// assert!(user.valid());
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserEntryItem {
    /// Numeric id from the site database.
    pub user_id: u32,

    /// The secret embedded in the announce URL.
    pub passkey: String,

    pub is_deleted: bool,

    /// Disabled accounts cannot announce at all.
    pub enabled: bool,

    /// Accounts without download permission can only seed.
    pub download_enabled: bool,

    pub uploaded: u64,
    pub downloaded: u64,
    pub corrupt: u64,
    pub snatches: u64,
    pub announces: u64,

    /// Torrent membership sets.
    pub torrents: UserTorrents,

    #[serde(skip)]
    pub pending: UserStats,

    #[serde(skip)]
    pub in_queue: bool,
}
