use std::sync::Arc;
use ahash::AHashMap;
use parking_lot::RwLock;
use crate::tracker::structs::user_entry_item::UserEntryItem;

/// Cached users keyed by passkey.
pub type UsersMap = Arc<RwLock<AHashMap<String, Arc<RwLock<UserEntryItem>>>>>;
