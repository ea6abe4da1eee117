use std::sync::Arc;
use ahash::AHashMap;
use parking_lot::RwLock;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;

pub type TorrentsMap = Arc<RwLock<AHashMap<InfoHash, Arc<TrackedTorrent>>>>;
