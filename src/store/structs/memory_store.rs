use std::collections::BTreeMap;
use ahash::AHashMap;
use parking_lot::RwLock;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_hash::PeerHash;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::user_entry_item::UserEntryItem;
use crate::tracker::structs::whitelist_client::WhitelistClient;

/// A store that lives in the process, nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) torrents: RwLock<AHashMap<InfoHash, TorrentEntry>>,
    pub(crate) users: RwLock<AHashMap<u32, UserEntryItem>>,
    pub(crate) peers: RwLock<AHashMap<PeerHash, TorrentPeer>>,
    pub(crate) whitelist: RwLock<BTreeMap<String, WhitelistClient>>,
}
