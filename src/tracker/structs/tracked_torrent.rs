use parking_lot::RwLock;
use crate::tracker::structs::swarm::Swarm;
use crate::tracker::structs::torrent_entry::TorrentEntry;

/// A cached torrent: its record and its swarm, each behind its own lock.
#[derive(Debug)]
pub struct TrackedTorrent {
    pub entry: RwLock<TorrentEntry>,
    pub swarm: Swarm,
}
