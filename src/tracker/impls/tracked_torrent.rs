use parking_lot::RwLock;
use crate::tracker::structs::swarm::Swarm;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;

impl TrackedTorrent {
    pub fn new(entry: TorrentEntry) -> TrackedTorrent {
        TrackedTorrent {
            entry: RwLock::new(entry),
            swarm: Swarm::new(),
        }
    }
}
