use rand::RngExt;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::swarm_peers::SwarmPeers;
use crate::tracker::structs::torrent_peer::TorrentPeer;

impl SwarmPeers {
    /// Inserts or replaces a peer, moving it between seeders and leechers when
    /// its `left` changed. Returns the replaced peer.
    pub fn add(&mut self, peer: TorrentPeer) -> Option<TorrentPeer> {
        let is_seeder = peer.is_seeder();
        let previous = self.peers.insert(peer.peer_id, peer);
        if let Some(old) = &previous {
            self.decrement(old.is_seeder());
        }
        if is_seeder {
            self.seeders += 1;
        } else {
            self.leechers += 1;
        }
        previous
    }

    pub fn remove(&mut self, peer_id: &PeerId) -> Option<TorrentPeer> {
        let removed = self.peers.remove(peer_id);
        if let Some(peer) = &removed {
            self.decrement(peer.is_seeder());
        }
        removed
    }

    pub fn get(&self, peer_id: &PeerId) -> Option<&TorrentPeer> {
        self.peers.get(peer_id)
    }

    pub fn get_mut(&mut self, peer_id: &PeerId) -> Option<&mut TorrentPeer> {
        self.peers.get_mut(peer_id)
    }

    /// Up to `limit` peers other than `exclude`. Seeders get no seeders back.
    ///
    /// The scan starts at a random offset so large swarms hand out different
    /// peers to different requesters.
    pub fn get_n(&self, limit: usize, exclude: Option<&PeerId>, requester_is_seeder: bool) -> Vec<TorrentPeer> {
        if limit == 0 || self.peers.is_empty() {
            return Vec::new();
        }
        let total = self.peers.len();
        let offset = rand::rng().random_range(0..total);
        self.peers.values()
            .cycle()
            .skip(offset)
            .take(total)
            .filter(|peer| Some(&peer.peer_id) != exclude)
            .filter(|peer| !(requester_is_seeder && peer.is_seeder()))
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn counts(&self) -> (u64, u64) {
        (self.seeders, self.leechers)
    }

    /// Recomputes the counts from a full scan and stores them.
    pub fn recount(&mut self) -> (u64, u64) {
        let seeders = self.peers.values().filter(|peer| peer.is_seeder()).count() as u64;
        self.seeders = seeders;
        self.leechers = self.peers.len() as u64 - seeders;
        self.counts()
    }

    /// Removes and returns every peer whose last announce is older than `threshold`.
    pub fn reap_expired(&mut self, threshold: i64) -> Vec<TorrentPeer> {
        let expired = self.peers.iter()
            .filter(|(_, peer)| peer.announce_last < threshold)
            .map(|(peer_id, _)| *peer_id)
            .collect::<Vec<PeerId>>();
        expired.iter().filter_map(|peer_id| self.remove(peer_id)).collect()
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    fn decrement(&mut self, was_seeder: bool) {
        if was_seeder {
            self.seeders = self.seeders.saturating_sub(1);
        } else {
            self.leechers = self.leechers.saturating_sub(1);
        }
    }
}
