use parking_lot::{RwLockReadGuard, RwLockWriteGuard};
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::swarm::Swarm;
use crate::tracker::structs::swarm_peers::SwarmPeers;
use crate::tracker::structs::torrent_peer::TorrentPeer;

impl Swarm {
    pub fn new() -> Swarm {
        Swarm::default()
    }

    pub fn read(&self) -> RwLockReadGuard<'_, SwarmPeers> {
        self.peers.read_recursive()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, SwarmPeers> {
        self.peers.write()
    }

    pub fn add(&self, peer: TorrentPeer) -> Option<TorrentPeer> {
        self.write().add(peer)
    }

    pub fn remove(&self, peer_id: &PeerId) -> Option<TorrentPeer> {
        self.write().remove(peer_id)
    }

    pub fn get(&self, peer_id: &PeerId) -> Option<TorrentPeer> {
        self.read().get(peer_id).cloned()
    }

    pub fn get_n(&self, limit: usize, exclude: Option<&PeerId>, requester_is_seeder: bool) -> Vec<TorrentPeer> {
        self.read().get_n(limit, exclude, requester_is_seeder)
    }

    pub fn counts(&self) -> (u64, u64) {
        self.read().counts()
    }

    pub fn recount(&self) -> (u64, u64) {
        self.write().recount()
    }

    pub fn reap_expired(&self, threshold: i64) -> Vec<TorrentPeer> {
        self.write().reap_expired(threshold)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
