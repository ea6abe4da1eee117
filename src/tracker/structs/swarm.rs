use parking_lot::RwLock;
use crate::tracker::structs::swarm_peers::SwarmPeers;

/// The lock protected peer set of a torrent.
#[derive(Debug, Default)]
pub struct Swarm {
    pub(crate) peers: RwLock<SwarmPeers>,
}
