use std::fmt;
use std::fmt::Formatter;
use crate::common::common::bin2hex;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_hash::PeerHash;
use crate::tracker::structs::peer_id::PeerId;

impl PeerHash {
    pub fn new(info_hash: &InfoHash, peer_id: &PeerId) -> PeerHash {
        let mut hash = [0u8; 40];
        hash[..20].copy_from_slice(&info_hash.0);
        hash[20..].copy_from_slice(&peer_id.0);
        PeerHash(hash)
    }

    pub fn info_hash(&self) -> InfoHash {
        let mut info_hash = InfoHash([0u8; 20]);
        info_hash.0.copy_from_slice(&self.0[..20]);
        info_hash
    }

    pub fn peer_id(&self) -> PeerId {
        let mut peer_id = PeerId([0u8; 20]);
        peer_id.0.copy_from_slice(&self.0[20..]);
        peer_id
    }
}

impl fmt::Display for PeerHash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}
