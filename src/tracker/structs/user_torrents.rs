use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::tracker::structs::info_hash::InfoHash;

/// Per user torrent membership sets.
///
/// A torrent is never in `complete` and `incomplete` at the same time, and
/// only torrents that were `incomplete` can end up in `hnr`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UserTorrents {
    pub active: BTreeSet<InfoHash>,
    pub complete: BTreeSet<InfoHash>,
    pub incomplete: BTreeSet<InfoHash>,
    pub hnr: BTreeSet<InfoHash>,
}
