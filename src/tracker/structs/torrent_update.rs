use serde::{Deserialize, Serialize};

/// Administrative changes to a torrent record, `None` leaves a field untouched.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TorrentUpdate {
    pub release_name: Option<String>,
    pub is_enabled: Option<bool>,
    pub reason: Option<String>,
    pub multi_up: Option<f64>,
    pub multi_dn: Option<f64>,
}
