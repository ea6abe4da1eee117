use serde::{Deserialize, Serialize};

/// An allowed client, matched on the leading bytes of the peer id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WhitelistClient {
    pub client_prefix: String,
    pub client_name: String,
}
