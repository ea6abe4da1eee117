use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::whitelist_client::WhitelistClient;

impl WhitelistClient {
    pub fn new(client_prefix: &str, client_name: &str) -> WhitelistClient {
        WhitelistClient {
            client_prefix: client_prefix.to_string(),
            client_name: client_name.to_string(),
        }
    }

    pub fn matches(&self, peer_id: &PeerId) -> bool {
        !self.client_prefix.is_empty() && peer_id.0.starts_with(self.client_prefix.as_bytes())
    }
}
