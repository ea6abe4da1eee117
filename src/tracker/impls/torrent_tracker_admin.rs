use log::info;
use crate::structs::Cli;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Applies the administrative command line flags to the store.
    ///
    /// Returns `true` when at least one flag was handled, the binary exits afterwards.
    pub async fn admin(&self, args: &Cli) -> Result<bool, TrackerError>
    {
        let mut handled = false;

        if let Some(hash) = &args.add_torrent {
            let info_hash = match hex::decode(hash) {
                Ok(bytes) => InfoHash::try_from(bytes.as_slice())?,
                Err(_) => return Err(TrackerError::InvalidInfoHash)
            };
            self.add_torrent(info_hash, &args.release_name).await?;
            info!("[ADMIN] Added torrent {info_hash} ({})", args.release_name);
            handled = true;
        }

        if let (Some(passkey), Some(user_id)) = (&args.add_user, args.user_id) {
            self.add_user(user_id, passkey).await?;
            info!("[ADMIN] Added user {user_id}");
            handled = true;
        }

        if let (Some(prefix), Some(name)) = (&args.add_client, &args.client_name) {
            self.add_whitelist(prefix, name).await?;
            info!("[ADMIN] Whitelisted client {name} with prefix {prefix}");
            handled = true;
        }

        Ok(handled)
    }
}
