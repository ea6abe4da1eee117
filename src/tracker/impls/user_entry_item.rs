use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::user_entry_item::UserEntryItem;
use crate::tracker::structs::user_stats::UserStats;
use crate::tracker::structs::user_torrents::UserTorrents;

impl UserEntryItem {
    pub fn new(user_id: u32, passkey: &str) -> UserEntryItem {
        UserEntryItem {
            user_id,
            passkey: passkey.to_string(),
            is_deleted: false,
            enabled: true,
            download_enabled: true,
            uploaded: 0,
            downloaded: 0,
            corrupt: 0,
            snatches: 0,
            announces: 0,
            torrents: UserTorrents::default(),
            pending: UserStats::default(),
            in_queue: false,
        }
    }

    pub fn valid(&self) -> bool {
        !self.passkey.is_empty() && !self.is_deleted
    }

    /// Credits the transfer deltas of one announce.
    ///
    /// A `started` announce carries no transfer of its own, only the announce
    /// and a possible snatch are counted.
    #[allow(clippy::too_many_arguments)]
    pub fn apply_announce(&mut self, event: AnnounceEvent, up: u64, dn: u64, corrupt: u64, multi_up: f64, multi_dn: f64, snatched: bool)
    {
        if event != AnnounceEvent::Started {
            let up = (up as f64 * multi_up).floor() as u64;
            let dn = (dn as f64 * multi_dn).floor() as u64;
            self.uploaded += up;
            self.downloaded += dn;
            self.corrupt += corrupt;
            self.pending.uploaded += up;
            self.pending.downloaded += dn;
            self.pending.corrupt += corrupt;
        }
        self.announces += 1;
        self.pending.announces += 1;
        if snatched {
            self.snatches += 1;
            self.pending.snatches += 1;
        }
    }

    /// Moves `info_hash` between the membership sets for one announce.
    pub fn apply_transition(&mut self, info_hash: InfoHash, event: AnnounceEvent, left: u64, is_hnr: bool, snatched: bool)
    {
        let before = self.torrents.clone();
        let torrents = &mut self.torrents;

        if event == AnnounceEvent::Started {
            if left > 0 {
                torrents.incomplete.insert(info_hash);
                torrents.complete.remove(&info_hash);
            } else {
                torrents.complete.insert(info_hash);
                torrents.incomplete.remove(&info_hash);
            }
            torrents.hnr.remove(&info_hash);
        }

        // A leecher whose first announce carried no event.
        if event == AnnounceEvent::None && left > 0 && !torrents.complete.contains(&info_hash) {
            torrents.incomplete.insert(info_hash);
        }

        if event == AnnounceEvent::Completed || snatched {
            torrents.incomplete.remove(&info_hash);
            torrents.complete.insert(info_hash);
            torrents.hnr.remove(&info_hash);
        }

        if event == AnnounceEvent::Stopped {
            torrents.active.remove(&info_hash);
            if is_hnr && torrents.incomplete.contains(&info_hash) {
                torrents.hnr.insert(info_hash);
            }
        } else {
            torrents.active.insert(info_hash);
        }

        if self.torrents != before {
            self.pending.torrents = Some(self.torrents.clone());
        }
    }

    /// Removes a torrent from the active set after its peer was reaped.
    pub fn apply_reap(&mut self, info_hash: InfoHash, is_hnr: bool) {
        self.apply_transition(info_hash, AnnounceEvent::Stopped, 0, is_hnr, false);
    }

    pub fn take_pending(&mut self) -> UserStats {
        std::mem::take(&mut self.pending)
    }
}
