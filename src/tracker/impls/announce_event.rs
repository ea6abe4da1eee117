use std::fmt;
use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    pub fn from_param(value: &str) -> AnnounceEvent {
        match value {
            "started" => AnnounceEvent::Started,
            "stopped" => AnnounceEvent::Stopped,
            "completed" => AnnounceEvent::Completed,
            "paused" => AnnounceEvent::Paused,
            _ => AnnounceEvent::None
        }
    }
}

impl fmt::Display for AnnounceEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AnnounceEvent::None => "none",
            AnnounceEvent::Completed => "completed",
            AnnounceEvent::Started => "started",
            AnnounceEvent::Stopped => "stopped",
            AnnounceEvent::Paused => "paused"
        };
        f.write_str(name)
    }
}
