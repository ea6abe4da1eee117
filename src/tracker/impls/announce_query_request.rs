use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::query::Query;

impl AnnounceQueryRequest {
    pub fn from_query(query: &Query, remote_addr: Option<IpAddr>, forwarded_for: Option<&str>, config: &TrackerConfig) -> Result<AnnounceQueryRequest, TrackerError>
    {
        let info_hash = match query.bytes("info_hash") {
            Ok(data) => InfoHash::try_from(data)?,
            Err(_) => return Err(TrackerError::MissingInfoHash)
        };
        let peer_id = match query.bytes("peer_id") {
            Ok(data) => PeerId::try_from(data)?,
            Err(_) => return Err(TrackerError::MissingPeerId)
        };

        let event = match query.string("event") {
            Ok(event) => AnnounceEvent::from_param(&event),
            Err(_) => AnnounceEvent::None
        };

        let ip = Self::resolve_ip(query, remote_addr, forwarded_for)?;
        if config.reject_private_ip && Self::is_private_ip(&ip) {
            return Err(TrackerError::InvalidIp);
        }

        if !query.contains("port") {
            return Err(TrackerError::MissingPort);
        }
        let port = match query.u64("port") {
            Ok(port) if (1024..=65535).contains(&port) => port as u16,
            _ => return Err(TrackerError::InvalidPort)
        };

        let left = match query.clamped_u64("left") {
            Ok(left) => left,
            Err(TrackerError::InvalidMapKey(_)) => return Err(TrackerError::MissingLeft),
            Err(error) => return Err(error)
        };
        let uploaded = Self::optional_counter(query, "uploaded")?;
        let downloaded = Self::optional_counter(query, "downloaded")?;
        let corrupt = Self::optional_counter(query, "corrupt")?;

        let numwant = query.u64("numwant")
            .unwrap_or(config.peers_returned)
            .min(config.peers_returned_max);

        let compact = !matches!(query.bytes("compact"), Ok(b"0"));
        let no_peer_id = query.contains("no_peer_id");

        Ok(AnnounceQueryRequest {
            info_hash,
            peer_id,
            ip,
            port,
            uploaded,
            downloaded,
            corrupt,
            left,
            numwant,
            event,
            compact,
            no_peer_id,
        })
    }

    pub fn peer_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }

    /// The client supplied `ip` (IPv4 only), then the first forwarded-for
    /// entry, then the socket address.
    fn resolve_ip(query: &Query, remote_addr: Option<IpAddr>, forwarded_for: Option<&str>) -> Result<IpAddr, TrackerError>
    {
        if let Ok(ip) = query.string("ip") {
            if let Ok(IpAddr::V4(ipv4)) = IpAddr::from_str(ip.trim()) {
                return Ok(IpAddr::V4(ipv4));
            }
        }
        if let Some(header) = forwarded_for {
            if let Some(first) = header.split(',').next() {
                if let Ok(ip) = IpAddr::from_str(first.trim()) {
                    return Ok(ip);
                }
            }
        }
        remote_addr.ok_or(TrackerError::InvalidIp)
    }

    fn is_private_ip(ip: &IpAddr) -> bool {
        match ip {
            IpAddr::V4(ipv4) => ipv4.is_private() || ipv4.is_loopback() || ipv4.is_link_local() || ipv4.is_unspecified(),
            IpAddr::V6(ipv6) => ipv6.is_loopback() || ipv6.is_unspecified() || (ipv6.segments()[0] & 0xfe00) == 0xfc00
        }
    }

    fn optional_counter(query: &Query, key: &str) -> Result<u64, TrackerError> {
        match query.clamped_u64(key) {
            Ok(value) => Ok(value),
            Err(TrackerError::InvalidMapKey(_)) => Ok(0),
            Err(error) => Err(error)
        }
    }
}
