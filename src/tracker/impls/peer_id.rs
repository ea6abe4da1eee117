use std::fmt;
use std::fmt::Formatter;
use crate::common::common::{bin2hex, bin2hex_string, hex2bin};
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}

/// Azureus style client codes, as found between the leading `-` and the version.
const CLIENT_CODES: &[(&[u8; 2], &str)] = &[
    (b"AZ", "Vuze"),
    (b"BC", "BitComet"),
    (b"BI", "BiglyBT"),
    (b"DE", "Deluge"),
    (b"FD", "Free Download Manager"),
    (b"KT", "KTorrent"),
    (b"LT", "libtorrent"),
    (b"lt", "rTorrent"),
    (b"PI", "PicoTorrent"),
    (b"qB", "qBittorrent"),
    (b"TB", "Torrent Bolt"),
    (b"TR", "Transmission"),
    (b"TX", "Tixati"),
    (b"UT", "uTorrent"),
    (b"UW", "uTorrent Web"),
    (b"WD", "WebTorrent Desktop"),
    (b"WW", "WebTorrent"),
];

impl PeerId {
    /// Resolves the client name from the peer id prefix, if it is a known one.
    pub fn get_client_name(&self) -> Option<&'static str> {
        match self.0[0] {
            b'M' => Some("BitTorrent"),
            b'-' => CLIENT_CODES.iter()
                .find(|(code, _)| &self.0[1..3] == code.as_slice())
                .map(|(_, name)| *name),
            _ => None
        }
    }
}

impl std::str::FromStr for PeerId {
    type Err = binascii::ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PeerId(hex2bin::<20>(s)?))
    }
}

impl TryFrom<&[u8]> for PeerId {
    type Error = TrackerError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let bytes = <[u8; 20]>::try_from(data).map_err(|_| TrackerError::InvalidPeerId)?;
        Ok(PeerId(bytes))
    }
}

impl From<[u8; 20]> for PeerId {
    fn from(data: [u8; 20]) -> Self {
        PeerId(data)
    }
}

impl serde::ser::Serialize for PeerId {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&bin2hex_string(&self.0))
    }
}

impl<'de> serde::de::Deserialize<'de> for PeerId {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct PeerIdVisitor;

        impl<'de> serde::de::Visitor<'de> for PeerIdVisitor {
            type Value = PeerId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 40 character hex string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                hex2bin::<20>(v).map(PeerId).map_err(|_| {
                    serde::de::Error::invalid_value(serde::de::Unexpected::Str(v), &"expected a 40 character hexadecimal string")
                })
            }
        }

        des.deserialize_str(PeerIdVisitor)
    }
}
