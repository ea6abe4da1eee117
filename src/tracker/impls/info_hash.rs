use std::fmt;
use std::fmt::Formatter;
use crate::common::common::{bin2hex, bin2hex_string, hex2bin};
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::info_hash::InfoHash;

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}

impl std::str::FromStr for InfoHash {
    type Err = binascii::ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(InfoHash(hex2bin::<20>(s)?))
    }
}

impl TryFrom<&[u8]> for InfoHash {
    type Error = TrackerError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let bytes = <[u8; 20]>::try_from(data).map_err(|_| TrackerError::InvalidInfoHash)?;
        Ok(InfoHash(bytes))
    }
}

impl From<[u8; 20]> for InfoHash {
    fn from(data: [u8; 20]) -> Self {
        InfoHash(data)
    }
}

impl serde::ser::Serialize for InfoHash {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&bin2hex_string(&self.0))
    }
}

impl<'de> serde::de::Deserialize<'de> for InfoHash {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct InfoHashVisitor;

        impl<'de> serde::de::Visitor<'de> for InfoHashVisitor {
            type Value = InfoHash;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 40 character hex string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                hex2bin::<20>(v).map(InfoHash).map_err(|_| {
                    serde::de::Error::invalid_value(serde::de::Unexpected::Str(v), &"expected a 40 character hexadecimal string")
                })
            }
        }

        des.deserialize_str(InfoHashVisitor)
    }
}
