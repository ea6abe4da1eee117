use std::str::FromStr;
use ahash::AHashMap;
use crate::common::common::hex_to_nibble;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::query::Query;

impl Query {
    /// Parses a raw query string without going through a generic binder.
    ///
    /// Tokens are separated by `&`, `;` or `?`. A key without `=` or with an
    /// empty value is only tolerated as the final token, where it is dropped.
    pub fn parse(raw: &str) -> Result<Query, TrackerError> {
        let mut query = Query {
            params: AHashMap::new(),
            info_hashes: Vec::new(),
        };

        let tokens = raw.split(['&', ';', '?'])
            .filter(|token| !token.is_empty())
            .collect::<Vec<&str>>();
        let last_index = tokens.len().saturating_sub(1);

        for (index, token) in tokens.iter().enumerate() {
            let trailing = index == last_index;
            let (key, value) = match token.split_once('=') {
                None if trailing => continue,
                None => return Err(TrackerError::MalformedRequest),
                Some(pair) => pair
            };
            if key.is_empty() {
                return Err(TrackerError::MalformedRequest);
            }
            if value.is_empty() {
                if trailing {
                    continue;
                }
                return Err(TrackerError::MalformedRequest);
            }

            let key = String::from_utf8(Self::unescape(key)?)
                .map_err(|_| TrackerError::MalformedRequest)?
                .to_lowercase();
            let value = Self::unescape(value)?;

            if key == "info_hash" && !query.info_hashes.contains(&value) {
                query.info_hashes.push(value.clone());
            }
            query.params.insert(key, value);
        }

        Ok(query)
    }

    /// Strict form decoding: `+` is a space, `%` must be followed by two hex digits.
    pub fn unescape(data: &str) -> Result<Vec<u8>, TrackerError> {
        let bytes = data.as_bytes();
        let mut result = Vec::with_capacity(bytes.len());
        let mut index = 0;
        while index < bytes.len() {
            match bytes[index] {
                b'+' => {
                    result.push(b' ');
                    index += 1;
                }
                b'%' => {
                    if index + 2 >= bytes.len() {
                        return Err(TrackerError::MalformedRequest);
                    }
                    let high = hex_to_nibble(bytes[index + 1]);
                    let low = hex_to_nibble(bytes[index + 2]);
                    if high == 0xFF || low == 0xFF {
                        return Err(TrackerError::MalformedRequest);
                    }
                    result.push((high << 4) | low);
                    index += 3;
                }
                byte => {
                    result.push(byte);
                    index += 1;
                }
            }
        }
        Ok(result)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn bytes(&self, key: &str) -> Result<&[u8], TrackerError> {
        self.params.get(key)
            .map(|value| value.as_slice())
            .ok_or_else(|| TrackerError::InvalidMapKey(key.to_string()))
    }

    pub fn string(&self, key: &str) -> Result<String, TrackerError> {
        Ok(String::from_utf8_lossy(self.bytes(key)?).into_owned())
    }

    pub fn u64(&self, key: &str) -> Result<u64, TrackerError> {
        self.number::<u64>(key)
    }

    pub fn u32(&self, key: &str) -> Result<u32, TrackerError> {
        self.number::<u32>(key)
    }

    pub fn u16(&self, key: &str) -> Result<u16, TrackerError> {
        self.number::<u16>(key)
    }

    pub fn i64(&self, key: &str) -> Result<i64, TrackerError> {
        self.number::<i64>(key)
    }

    /// Reads a counter, negative values are clamped to 0.
    pub fn clamped_u64(&self, key: &str) -> Result<u64, TrackerError> {
        let value = self.string(key)?;
        if let Ok(number) = u64::from_str(&value) {
            return Ok(number);
        }
        match i64::from_str(&value) {
            Ok(number) if number < 0 => Ok(0),
            _ => Err(TrackerError::ParseError { key: key.to_string() })
        }
    }

    fn number<T: FromStr>(&self, key: &str) -> Result<T, TrackerError> {
        let value = self.bytes(key)?;
        std::str::from_utf8(value)
            .ok()
            .and_then(|value| T::from_str(value).ok())
            .ok_or_else(|| TrackerError::ParseError { key: key.to_string() })
    }
}
