use thiserror::Error;
use crate::store::enums::store_error::StoreError;

/// Every failure an announce or scrape can produce.
///
/// Each variant maps onto a numeric tracker code, a client facing message and
/// an HTTP status, see `TrackerError::code`, `TrackerError::message` and
/// `TrackerError::http_status`.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid request type")]
    InvalidRequestType,
    #[error("info_hash missing from request")]
    MissingInfoHash,
    #[error("peer_id missing from request")]
    MissingPeerId,
    #[error("port missing from request")]
    MissingPort,
    #[error("Invalid port")]
    InvalidPort,
    #[error("left missing from request")]
    MissingLeft,
    #[error("Invalid ip address")]
    InvalidIp,
    #[error("Torrent info hash must be 20 characters")]
    InvalidInfoHash,
    #[error("Peer ID Invalid")]
    InvalidPeerId,
    #[error("num_want invalid")]
    InvalidNumWant,
    #[error("info_hash was not found, better luck next time")]
    InfoHashNotFound,
    #[error("{0}")]
    TorrentDisabled(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Client is not allowed")]
    InvalidClient,
    #[error("Leeching not allowed")]
    LeechDisabled,
    #[error("Account disabled")]
    UserDisabled,
    #[error("Slow down there jimmy.")]
    RequestTooFast,
    #[error("Generic Error :(")]
    Generic,
    #[error("Announce timed out")]
    Timeout,
    #[error("Malformed request")]
    MalformedRequest,
    #[error("Missing key: {0}")]
    InvalidMapKey(String),
    #[error("Failed to parse value for key: {key}")]
    ParseError { key: String },
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
