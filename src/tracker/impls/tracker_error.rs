use actix_web::http::StatusCode;
use crate::tracker::enums::tracker_error::TrackerError;

impl TrackerError {
    pub fn code(&self) -> u32 {
        match self {
            TrackerError::InvalidRequestType => 100,
            TrackerError::MissingInfoHash => 101,
            TrackerError::MissingPeerId => 102,
            TrackerError::MissingPort => 103,
            TrackerError::InvalidPort => 104,
            TrackerError::MissingLeft => 105,
            TrackerError::InvalidIp => 106,
            TrackerError::InvalidInfoHash => 150,
            TrackerError::InvalidPeerId => 151,
            TrackerError::InvalidNumWant => 152,
            TrackerError::InfoHashNotFound | TrackerError::TorrentDisabled(_) => 200,
            TrackerError::Unauthorized => 300,
            TrackerError::InvalidClient => 301,
            TrackerError::LeechDisabled | TrackerError::UserDisabled => 302,
            TrackerError::RequestTooFast => 500,
            TrackerError::MalformedRequest | TrackerError::InvalidMapKey(_) | TrackerError::ParseError { .. } => 901,
            TrackerError::Generic | TrackerError::Timeout | TrackerError::Store(_) => 900,
        }
    }

    /// The message sent to the client as `failure reason`.
    ///
    /// Internal failures collapse into the generic message, their detail only
    /// goes to the log.
    pub fn message(&self) -> String {
        match self {
            TrackerError::Generic | TrackerError::Timeout | TrackerError::Store(_) => String::from("Generic Error :("),
            TrackerError::InvalidMapKey(_) | TrackerError::ParseError { .. } => String::from("Malformed request"),
            _ => self.to_string()
        }
    }

    pub fn http_status(&self) -> StatusCode {
        match self.code() {
            100..=199 | 901 => StatusCode::BAD_REQUEST,
            200 => StatusCode::NOT_FOUND,
            300..=399 => StatusCode::FORBIDDEN,
            500 => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
