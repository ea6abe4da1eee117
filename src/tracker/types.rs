//! Type aliases for the shared cache maps.

/// Cached torrents keyed by info hash.
pub mod torrents_map;

/// Cached users keyed by passkey.
pub mod users_map;
