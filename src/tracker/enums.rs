//! Enumerations used by the tracker.

/// The `event` parameter of an announce.
pub mod announce_event;

/// Errors surfaced to clients, with their tracker codes.
pub mod tracker_error;

/// Items of the sync queue.
pub mod sync_item;
