//! Statistics enumerations.

/// The counters that can be updated.
pub mod stats_event;
