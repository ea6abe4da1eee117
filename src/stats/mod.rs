//! Real-time statistics tracking.
//!
//! Atomic counters for tracker activity, updated from the announce path and
//! from the background tasks, and logged periodically by the console task.
//!
//! # Thread Safety
//!
//! All statistics are stored as atomic integers, allowing safe concurrent
//! updates from multiple worker threads without locking overhead.
//!
//! # Example
//!
//! ```rust,ignore
//! use mika_tracker::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::AnnouncesHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
