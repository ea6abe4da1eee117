//! Common utilities and shared functionality.
//!
//! Helpers used across the tracker: hex conversion for the identifier types,
//! timestamps, speed estimation and logging setup.
//!
//! # Data Structures
//!
//! - `CustomError` - Boot and configuration failures
//!
//! # Example
//!
//! ```rust,ignore
//! use mika_tracker::common::common::{current_time, est_speed};
//!
//! let now = current_time();
//! let speed = est_speed(now - 10, now, 5000);
//! assert_eq!(speed, 500);
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

#[cfg(test)]
mod tests;
