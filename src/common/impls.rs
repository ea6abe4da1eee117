//! Implementation blocks for common types.

/// CustomError implementation: construction, Display and Error.
pub mod custom_error;
