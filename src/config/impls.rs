//! Implementation blocks for configuration types.

/// Configuration defaults, loading, saving and validation.
pub mod configuration;
