//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Core tracker settings (intervals, expiry, hit-and-run policy).
pub mod tracker_config;

/// Store backend and batch sync settings.
pub mod database_config;

/// HTTP server configuration.
pub mod http_trackers_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
