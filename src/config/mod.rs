//! Configuration management module.
//!
//! Loads, saves and validates the tracker configuration stored as TOML.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains sections for:
//! - **tracker_config**: Announce intervals, peer expiry, hit-and-run policy, client whitelist
//! - **database**: Store backend selection and batch sync tuning
//! - **http_server**: HTTP server instances
//! - **sentry_config**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use mika_tracker::config::structs::configuration::Configuration;
//!
//! // Load configuration, creating config.toml with defaults when asked to
//! let config = Configuration::load_from_file(false)?;
//!
//! // Default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
