//! # Mika Tracker
//!
//! A private BitTorrent tracker core built on Actix-web.
//!
//! ## Overview
//!
//! Peers announce with a per-user passkey in the URL. Every announce updates
//! the peer, the torrent and the user in memory, the accumulated deltas are
//! written to the configured store by a background batch writer.
//!
//! ## Features
//!
//! - **Accounting**: Per-user upload/download totals with per-torrent multipliers
//! - **Hit and run detection**: Users leaving too early are flagged per torrent
//! - **Client whitelist**: Peer id prefix matching
//! - **Stores**: In-memory or SQLite, both with additive batch writes
//! - **Monitoring**: Console statistics and Sentry integration
//!
//! ## BEP Compliance
//!
//! - BEP 3: The BitTorrent Protocol Specification
//! - BEP 7: IPv6 Tracker Extension
//! - BEP 23: Tracker Returns Compact Peer Lists
//! - BEP 48: Tracker Protocol Extension: Scrape
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use mika_tracker::config::structs::configuration::Configuration;
//! use mika_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let config = Arc::new(Configuration::load_from_file(false)?);
//! let store = TorrentTracker::create_store(&config).await?;
//! let tracker = Arc::new(TorrentTracker::new(config, store));
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Shared helpers, logging setup and the boot error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - Announce and scrape endpoints
//! - [`stats`] - Runtime counters
//! - [`store`] - Persistence contract and its implementations
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Swarms, torrents, users and the announce pipeline

/// Common utilities and shared functionality.
///
/// Contains hex conversion, speed estimation, logging setup and the
/// boot-time error type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, saving and validating the TOML configuration.
pub mod config;

/// HTTP tracker protocol implementation.
///
/// Handles announce and scrape requests and encodes their bencoded responses.
pub mod http;

/// Statistics tracking module.
pub mod stats;

/// Persistence layer.
///
/// Defines the `StoreBackend` contract used by the tracker, with an
/// in-memory implementation and a SQLite implementation.
pub mod store;

/// CLI argument parsing.
pub mod structs;

/// Core tracker logic module.
///
/// Contains query parsing, announce validation, swarm bookkeeping, user
/// accounting, the batched store sync and the peer reaper.
pub mod tracker;
