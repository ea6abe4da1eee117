//! HTTP tracker endpoints.
//!
//! Serves the private tracker protocol (BEP 3 with BEP 7 and BEP 23
//! extensions) on every enabled `http_server` entry of the configuration.
//!
//! # Endpoints
//!
//! - `/{passkey}/announce` - Peer announcements for the user owning `passkey`
//! - `/{passkey}/scrape` - Swarm counters for one or more info hashes
//!
//! Every response is a bencoded dictionary. Failures carry a
//! `failure reason` and the HTTP status belonging to their error code.

/// Data structures shared by the HTTP handlers.
pub mod structs;

/// Server setup and request handlers.
#[allow(clippy::module_inception)]
pub mod http;
