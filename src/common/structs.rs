//! Common data structures.

/// Simple message-carrying error used during boot and configuration handling.
pub mod custom_error;
