/// Available store drivers.
pub mod store_drivers;

/// Errors returned by store operations.
pub mod store_error;
