/// The contract every store driver implements.
pub mod store_backend;
