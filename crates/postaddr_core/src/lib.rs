//! Core domain logic for the postaddr address type.
//! This crate is the single source of truth for the address grammar and
//! its comparison semantics.

pub mod hash;
pub mod logging;
pub mod model;
pub mod order;

pub use hash::fnv1a32;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::address::{AddressParseError, PostAddress, NO_UNIT_SENTINEL};
pub use model::fields::AddressFields;
pub use order::{compare, AddressOrdering};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
