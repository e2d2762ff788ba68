//! Domain model for the postal address value type.
//!
//! # Responsibility
//! - Define the canonical address representation and its field views.
//! - Keep parsing and decomposition as the single grammar authority.
//!
//! # Invariants
//! - Canonical text is the only stored form; fields are derived on demand.
//! - Every constructed address has passed full grammar validation.

pub mod address;
pub mod fields;
