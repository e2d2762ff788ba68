//! Content hash over canonical address text.
//!
//! # Responsibility
//! - Provide a stable 32-bit non-cryptographic hash for index builders.
//!
//! # Invariants
//! - The hash covers the canonical text bytes exactly as stored.
//! - Byte-identical addresses always hash identically.
//! - Known caveat: [`PostAddress::eq`] compares fields case-insensitively
//!   while this hash is case-sensitive, so case-differing `eq`-equal
//!   addresses hash differently. Callers building hash indexes must key on
//!   canonical text, not on the `eq` relation.

use crate::model::address::PostAddress;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over an arbitrary byte slice.
pub fn fnv1a32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

impl PostAddress {
    /// Content hash of the canonical text.
    pub fn hash32(&self) -> u32 {
        fnv1a32(self.as_str().as_bytes())
    }
}
