//! Address ordering and approximate-equality comparison.
//!
//! # Responsibility
//! - Order two addresses along the state > suburb > street > unit
//!   precedence, ASCII-case-insensitively per field.
//! - Distinguish locality-level differences (state/suburb) from finer
//!   street/unit differences for the `~` relation.
//!
//! # Invariants
//! - Comparison re-derives fields through the same decomposition the
//!   parser uses; it never re-validates and never mutates.
//! - Exactly one of `lt`, `eq`, `gt` holds for any pair of addresses.
//! - `approx_eq` is true iff neither state nor suburb decided the result.

use crate::model::address::PostAddress;
use std::cmp::Ordering;

/// Outcome of one address comparison.
///
/// Replaces the legacy `{-2,-1,0,1,2}` integer encoding with a tagged
/// result; [`AddressOrdering::raw`] reproduces the integer form for hosts
/// that sort on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressOrdering {
    /// Relative order of the left address against the right.
    pub ordering: Ordering,
    /// True when state or suburb decided the result, i.e. the two
    /// addresses lie in different localities.
    pub differs_at_locality: bool,
}

impl AddressOrdering {
    const EQUAL: Self = Self {
        ordering: Ordering::Equal,
        differs_at_locality: false,
    };

    fn at_locality(ordering: Ordering) -> Self {
        Self {
            ordering,
            differs_at_locality: true,
        }
    }

    fn within_locality(ordering: Ordering) -> Self {
        Self {
            ordering,
            differs_at_locality: false,
        }
    }

    /// The legacy integer encoding: sign carries the order, magnitude `2`
    /// marks a locality-level difference.
    pub fn raw(self) -> i32 {
        let magnitude = if self.differs_at_locality { 2 } else { 1 };
        match self.ordering {
            Ordering::Less => -magnitude,
            Ordering::Equal => 0,
            Ordering::Greater => magnitude,
        }
    }
}

/// ASCII-case-insensitive ordering, matching `strcasecmp` over the
/// grammar's ASCII-only fields.
fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    let left = a.bytes().map(|byte| byte.to_ascii_lowercase());
    let right = b.bytes().map(|byte| byte.to_ascii_lowercase());
    left.cmp(right)
}

/// Compares two addresses along the four-level precedence.
pub fn compare(a: &PostAddress, b: &PostAddress) -> AddressOrdering {
    let left = a.fields();
    let right = b.fields();

    match cmp_ignore_ascii_case(left.state, right.state) {
        Ordering::Equal => {}
        decided => return AddressOrdering::at_locality(decided),
    }

    match cmp_ignore_ascii_case(left.suburb, right.suburb) {
        Ordering::Equal => {}
        decided => return AddressOrdering::at_locality(decided),
    }

    match cmp_ignore_ascii_case(left.street, right.street) {
        Ordering::Equal => {}
        decided => return AddressOrdering::within_locality(decided),
    }

    match (left.unit, right.unit) {
        (None, None) => AddressOrdering::EQUAL,
        // A unit orders after the bare street address.
        (Some(_), None) => AddressOrdering::within_locality(Ordering::Greater),
        (None, Some(_)) => AddressOrdering::within_locality(Ordering::Less),
        (Some(unit_a), Some(unit_b)) => {
            AddressOrdering::within_locality(cmp_ignore_ascii_case(unit_a, unit_b))
        }
    }
}

impl PostAddress {
    /// Compares against another address; see [`compare`].
    pub fn compare(&self, other: &Self) -> AddressOrdering {
        compare(self, other)
    }

    /// Legacy integer comparison result in `{-2,-1,0,1,2}`.
    pub fn raw_cmp(&self, other: &Self) -> i32 {
        self.compare(other).raw()
    }

    pub fn lt(&self, other: &Self) -> bool {
        self.compare(other).ordering == Ordering::Less
    }

    pub fn le(&self, other: &Self) -> bool {
        self.compare(other).ordering != Ordering::Greater
    }

    /// Field-level equality, ASCII-case-insensitive.
    ///
    /// Deliberately not `PartialEq`: this relation is coarser than
    /// canonical-text equality and inconsistent with the byte-level
    /// content hash, so it stays a named predicate.
    pub fn eq(&self, other: &Self) -> bool {
        self.compare(other).ordering == Ordering::Equal
    }

    pub fn ne(&self, other: &Self) -> bool {
        !self.eq(other)
    }

    pub fn ge(&self, other: &Self) -> bool {
        self.compare(other).ordering != Ordering::Less
    }

    pub fn gt(&self, other: &Self) -> bool {
        self.compare(other).ordering == Ordering::Greater
    }

    /// The `~` relation: same state and suburb, street/unit/postcode
    /// ignored.
    pub fn approx_eq(&self, other: &Self) -> bool {
        !self.compare(other).differs_at_locality
    }

    /// The `!~` relation.
    pub fn not_approx_eq(&self, other: &Self) -> bool {
        !self.approx_eq(other)
    }
}

#[cfg(test)]
mod tests {
    use super::{cmp_ignore_ascii_case, AddressOrdering};
    use std::cmp::Ordering;

    #[test]
    fn case_insensitive_cmp_matches_strcasecmp() {
        assert_eq!(cmp_ignore_ascii_case("VIC", "vic"), Ordering::Equal);
        assert_eq!(cmp_ignore_ascii_case("NS", "vi"), Ordering::Less);
        assert_eq!(cmp_ignore_ascii_case("wa", "QL"), Ordering::Greater);
    }

    #[test]
    fn raw_encoding_keeps_sign_and_magnitude() {
        assert_eq!(AddressOrdering::at_locality(Ordering::Less).raw(), -2);
        assert_eq!(AddressOrdering::at_locality(Ordering::Greater).raw(), 2);
        assert_eq!(AddressOrdering::within_locality(Ordering::Less).raw(), -1);
        assert_eq!(AddressOrdering::within_locality(Ordering::Greater).raw(), 1);
        assert_eq!(AddressOrdering::EQUAL.raw(), 0);
    }
}
