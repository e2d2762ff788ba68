//! Shared decomposition of canonical address text into typed fields.
//!
//! # Responsibility
//! - Split `[unit/]street, suburb, STATE POSTCODE` text at its delimiters.
//! - Validate every segment against the address grammar in one place.
//!
//! # Invariants
//! - Decomposition never mutates or copies the input; all fields borrow.
//! - Validation and comparison consume the same split rules, so the two
//!   can never drift apart.
//! - The first violated sub-pattern aborts the whole decomposition.

use crate::model::address::AddressParseError;
use once_cell::sync::Lazy;
use regex::Regex;

static UNIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][0-9]+$").expect("valid unit regex"));
static STREET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+ [a-zA-Z]+( [a-zA-Z]+)*$").expect("valid street regex"));
// Segments after a comma keep their leading separator space.
static SUBURB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ [a-zA-Z]+( [a-zA-Z]+)*$").expect("valid suburb regex"));
static STATE_POSTCODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ [A-Z]{2} [0-9]{4}$").expect("valid state/postcode regex"));

/// Borrowed field view over one canonical address string.
///
/// Fields are cleaned: the delimiter-convention leading space of the suburb
/// and state/postcode segments is already stripped, and `unit` excludes the
/// `/` separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressFields<'a> {
    /// Unit designator (`letter` + `digits`), absent for most addresses.
    pub unit: Option<&'a str>,
    /// House number plus street name words, e.g. `12 Smith Street`.
    pub street: &'a str,
    /// One or more alphabetic words.
    pub suburb: &'a str,
    /// Exactly two uppercase letters.
    pub state: &'a str,
    /// Exactly four ASCII digits.
    pub postcode: &'a str,
}

impl<'a> AddressFields<'a> {
    /// Splits and validates canonical address text.
    ///
    /// # Contract
    /// - Splits at the first `/` (optional unit), then the first two `,`s,
    ///   left to right.
    /// - Returns the error carrying the full original input, not the
    ///   offending segment.
    pub fn decompose(text: &'a str) -> Result<Self, AddressParseError> {
        let reject = || AddressParseError::InvalidSyntax(text.to_string());

        let (unit, rest) = match text.split_once('/') {
            Some((unit, rest)) => {
                if !UNIT_RE.is_match(unit) {
                    return Err(reject());
                }
                (Some(unit), rest)
            }
            None => (None, text),
        };

        let (street, rest) = rest.split_once(',').ok_or_else(reject)?;
        if !STREET_RE.is_match(street) {
            return Err(reject());
        }

        let (suburb, state_postcode) = rest.split_once(',').ok_or_else(reject)?;
        if !SUBURB_RE.is_match(suburb) {
            return Err(reject());
        }

        if !STATE_POSTCODE_RE.is_match(state_postcode) {
            return Err(reject());
        }

        // The regexes above pin every offset: " XX NNNN" and " <words>".
        Ok(Self {
            unit,
            street,
            suburb: &suburb[1..],
            state: &state_postcode[1..3],
            postcode: &state_postcode[4..8],
        })
    }

    /// Street name with its leading house number removed.
    ///
    /// The grammar guarantees at least one space after the number, so the
    /// split cannot fail on a decomposed street.
    pub fn street_name(&self) -> &'a str {
        match self.street.split_once(' ') {
            Some((_, name)) => name,
            None => self.street,
        }
    }
}
