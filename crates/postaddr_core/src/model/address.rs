//! Canonical postal address value type.
//!
//! # Responsibility
//! - Validate raw text against the address grammar and keep the accepted
//!   form verbatim as the single stored representation.
//! - Expose derived field views and host-facing display projections.
//!
//! # Invariants
//! - A `PostAddress` exists only if its text passed a full parse; the
//!   stored text therefore always re-decomposes.
//! - Parsing validates, it never normalizes: caller-supplied case and
//!   spacing survive unchanged.
//! - The value is immutable after construction.

use crate::model::fields::AddressFields;
use log::debug;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Sentinel rendered by [`PostAddress::display_unit`] for unit-less
/// addresses, inherited from the host-facing projection contract.
pub const NO_UNIT_SENTINEL: &str = "NULL";

/// Validation failure for raw address text.
///
/// Parsing is all-or-nothing: the first violated grammar rule rejects the
/// whole input, and the error carries that input unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    InvalidSyntax(String),
}

impl AddressParseError {
    /// The rejected raw input.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidSyntax(text) => text,
        }
    }
}

impl Display for AddressParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSyntax(text) => {
                write!(f, "invalid input syntax for address: \"{text}\"")
            }
        }
    }
}

impl Error for AddressParseError {}

/// A validated postal address in the form `[unit/]street, suburb, STATE
/// POSTCODE`.
///
/// Only the canonical text is stored; every field is re-derived on demand
/// through [`AddressFields::decompose`].
#[derive(Debug, Clone)]
pub struct PostAddress {
    text: String,
}

impl PostAddress {
    /// Parses raw text into a canonical address.
    ///
    /// # Contract
    /// - On success the stored canonical text is the input verbatim.
    /// - On failure returns [`AddressParseError::InvalidSyntax`] carrying
    ///   the input; no partial result is produced.
    pub fn parse(raw: impl Into<String>) -> Result<Self, AddressParseError> {
        let text = raw.into();
        if let Err(err) = AddressFields::decompose(&text) {
            debug!("event=parse_reject module=core status=error input_len={}", text.len());
            return Err(err);
        }
        Ok(Self { text })
    }

    /// The canonical text, byte-for-byte the accepted input.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Decomposes the canonical text into borrowed fields.
    pub fn fields(&self) -> AddressFields<'_> {
        AddressFields::decompose(&self.text)
            .expect("canonical text re-decomposes by construction")
    }

    /// The four-digit postcode field.
    pub fn display_postcode(&self) -> &str {
        self.fields().postcode
    }

    /// The unit designator, or [`NO_UNIT_SENTINEL`] when the address has
    /// no unit.
    pub fn display_unit(&self) -> &str {
        self.fields().unit.unwrap_or(NO_UNIT_SENTINEL)
    }

    /// Human-oriented short form: street name without its house number,
    /// then the state. Suburb and postcode are dropped.
    ///
    /// `12 Smith Street, Springfield, VI 3000` renders as
    /// `Smith Street, VI`.
    pub fn display_short(&self) -> String {
        let fields = self.fields();
        format!("{}, {}", fields.street_name(), fields.state)
    }
}

impl Display for PostAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for PostAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for PostAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for PostAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(text).map_err(de::Error::custom)
    }
}
