//! Short identifiers and the scheme that issues them.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// How short identifiers are issued for new records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdScheme {
    /// Sequential integers from the storage-owned counter, starting at 1.
    #[default]
    Counter,
    /// The storage-generated record key (a UUID).
    Native,
}

impl IdScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdScheme::Counter => "counter",
            IdScheme::Native => "native",
        }
    }

    /// Parses a raw path segment into an identifier of this scheme.
    ///
    /// Counter identifiers are plain ASCII decimal digits that fit in an `i64`;
    /// signs, whitespace and exponents are rejected. Native identifiers are
    /// UUIDs in any of the textual forms the `uuid` crate accepts.
    ///
    /// Returns `None` for malformed input.
    pub fn parse_id(&self, raw: &str) -> Option<ShortId> {
        match self {
            IdScheme::Counter => {
                if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                raw.parse::<i64>().ok().map(ShortId::Sequence)
            }
            IdScheme::Native => Uuid::parse_str(raw).ok().map(ShortId::Native),
        }
    }
}

impl fmt::Display for IdScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "counter" => Ok(IdScheme::Counter),
            "native" => Ok(IdScheme::Native),
            other => Err(format!(
                "unknown id scheme '{other}' (expected 'counter' or 'native')"
            )),
        }
    }
}

/// A short identifier as exposed to clients.
///
/// Serializes as a JSON number for [`ShortId::Sequence`] and as a hyphenated
/// UUID string for [`ShortId::Native`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortId {
    Sequence(i64),
    Native(Uuid),
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortId::Sequence(n) => write!(f, "{n}"),
            ShortId::Native(id) => write!(f, "{}", id.hyphenated()),
        }
    }
}

impl Serialize for ShortId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ShortId::Sequence(n) => serializer.serialize_i64(*n),
            ShortId::Native(id) => serializer.collect_str(&id.hyphenated()),
        }
    }
}
