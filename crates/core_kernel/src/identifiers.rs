//! Strongly-typed identifiers for domain entities
//!
//! Bills are keyed by a sequential number so that the identifier doubles as
//! the recency order. Consumers are keyed by their username.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Identifier of a bill, issued by a [`BillSequence`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillId(u64);

impl BillId {
    /// Creates from a raw sequence number
    pub fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying sequence number
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the identifier prefix for display
    pub fn prefix() -> &'static str {
        "BILL"
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", Self::prefix(), self.0)
    }
}

impl FromStr for BillId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Strip prefix if present
        let digits = s.strip_prefix("BILL-").unwrap_or(s);
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidIdentifier(s.to_string()))
    }
}

/// Issues strictly increasing bill identifiers, starting at 1
#[derive(Debug, Clone, Default)]
pub struct BillSequence {
    last: u64,
}

impl BillSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next identifier
    pub fn next_id(&mut self) -> BillId {
        self.last += 1;
        BillId(self.last)
    }

    /// The most recently issued identifier, if any
    pub fn last_issued(&self) -> Option<BillId> {
        (self.last > 0).then_some(BillId(self.last))
    }
}

/// Login name of a consumer, unique within a registry
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Username {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Username {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Username {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for Username {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Username {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_id_display() {
        assert_eq!(BillId::from_raw(7).to_string(), "BILL-7");
    }

    #[test]
    fn test_id_parsing() {
        let original = BillId::from_raw(42);
        let parsed: BillId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
        assert_eq!("42".parse::<BillId>().unwrap(), original);
    }

    #[test]
    fn test_sequence_starts_at_one() {
        let mut sequence = BillSequence::new();
        assert_eq!(sequence.last_issued(), None);
        assert_eq!(sequence.next_id().value(), 1);
        assert_eq!(sequence.next_id().value(), 2);
        assert_eq!(sequence.last_issued(), Some(BillId::from_raw(2)));
    }

    #[test]
    fn test_username_compares_with_str() {
        let name = Username::from("alice");
        assert_eq!(name, "alice");
        assert_eq!(name.to_string(), "alice");
    }

    #[test]
    fn test_default_username_is_empty() {
        assert_eq!(Username::default().as_str(), "");
    }
}
