//! Strongly-typed account identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for the purchasing account.
///
/// Account ids are numeric. Any `i64` is constructible; positivity is a
/// validation concern checked when a purchase request is gated, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Create a new account identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner numeric value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Returns true if this id is in the valid range (greater than zero).
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AccountId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<AccountId> for i64 {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_new_and_display() {
        let id = AccountId::new(1234);
        assert_eq!(id.value(), 1234);
        assert_eq!(format!("{id}"), "1234");
    }

    #[test]
    fn account_id_positivity() {
        assert!(AccountId::new(1).is_positive());
        assert!(!AccountId::new(0).is_positive());
        assert!(!AccountId::new(-7).is_positive());
    }

    #[test]
    fn account_id_equality() {
        assert_eq!(AccountId::new(1), AccountId::new(1));
        assert_ne!(AccountId::new(1), AccountId::new(2));
    }

    #[test]
    fn account_id_from_i64() {
        let id: AccountId = 42_i64.into();
        assert_eq!(id.value(), 42);

        let raw: i64 = id.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn account_id_serde_roundtrip() {
        let id = AccountId::new(1234);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "1234");

        let parsed: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
