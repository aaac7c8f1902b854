//! Outcome of a successful purchase.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::Money;

/// The totals of one completed purchase.
///
/// Returned once per successful call; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseResult {
    /// Total price charged.
    pub price: Money,
    /// Number of physical seats reserved.
    pub seats_reserved: u32,
}

impl PurchaseResult {
    /// Create a purchase result.
    #[must_use]
    pub const fn new(price: Money, seats_reserved: u32) -> Self {
        Self {
            price,
            seats_reserved,
        }
    }
}

impl fmt::Display for PurchaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {} seat(s)", self.price, self.seats_reserved)
    }
}
