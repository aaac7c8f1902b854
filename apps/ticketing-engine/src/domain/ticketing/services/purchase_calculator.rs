//! Purchase Calculation Service
//!
//! Derives the total cost and seat count of a validated basket.

use crate::domain::shared::Money;
use crate::domain::ticketing::value_objects::{PricingTable, TicketRequest};

/// Computes purchase totals from the pricing table.
///
/// Both reductions are pure and order-independent, and are safe standalone:
/// an empty basket totals zero, a category without a pricing rule
/// contributes nothing, and lines with non-positive counts (which the
/// validator rejects before these run) contribute no seats.
#[derive(Debug, Clone, Default)]
pub struct PurchaseCalculator {
    table: PricingTable,
}

impl PurchaseCalculator {
    /// Create a calculator over the given pricing table.
    #[must_use]
    pub const fn new(table: PricingTable) -> Self {
        Self { table }
    }

    /// The pricing table this calculator reads.
    #[must_use]
    pub const fn table(&self) -> &PricingTable {
        &self.table
    }

    /// Total cost of the basket: sum of count times unit price per line.
    #[must_use]
    pub fn total_cost(&self, tickets: &[TicketRequest]) -> Money {
        tickets
            .iter()
            .map(|line| self.table.unit_price(line.category()) * line.count())
            .sum()
    }

    /// Total seats demanded by the basket: sum of counts over seat-requiring
    /// categories only.
    #[must_use]
    pub fn total_seats(&self, tickets: &[TicketRequest]) -> u32 {
        tickets
            .iter()
            .filter(|line| self.table.requires_seat(line.category()))
            .map(|line| line.count().max(0).unsigned_abs())
            .sum()
    }
}
