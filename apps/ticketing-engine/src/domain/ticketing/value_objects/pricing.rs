//! Pricing rules mapping ticket categories to unit price and seat demand.

use serde::{Deserialize, Serialize};

use crate::domain::shared::Money;
use crate::domain::ticketing::value_objects::TicketCategory;

/// Pricing rule for a single ticket category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRule {
    /// The category this rule prices.
    pub category: TicketCategory,
    /// Price per ticket.
    pub unit_price: Money,
    /// Whether a ticket of this category occupies a physical seat.
    pub requires_seat: bool,
}

impl PricingRule {
    /// Create a pricing rule.
    #[must_use]
    pub const fn new(category: TicketCategory, unit_price: Money, requires_seat: bool) -> Self {
        Self {
            category,
            unit_price,
            requires_seat,
        }
    }
}

/// Read-only pricing table, fixed for the lifetime of the engine.
///
/// A category without a rule prices at zero and demands no seat, so a
/// partial table degrades to free unseated tickets rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PricingTable {
    rules: Vec<PricingRule>,
}

impl PricingTable {
    /// Build a table from an explicit rule list. Lookup scans in order, so
    /// the first rule for a category wins; callers are expected to supply
    /// one rule per category.
    #[must_use]
    pub fn new(rules: Vec<PricingRule>) -> Self {
        Self { rules }
    }

    /// Look up the rule for a category.
    #[must_use]
    pub fn rule(&self, category: TicketCategory) -> Option<&PricingRule> {
        self.rules.iter().find(|r| r.category == category)
    }

    /// Unit price for a category, zero when no rule exists.
    #[must_use]
    pub fn unit_price(&self, category: TicketCategory) -> Money {
        self.rule(category).map_or(Money::ZERO, |r| r.unit_price)
    }

    /// Whether a category occupies a seat, false when no rule exists.
    #[must_use]
    pub fn requires_seat(&self, category: TicketCategory) -> bool {
        self.rule(category).is_some_and(|r| r.requires_seat)
    }

    /// The configured rules, in table order.
    #[must_use]
    pub fn rules(&self) -> &[PricingRule] {
        &self.rules
    }
}

impl Default for PricingTable {
    /// The standard cinema table: ADULT £25 seated, CHILD £15 seated,
    /// INFANT free on an adult's lap.
    fn default() -> Self {
        Self::new(vec![
            PricingRule::new(TicketCategory::Adult, Money::from_pounds(25), true),
            PricingRule::new(TicketCategory::Child, Money::from_pounds(15), true),
            PricingRule::new(TicketCategory::Infant, Money::ZERO, false),
        ])
    }
}
