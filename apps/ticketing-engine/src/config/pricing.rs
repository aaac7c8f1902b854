//! Pricing table configuration.

use serde::{Deserialize, Serialize};

use crate::domain::shared::Money;
use crate::domain::ticketing::value_objects::{PricingRule, PricingTable, TicketCategory};

/// Pricing configuration: one entry per ticket category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Pricing rules, one per category.
    #[serde(default = "default_rules")]
    pub tickets: Vec<PricingRuleConfig>,
}

/// A single configured pricing rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRuleConfig {
    /// The category being priced.
    pub category: TicketCategory,
    /// Price per ticket.
    pub unit_price: Money,
    /// Whether a ticket of this category occupies a seat.
    #[serde(default)]
    pub requires_seat: bool,
}

impl PricingConfig {
    /// Build the immutable domain pricing table from this configuration.
    #[must_use]
    pub fn to_table(&self) -> PricingTable {
        PricingTable::new(
            self.tickets
                .iter()
                .map(|r| PricingRule::new(r.category, r.unit_price, r.requires_seat))
                .collect(),
        )
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tickets: default_rules(),
        }
    }
}

fn default_rules() -> Vec<PricingRuleConfig> {
    vec![
        PricingRuleConfig {
            category: TicketCategory::Adult,
            unit_price: Money::from_pounds(25),
            requires_seat: true,
        },
        PricingRuleConfig {
            category: TicketCategory::Child,
            unit_price: Money::from_pounds(15),
            requires_seat: true,
        },
        PricingRuleConfig {
            category: TicketCategory::Infant,
            unit_price: Money::ZERO,
            requires_seat: false,
        },
    ]
}
