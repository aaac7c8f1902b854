//! Purchase limit configuration.

use serde::{Deserialize, Serialize};

use crate::domain::ticketing::value_objects::TicketLimits;

/// Purchase limit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Minimum tickets per line and minimum total.
    #[serde(default = "default_min_tickets")]
    pub min_tickets: u32,
    /// Maximum total tickets per purchase.
    #[serde(default = "default_max_tickets")]
    pub max_tickets: u32,
}

impl LimitsConfig {
    /// Build the domain limit pair from this configuration.
    #[must_use]
    pub const fn to_limits(&self) -> TicketLimits {
        TicketLimits::new(self.min_tickets, self.max_tickets)
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            min_tickets: default_min_tickets(),
            max_tickets: default_max_tickets(),
        }
    }
}

const fn default_min_tickets() -> u32 {
    1
}

const fn default_max_tickets() -> u32 {
    25
}
