//! Purchase size limits.

use serde::{Deserialize, Serialize};

/// Limits applied to a ticket purchase.
///
/// `min_tickets` doubles as the per-line minimum and the lower bound of the
/// total-count range; `max_tickets` bounds the total across all lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketLimits {
    /// Minimum tickets per line and minimum total.
    pub min_tickets: u32,
    /// Maximum total tickets per purchase.
    pub max_tickets: u32,
}

impl TicketLimits {
    /// Create a new limit pair.
    #[must_use]
    pub const fn new(min_tickets: u32, max_tickets: u32) -> Self {
        Self {
            min_tickets,
            max_tickets,
        }
    }
}

impl Default for TicketLimits {
    /// The standard limits: at least one ticket, at most 25 per purchase.
    fn default() -> Self {
        Self::new(1, 25)
    }
}
