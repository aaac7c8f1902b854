//! Ticket category (adult, child or infant).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;

/// Ticket category.
///
/// A closed set: unknown categories are rejected at the parsing boundary
/// rather than carried around as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketCategory {
    /// Adult ticket. Priced and seated.
    Adult,
    /// Child ticket. Priced and seated.
    Child,
    /// Infant ticket. Free, travels on an adult's lap.
    Infant,
}

impl TicketCategory {
    /// All categories, in pricing-table order.
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Stable name used in logs and serialized form.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TicketCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            other => Err(DomainError::invalid_value(
                "category",
                format!("unknown ticket category: {other}"),
            )),
        }
    }
}
