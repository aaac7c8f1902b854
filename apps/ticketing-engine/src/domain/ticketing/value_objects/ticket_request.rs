//! A single ticket line: category plus requested count.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;
use crate::domain::ticketing::value_objects::TicketCategory;

/// An immutable pairing of a ticket category and a requested count.
///
/// Construction is deliberately weaker than submission: zero and negative
/// counts are constructible here and rejected later by the request
/// validator. Duplicate detection treats two lines with the same category
/// as equal regardless of count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketRequest {
    category: TicketCategory,
    count: i32,
}

impl TicketRequest {
    /// Create a new ticket line.
    #[must_use]
    pub const fn new(category: TicketCategory, count: i32) -> Self {
        Self { category, count }
    }

    /// Parse a ticket line from an external category name and count.
    ///
    /// # Errors
    ///
    /// Returns an invalid-value error when the category name is not a member
    /// of the closed category set, or when the count does not fit the line
    /// count type. Zero and negative counts are accepted; range checks are
    /// applied at validation time.
    pub fn parse(category: &str, count: i64) -> Result<Self, DomainError> {
        let category = TicketCategory::from_str(category)?;
        let count = i32::try_from(count).map_err(|_| {
            DomainError::invalid_value("count", format!("count {count} is not a representable ticket count"))
        })?;
        Ok(Self::new(category, count))
    }

    /// The ticket category of this line.
    #[must_use]
    pub const fn category(&self) -> TicketCategory {
        self.category
    }

    /// The requested number of tickets on this line.
    #[must_use]
    pub const fn count(&self) -> i32 {
        self.count
    }
}

impl fmt::Display for TicketRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.category, self.count)
    }
}
