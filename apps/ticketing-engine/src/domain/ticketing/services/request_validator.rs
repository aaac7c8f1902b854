//! Request Validation Service
//!
//! Gates a purchase request before any pricing or collaborator call.

use crate::domain::shared::{AccountId, DomainError};
use crate::domain::ticketing::value_objects::{TicketCategory, TicketLimits, TicketRequest};

/// Validates purchase requests against structural and business rules.
///
/// Checks run in strict order: account id, then basket structure, then
/// business rules. The first failing check aborts; later checks assume the
/// invariants established by earlier ones (the ratio and total checks only
/// make sense over a non-empty, duplicate-free basket).
#[derive(Debug, Clone, Default)]
pub struct RequestValidator {
    limits: TicketLimits,
}

impl RequestValidator {
    /// Create a validator with the given limits.
    #[must_use]
    pub const fn new(limits: TicketLimits) -> Self {
        Self { limits }
    }

    /// The limits this validator enforces.
    #[must_use]
    pub const fn limits(&self) -> TicketLimits {
        self.limits
    }

    /// Validate a purchase request.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` for malformed input (bad account
    /// id, empty basket, below-minimum line count, duplicate category) and
    /// `DomainError::BusinessRuleViolation` for structurally sound requests
    /// that break a purchase rule.
    pub fn validate(
        &self,
        account_id: AccountId,
        tickets: &[TicketRequest],
    ) -> Result<(), DomainError> {
        tracing::debug!(account_id = %account_id, lines = tickets.len(), "validating purchase request");

        Self::validate_account_id(account_id)?;
        self.validate_ticket_lines(tickets)?;
        self.validate_purchase_rules(tickets)
    }

    /// Account ids must be positive integers.
    fn validate_account_id(account_id: AccountId) -> Result<(), DomainError> {
        if account_id.is_positive() {
            Ok(())
        } else {
            Err(DomainError::invalid_value(
                "account_id",
                "account id must be a positive integer",
            ))
        }
    }

    /// Structural checks over the basket: non-empty, every line at or above
    /// the per-line minimum, no category requested twice.
    fn validate_ticket_lines(&self, tickets: &[TicketRequest]) -> Result<(), DomainError> {
        if tickets.is_empty() {
            return Err(DomainError::invalid_value(
                "tickets",
                "at least one ticket request is required",
            ));
        }

        let min = self.limits.min_tickets;
        for line in tickets {
            if i64::from(line.count()) < i64::from(min) {
                return Err(DomainError::invalid_value(
                    "tickets",
                    format!(
                        "{} line requests {} ticket(s), minimum is {min}",
                        line.category(),
                        line.count()
                    ),
                ));
            }
        }

        let mut seen: Vec<TicketCategory> = Vec::with_capacity(tickets.len());
        for line in tickets {
            if seen.contains(&line.category()) {
                return Err(DomainError::invalid_value(
                    "tickets",
                    format!("duplicate category: {}", line.category()),
                ));
            }
            seen.push(line.category());
        }

        Ok(())
    }

    /// Business rules, assuming a structurally sound basket: an adult must
    /// be present, infants may not outnumber adults, and the total must lie
    /// within the configured range.
    fn validate_purchase_rules(&self, tickets: &[TicketRequest]) -> Result<(), DomainError> {
        let adult_count = Self::count_of(tickets, TicketCategory::Adult);
        if adult_count < 1 {
            return Err(DomainError::rule_violation(
                "ADULT_REQUIRED",
                "at least one adult ticket is required",
            ));
        }

        let infant_count = Self::count_of(tickets, TicketCategory::Infant);
        if infant_count > adult_count {
            return Err(DomainError::rule_violation(
                "INFANT_PER_ADULT",
                format!("infant count {infant_count} exceeds adult count {adult_count}"),
            ));
        }

        let total: i64 = tickets.iter().map(|t| i64::from(t.count())).sum();
        let min = i64::from(self.limits.min_tickets);
        let max = i64::from(self.limits.max_tickets);
        if total < min || total > max {
            return Err(DomainError::rule_violation(
                "TICKET_COUNT_RANGE",
                format!("total ticket count {total} is outside [{min}, {max}]"),
            ));
        }

        Ok(())
    }

    /// Count requested for a category, zero when the category is absent.
    fn count_of(tickets: &[TicketRequest], category: TicketCategory) -> i64 {
        tickets
            .iter()
            .find(|t| t.category() == category)
            .map_or(0, |t| i64::from(t.count()))
    }
}
