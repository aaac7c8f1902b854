//! Domain errors for the ticketing engine.

use std::fmt;

/// Domain-level errors that can occur in business logic.
///
/// These errors are independent of infrastructure concerns. `InvalidValue`
/// covers malformed input (bad account id, bad basket shape, out-of-range
/// line counts); `BusinessRuleViolation` covers structurally valid requests
/// that break a purchase rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid value for a field.
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// Business rule violation.
    BusinessRuleViolation {
        /// Rule code.
        rule: String,
        /// Description of the violation.
        message: String,
    },
}

impl DomainError {
    /// Invalid value error for a field.
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Business rule violation with a rule code.
    #[must_use]
    pub fn rule_violation(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BusinessRuleViolation {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Returns true if this is a business rule violation.
    #[must_use]
    pub const fn is_rule_violation(&self) -> bool {
        matches!(self, Self::BusinessRuleViolation { .. })
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::BusinessRuleViolation { rule, message } => {
                write!(f, "Business rule '{rule}' violated: {message}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
