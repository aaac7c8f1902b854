//! Payment Port (Driven Port)
//!
//! Interface for charging the purchasing account through an external
//! payment provider.

use async_trait::async_trait;

use crate::domain::shared::{AccountId, Money};

/// Payment port error.
///
/// Opaque to the core: whatever the provider reports is surfaced as-is and
/// no partial charge is assumed reversed on failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PaymentError {
    /// The provider declined the charge.
    #[error("Payment declined: {reason}")]
    Declined {
        /// Decline reason.
        reason: String,
    },

    /// The provider could not be reached.
    #[error("Payment provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Unknown provider error.
    #[error("Payment error: {message}")]
    Unknown {
        /// Error details.
        message: String,
    },
}

/// Port for the payment collaborator.
#[async_trait]
pub trait PaymentPort: Send + Sync {
    /// Charge the account for the given amount.
    async fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), PaymentError>;
}
