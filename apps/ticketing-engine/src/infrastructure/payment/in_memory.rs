//! In-memory payment gateway for testing and development.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{PaymentError, PaymentPort};
use crate::domain::shared::{AccountId, Money};

/// A charge accepted by the in-memory gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeRecord {
    /// The charged account.
    pub account_id: AccountId,
    /// The charged amount.
    pub amount: Money,
}

/// In-memory implementation of [`PaymentPort`].
///
/// Records every accepted charge. Suitable for testing and development;
/// can be armed to decline all charges.
#[derive(Debug, Default)]
pub struct InMemoryPaymentGateway {
    charges: RwLock<Vec<ChargeRecord>>,
    decline_reason: Option<String>,
}

impl InMemoryPaymentGateway {
    /// Create a gateway that accepts every charge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway that declines every charge with the given reason.
    #[must_use]
    pub fn declining(reason: impl Into<String>) -> Self {
        Self {
            charges: RwLock::new(Vec::new()),
            decline_reason: Some(reason.into()),
        }
    }

    /// Charges accepted so far, in order.
    #[must_use]
    pub fn charges(&self) -> Vec<ChargeRecord> {
        self.charges.read().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }

    /// Number of accepted charges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.charges().len()
    }

    /// True when no charge has been accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charges().is_empty()
    }

    /// Forget all recorded charges.
    pub fn clear(&self) {
        self.charges
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clear();
    }
}

#[async_trait]
impl PaymentPort for InMemoryPaymentGateway {
    async fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), PaymentError> {
        if let Some(reason) = &self.decline_reason {
            return Err(PaymentError::Declined {
                reason: reason.clone(),
            });
        }

        tracing::debug!(account_id = %account_id, amount = %amount, "charge accepted");
        self.charges
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(ChargeRecord { account_id, amount });
        Ok(())
    }
}
