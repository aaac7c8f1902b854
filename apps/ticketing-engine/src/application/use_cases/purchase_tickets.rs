//! Purchase Tickets Use Case
//!
//! Sequences validation, calculation, payment and seat reservation, and
//! maps every failure to the single outward-facing purchase error.

use std::sync::Arc;

use crate::application::ports::{PaymentError, PaymentPort, ReservationError, SeatReservationPort};
use crate::domain::shared::{AccountId, DomainError};
use crate::domain::ticketing::services::{PurchaseCalculator, RequestValidator};
use crate::domain::ticketing::value_objects::{PurchaseResult, TicketRequest};

/// The reason a purchase did not complete.
///
/// Retained inside [`PurchaseFailed`] for diagnostics; callers see the
/// wrapper, not these kinds, at the public boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PurchaseCause {
    /// The request failed validation.
    #[error(transparent)]
    Rejected(#[from] DomainError),

    /// The payment collaborator failed.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// The seat reservation collaborator failed.
    #[error(transparent)]
    Reservation(#[from] ReservationError),
}

/// The single externally-visible purchase error.
///
/// Every internal failure kind is caught exactly once at the use-case
/// boundary and wrapped here; the display embeds the original message.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Purchase failed: {cause}")]
pub struct PurchaseFailed {
    cause: PurchaseCause,
}

impl PurchaseFailed {
    /// The underlying failure.
    #[must_use]
    pub const fn cause(&self) -> &PurchaseCause {
        &self.cause
    }
}

impl From<PurchaseCause> for PurchaseFailed {
    fn from(cause: PurchaseCause) -> Self {
        Self { cause }
    }
}

/// Use case for purchasing cinema tickets.
///
/// Each call is independent and self-contained: the collaborators are
/// invoked strictly in sequence, nothing is retried, and a reservation
/// failure after a successful charge is not compensated.
pub struct PurchaseTicketsUseCase<P, S>
where
    P: PaymentPort,
    S: SeatReservationPort,
{
    payment: Arc<P>,
    reservation: Arc<S>,
    validator: RequestValidator,
    calculator: PurchaseCalculator,
}

impl<P, S> PurchaseTicketsUseCase<P, S>
where
    P: PaymentPort,
    S: SeatReservationPort,
{
    /// Create a use case with the default validator and pricing table.
    #[must_use]
    pub fn new(payment: Arc<P>, reservation: Arc<S>) -> Self {
        Self::with_rules(
            payment,
            reservation,
            RequestValidator::default(),
            PurchaseCalculator::default(),
        )
    }

    /// Create a use case with explicit rules.
    #[must_use]
    pub fn with_rules(
        payment: Arc<P>,
        reservation: Arc<S>,
        validator: RequestValidator,
        calculator: PurchaseCalculator,
    ) -> Self {
        Self {
            payment,
            reservation,
            validator,
            calculator,
        }
    }

    /// Execute the purchase.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseFailed`] for any validation, payment or
    /// reservation failure. No partial result is ever returned.
    pub async fn execute(
        &self,
        account_id: AccountId,
        tickets: &[TicketRequest],
    ) -> Result<PurchaseResult, PurchaseFailed> {
        tracing::debug!(account_id = %account_id, "purchase requested");

        match self.purchase(account_id, tickets).await {
            Ok(result) => {
                tracing::info!(
                    account_id = %account_id,
                    price = %result.price,
                    seats = result.seats_reserved,
                    "booking successful"
                );
                Ok(result)
            }
            Err(cause) => {
                tracing::error!(account_id = %account_id, error = %cause, "purchase request unsuccessful");
                Err(PurchaseFailed::from(cause))
            }
        }
    }

    /// The internal sequence; each step runs strictly after the previous
    /// one succeeds.
    async fn purchase(
        &self,
        account_id: AccountId,
        tickets: &[TicketRequest],
    ) -> Result<PurchaseResult, PurchaseCause> {
        self.validator.validate(account_id, tickets)?;

        let total_cost = self.calculator.total_cost(tickets);
        let total_seats = self.calculator.total_seats(tickets);

        self.payment.make_payment(account_id, total_cost).await?;
        self.reservation.reserve_seats(account_id, total_seats).await?;

        Ok(PurchaseResult::new(total_cost, total_seats))
    }
}
