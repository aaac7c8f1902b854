//! In-memory seat reservation service for testing and development.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{ReservationError, SeatReservationPort};
use crate::domain::shared::AccountId;

/// A reservation accepted by the in-memory service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationRecord {
    /// The reserving account.
    pub account_id: AccountId,
    /// Number of seats reserved.
    pub seat_count: u32,
}

/// In-memory implementation of [`SeatReservationPort`].
///
/// Records every accepted reservation. Suitable for testing and
/// development; can be armed to reject all reservations.
#[derive(Debug, Default)]
pub struct InMemorySeatReservationService {
    reservations: RwLock<Vec<ReservationRecord>>,
    reject_reason: Option<String>,
}

impl InMemorySeatReservationService {
    /// Create a service that accepts every reservation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service that rejects every reservation with the given reason.
    #[must_use]
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            reservations: RwLock::new(Vec::new()),
            reject_reason: Some(reason.into()),
        }
    }

    /// Reservations accepted so far, in order.
    #[must_use]
    pub fn reservations(&self) -> Vec<ReservationRecord> {
        self.reservations
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Number of accepted reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations().len()
    }

    /// True when no reservation has been accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations().is_empty()
    }

    /// Forget all recorded reservations.
    pub fn clear(&self) {
        self.reservations
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clear();
    }
}

#[async_trait]
impl SeatReservationPort for InMemorySeatReservationService {
    async fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Result<(), ReservationError> {
        if let Some(reason) = &self.reject_reason {
            return Err(ReservationError::SeatsUnavailable {
                message: reason.clone(),
            });
        }

        tracing::debug!(account_id = %account_id, seats = seat_count, "reservation accepted");
        self.reservations
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(ReservationRecord {
                account_id,
                seat_count,
            });
        Ok(())
    }
}
