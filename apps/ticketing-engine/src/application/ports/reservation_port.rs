//! Seat Reservation Port (Driven Port)
//!
//! Interface for reserving seats through an external booking system.

use async_trait::async_trait;

use crate::domain::shared::AccountId;

/// Seat reservation port error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReservationError {
    /// Not enough seats left for the screening.
    #[error("Seats unavailable: {message}")]
    SeatsUnavailable {
        /// Error details.
        message: String,
    },

    /// The booking system could not be reached.
    #[error("Reservation service unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Unknown booking system error.
    #[error("Reservation error: {message}")]
    Unknown {
        /// Error details.
        message: String,
    },
}

/// Port for the seat reservation collaborator.
#[async_trait]
pub trait SeatReservationPort: Send + Sync {
    /// Reserve the given number of seats for the account.
    async fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Result<(), ReservationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_error_unavailable_display() {
        let err = ReservationError::SeatsUnavailable {
            message: "screening is full".to_string(),
        };
        assert_eq!(format!("{err}"), "Seats unavailable: screening is full");
    }
}
