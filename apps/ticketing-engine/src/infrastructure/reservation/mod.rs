//! Seat reservation adapters.

mod in_memory;

pub use in_memory::{InMemorySeatReservationService, ReservationRecord};
