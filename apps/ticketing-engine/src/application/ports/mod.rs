//! Application Ports (Driven)
//!
//! Ports define interfaces for the external collaborators the purchase
//! flow depends on. Adapters live in the infrastructure layer.

mod payment_port;
mod reservation_port;

pub use payment_port::{PaymentError, PaymentPort};
pub use reservation_port::{ReservationError, SeatReservationPort};
