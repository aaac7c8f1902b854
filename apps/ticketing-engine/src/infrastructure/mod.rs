//! Infrastructure Layer
//!
//! Adapters implementing the application ports. The payment and seat
//! reservation collaborators are external systems; the adapters here are
//! in-process stand-ins used by tests and the demo binary.

pub mod payment;
pub mod reservation;
