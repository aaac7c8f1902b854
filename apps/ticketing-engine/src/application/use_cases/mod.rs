//! Application Use Cases
//!
//! Orchestration of domain services and ports.

mod purchase_tickets;

pub use purchase_tickets::{PurchaseCause, PurchaseFailed, PurchaseTicketsUseCase};
