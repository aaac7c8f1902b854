//! Ticketing Bounded Context
//!
//! Ticket categories, pricing, purchase limits, and the validation and
//! calculation services that make up the purchase rule engine.

pub mod services;
pub mod value_objects;

pub use services::{PurchaseCalculator, RequestValidator};
pub use value_objects::{
    PricingRule, PricingTable, PurchaseResult, TicketCategory, TicketLimits, TicketRequest,
};
