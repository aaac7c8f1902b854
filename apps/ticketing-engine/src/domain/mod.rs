//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure
//! dependencies. This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic
//!
//! # Bounded Contexts
//!
//! - [`ticketing`]: Ticket categories, pricing and purchase rules
//! - [`shared`]: Value objects and errors shared across contexts

pub mod shared;
pub mod ticketing;
