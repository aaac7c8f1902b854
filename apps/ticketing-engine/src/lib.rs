// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Ticketing Engine - Rust Core Library
//!
//! Deterministic cinema ticket purchase engine: validates and prices a
//! ticket purchase request, then delegates payment and seat reservation to
//! two external collaborators.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (value objects, domain services)
//!   - `ticketing`: categories, pricing, limits, validation, calculation
//!   - `shared`: `Money`, `AccountId`, domain errors
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`PaymentPort`,
//!     `SeatReservationPort`)
//!   - `use_cases`: `PurchaseTickets`
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `payment` / `reservation`: in-memory collaborator stand-ins
//!
//! # Failure policy
//!
//! Internal errors (validation, payment, reservation) are caught exactly
//! once at the use-case boundary and re-raised uniformly as
//! [`PurchaseFailed`]; callers see either a [`PurchaseResult`] or that one
//! error type. Nothing is retried and no compensation is attempted.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Logging setup.
pub mod observability;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::shared::{AccountId, DomainError, Money};
pub use domain::ticketing::services::{PurchaseCalculator, RequestValidator};
pub use domain::ticketing::value_objects::{
    PricingRule, PricingTable, PurchaseResult, TicketCategory, TicketLimits, TicketRequest,
};

// Application re-exports
pub use application::ports::{PaymentError, PaymentPort, ReservationError, SeatReservationPort};
pub use application::use_cases::{PurchaseCause, PurchaseFailed, PurchaseTicketsUseCase};

// Infrastructure re-exports
pub use infrastructure::payment::InMemoryPaymentGateway;
pub use infrastructure::reservation::InMemorySeatReservationService;
