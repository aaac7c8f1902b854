//! Ticketing Engine Binary
//!
//! Runs a demonstration purchase against the engine with the in-memory
//! collaborator adapters.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin ticketing-engine
//! ```
//!
//! # Environment Variables
//!
//! - `TICKETING_CONFIG`: Optional path to a YAML config file
//! - `RUST_LOG`: Log level (overrides the configured level)

use std::sync::Arc;

use ticketing_engine::config::{Config, load_config};
use ticketing_engine::domain::ticketing::services::{PurchaseCalculator, RequestValidator};
use ticketing_engine::domain::ticketing::value_objects::{TicketCategory, TicketRequest};
use ticketing_engine::infrastructure::payment::InMemoryPaymentGateway;
use ticketing_engine::infrastructure::reservation::InMemorySeatReservationService;
use ticketing_engine::observability::init_tracing;
use ticketing_engine::{AccountId, PurchaseTicketsUseCase};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::var("TICKETING_CONFIG") {
        Ok(path) => load_config(Some(&path))?,
        Err(_) => Config::default(),
    };

    init_tracing(&config.observability.logging)?;
    tracing::info!("in cinema-ticket purchase service");

    let payment = Arc::new(InMemoryPaymentGateway::new());
    let reservation = Arc::new(InMemorySeatReservationService::new());
    let use_case = PurchaseTicketsUseCase::with_rules(
        payment,
        reservation,
        RequestValidator::new(config.limits.to_limits()),
        PurchaseCalculator::new(config.pricing.to_table()),
    );

    let requests = [
        TicketRequest::new(TicketCategory::Adult, 2),
        TicketRequest::new(TicketCategory::Child, 3),
        TicketRequest::new(TicketCategory::Infant, 1),
    ];

    let result = use_case.execute(AccountId::new(1234), &requests).await?;
    tracing::info!(price = %result.price, seats = result.seats_reserved, "purchase service returned");

    Ok(())
}
