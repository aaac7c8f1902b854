//! Integration tests for the ticket purchase flow.
//!
//! These tests drive the engine through its public API with the in-memory
//! collaborator adapters, covering the pricing scenarios and failure
//! short-circuits end to end.

use std::sync::Arc;

use ticketing_engine::config::load_config_from_string;
use ticketing_engine::{
    AccountId, InMemoryPaymentGateway, InMemorySeatReservationService, Money, PurchaseCalculator,
    PurchaseTicketsUseCase, RequestValidator, TicketCategory, TicketRequest,
};

fn engine(
    payment: Arc<InMemoryPaymentGateway>,
    reservation: Arc<InMemorySeatReservationService>,
) -> PurchaseTicketsUseCase<InMemoryPaymentGateway, InMemorySeatReservationService> {
    PurchaseTicketsUseCase::new(payment, reservation)
}

#[tokio::test]
async fn standard_basket_prices_at_95_for_5_seats() {
    let payment = Arc::new(InMemoryPaymentGateway::new());
    let reservation = Arc::new(InMemorySeatReservationService::new());
    let use_case = engine(Arc::clone(&payment), Arc::clone(&reservation));

    let requests = [
        TicketRequest::new(TicketCategory::Adult, 2),
        TicketRequest::new(TicketCategory::Child, 3),
        TicketRequest::new(TicketCategory::Infant, 1),
    ];

    let result = use_case
        .execute(AccountId::new(1234), &requests)
        .await
        .unwrap();

    // 2x£25 + 3x£15 + 1x£0 = £95; infants reserve no seat
    assert_eq!(result.price, Money::from_pounds(95));
    assert_eq!(result.seats_reserved, 5);

    let charges = payment.charges();
    assert_eq!(charges.len(), 1);
    assert_eq!(charges[0].amount, Money::from_pounds(95));

    let reservations = reservation.reservations();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].seat_count, 5);
}

#[tokio::test]
async fn infant_only_basket_is_rejected_before_any_collaborator_call() {
    let payment = Arc::new(InMemoryPaymentGateway::new());
    let reservation = Arc::new(InMemorySeatReservationService::new());
    let use_case = engine(Arc::clone(&payment), Arc::clone(&reservation));

    let requests = [TicketRequest::new(TicketCategory::Infant, 1)];
    let err = use_case
        .execute(AccountId::new(1), &requests)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("ADULT_REQUIRED"));
    assert!(payment.is_empty());
    assert!(reservation.is_empty());
}

#[tokio::test]
async fn zero_account_id_is_rejected_before_any_collaborator_call() {
    let payment = Arc::new(InMemoryPaymentGateway::new());
    let reservation = Arc::new(InMemorySeatReservationService::new());
    let use_case = engine(Arc::clone(&payment), Arc::clone(&reservation));

    let requests = [TicketRequest::new(TicketCategory::Adult, 1)];
    let err = use_case
        .execute(AccountId::new(0), &requests)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("account id must be a positive integer"));
    assert!(payment.is_empty());
    assert!(reservation.is_empty());
}

#[tokio::test]
async fn basket_of_exactly_25_tickets_succeeds() {
    let payment = Arc::new(InMemoryPaymentGateway::new());
    let reservation = Arc::new(InMemorySeatReservationService::new());
    let use_case = engine(Arc::clone(&payment), Arc::clone(&reservation));

    let requests = [
        TicketRequest::new(TicketCategory::Adult, 20),
        TicketRequest::new(TicketCategory::Child, 5),
    ];

    let result = use_case
        .execute(AccountId::new(7), &requests)
        .await
        .unwrap();

    assert_eq!(result.price, Money::from_pounds(20 * 25 + 5 * 15));
    assert_eq!(result.seats_reserved, 25);
}

#[tokio::test]
async fn basket_of_26_tickets_is_rejected() {
    let payment = Arc::new(InMemoryPaymentGateway::new());
    let reservation = Arc::new(InMemorySeatReservationService::new());
    let use_case = engine(Arc::clone(&payment), Arc::clone(&reservation));

    let requests = [
        TicketRequest::new(TicketCategory::Adult, 20),
        TicketRequest::new(TicketCategory::Child, 6),
    ];

    let err = use_case
        .execute(AccountId::new(7), &requests)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("TICKET_COUNT_RANGE"));
    assert!(payment.is_empty());
}

#[tokio::test]
async fn one_infant_per_adult_lap_is_allowed() {
    let payment = Arc::new(InMemoryPaymentGateway::new());
    let reservation = Arc::new(InMemorySeatReservationService::new());
    let use_case = engine(Arc::clone(&payment), Arc::clone(&reservation));

    let requests = [
        TicketRequest::new(TicketCategory::Adult, 2),
        TicketRequest::new(TicketCategory::Infant, 2),
    ];

    let result = use_case
        .execute(AccountId::new(5), &requests)
        .await
        .unwrap();

    assert_eq!(result.price, Money::from_pounds(50));
    assert_eq!(result.seats_reserved, 2);
}

#[tokio::test]
async fn declined_payment_surfaces_as_purchase_failure_without_reservation() {
    let payment = Arc::new(InMemoryPaymentGateway::declining("insufficient funds"));
    let reservation = Arc::new(InMemorySeatReservationService::new());
    let use_case = engine(Arc::clone(&payment), Arc::clone(&reservation));

    let requests = [TicketRequest::new(TicketCategory::Adult, 2)];
    let err = use_case
        .execute(AccountId::new(9), &requests)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Purchase failed: Payment declined: insufficient funds"
    );
    assert!(reservation.is_empty());
}

#[tokio::test]
async fn failed_reservation_leaves_the_charge_in_place() {
    let payment = Arc::new(InMemoryPaymentGateway::new());
    let reservation = Arc::new(InMemorySeatReservationService::rejecting("screening is full"));
    let use_case = engine(Arc::clone(&payment), Arc::clone(&reservation));

    let requests = [TicketRequest::new(TicketCategory::Adult, 2)];
    let err = use_case
        .execute(AccountId::new(9), &requests)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Seats unavailable"));
    // No compensation: the charge stays recorded.
    assert_eq!(payment.len(), 1);
}

#[tokio::test]
async fn configured_pricing_flows_through_the_engine() {
    let yaml = r"
pricing:
  tickets:
    - category: ADULT
      unit_price: 30
      requires_seat: true
    - category: CHILD
      unit_price: 10
      requires_seat: true
    - category: INFANT
      unit_price: 0
limits:
  max_tickets: 5
";
    let config = load_config_from_string(yaml).unwrap();

    let payment = Arc::new(InMemoryPaymentGateway::new());
    let reservation = Arc::new(InMemorySeatReservationService::new());
    let use_case = PurchaseTicketsUseCase::with_rules(
        Arc::clone(&payment),
        Arc::clone(&reservation),
        RequestValidator::new(config.limits.to_limits()),
        PurchaseCalculator::new(config.pricing.to_table()),
    );

    let ok = [
        TicketRequest::new(TicketCategory::Adult, 1),
        TicketRequest::new(TicketCategory::Child, 2),
    ];
    let result = use_case.execute(AccountId::new(3), &ok).await.unwrap();
    assert_eq!(result.price, Money::from_pounds(50));
    assert_eq!(result.seats_reserved, 3);

    // The tightened limit applies too.
    let too_many = [TicketRequest::new(TicketCategory::Adult, 6)];
    let err = use_case.execute(AccountId::new(3), &too_many).await.unwrap_err();
    assert!(err.to_string().contains("outside [1, 5]"));
}

#[tokio::test]
async fn repeated_purchases_are_independent() {
    let payment = Arc::new(InMemoryPaymentGateway::new());
    let reservation = Arc::new(InMemorySeatReservationService::new());
    let use_case = engine(Arc::clone(&payment), Arc::clone(&reservation));

    let requests = [TicketRequest::new(TicketCategory::Adult, 1)];
    use_case.execute(AccountId::new(1), &requests).await.unwrap();
    use_case.execute(AccountId::new(1), &requests).await.unwrap();

    // No idempotency: two calls, two charges, two reservations.
    assert_eq!(payment.len(), 2);
    assert_eq!(reservation.len(), 2);
}
