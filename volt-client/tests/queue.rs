//! Staff queue coordinator tests against a recording mock backend

mod common;

use common::{MockHttpClient, booking_json};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use volt_client::{
    BookingLifecycle, BookingStatus, ClientConfig, ClientError, QueueKind, RentalApi,
    StaffQueueCoordinator,
};

const STAFF_ID: i64 = 7;

fn coordinator(mock: &MockHttpClient, kind: QueueKind) -> StaffQueueCoordinator<MockHttpClient> {
    let lifecycle = BookingLifecycle::new(RentalApi::new(mock.clone()), ClientConfig::default());
    StaffQueueCoordinator::new(lifecycle, kind, STAFF_ID)
}

#[tokio::test]
async fn refresh_normalizes_wrapped_envelope_and_sorts() {
    let mock = MockHttpClient::new();
    mock.enqueue(serde_json::json!({
        "data": [
            booking_json(2, "PENDING", "2025-06-01T14:00:00Z"),
            booking_json(1, "PENDING", "2025-06-01T08:00:00Z"),
            booking_json(3, "DENIED", "2025-06-01T11:00:00Z")
        ]
    }));

    let coordinator = coordinator(&mock, QueueKind::CheckIn);
    let snapshot = coordinator.refresh().await.unwrap();

    assert_eq!(snapshot.version, 1);
    let ids: Vec<i64> = snapshot
        .entries
        .iter()
        .map(|e| e.booking.booking_id)
        .collect();
    assert_eq!(ids, vec![1, 3, 2]);
    // denied rows stay visible for operator review
    assert_eq!(snapshot.entries[1].booking.status, BookingStatus::Denied);
    assert_eq!(
        mock.calls()[0].path,
        "staff/bookings/checkin-queue?staffId=7"
    );
}

#[tokio::test]
async fn refresh_accepts_bare_array_envelope() {
    let mock = MockHttpClient::new();
    mock.enqueue(serde_json::json!([
        booking_json(1, "CONFIRMED", "2025-06-01T08:00:00Z")
    ]));

    let coordinator = coordinator(&mock, QueueKind::Return);
    let snapshot = coordinator.refresh().await.unwrap();

    assert_eq!(snapshot.entries.len(), 1);
    assert_eq!(
        mock.calls()[0].path,
        "staff/bookings/return-queue?staffId=7"
    );
}

#[tokio::test]
async fn refresh_accepts_integer_total_price() {
    let mock = MockHttpClient::new();
    let mut row = booking_json(1, "PENDING", "2025-06-01T08:00:00Z");
    row["totalPrice"] = serde_json::json!(250000);
    mock.enqueue(serde_json::json!([row]));

    let coordinator = coordinator(&mock, QueueKind::CheckIn);
    let snapshot = coordinator.refresh().await.unwrap();

    assert_eq!(
        snapshot.entries[0].booking.total_price,
        rust_decimal::Decimal::from(250_000)
    );
}

#[tokio::test]
async fn sequential_refreshes_never_mix_payloads() {
    let mock = MockHttpClient::new();
    mock.enqueue(serde_json::json!([
        booking_json(1, "PENDING", "2025-06-01T08:00:00Z"),
        booking_json(2, "PENDING", "2025-06-01T09:00:00Z")
    ]));
    mock.enqueue(serde_json::json!([
        booking_json(3, "PENDING", "2025-06-01T10:00:00Z")
    ]));

    let coordinator = coordinator(&mock, QueueKind::CheckIn);

    let first = coordinator.refresh().await.unwrap();
    let second = coordinator.refresh().await.unwrap();

    // a reader holding the first snapshot still sees it whole
    let first_ids: Vec<i64> = first.entries.iter().map(|e| e.booking.booking_id).collect();
    assert_eq!(first_ids, vec![1, 2]);

    let second_ids: Vec<i64> = second
        .entries
        .iter()
        .map(|e| e.booking.booking_id)
        .collect();
    assert_eq!(second_ids, vec![3]);

    assert_eq!(first.version, 1);
    assert_eq!(second.version, 2);
    assert_eq!(coordinator.snapshot().await.version, 2);
}

#[tokio::test]
async fn failed_refresh_keeps_previous_snapshot() {
    let mock = MockHttpClient::new();
    mock.enqueue(serde_json::json!([
        booking_json(1, "PENDING", "2025-06-01T08:00:00Z")
    ]));
    mock.enqueue_error(503, "backend unavailable");

    let coordinator = coordinator(&mock, QueueKind::CheckIn);
    coordinator.refresh().await.unwrap();

    let err = coordinator.refresh().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 503, .. }));

    let snapshot = coordinator.snapshot().await;
    assert_eq!(snapshot.version, 1);
    assert_eq!(snapshot.entries.len(), 1);
}

#[tokio::test]
async fn check_in_entry_acts_then_refreshes() {
    let mock = MockHttpClient::new();
    mock.enqueue(serde_json::json!([
        booking_json(1, "PENDING", "2025-06-01T08:00:00Z")
    ]));

    let coordinator = coordinator(&mock, QueueKind::CheckIn);
    coordinator.refresh().await.unwrap();

    mock.enqueue(booking_json(1, "CONFIRMED", "2025-06-01T08:00:00Z"));
    mock.enqueue(serde_json::json!([])); // post-action refresh

    let updated = coordinator.check_in_entry(1).await.unwrap();
    assert_eq!(updated.status, BookingStatus::Confirmed);

    let calls = mock.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[1].method, "PUT");
    assert_eq!(calls[1].path, "bookings/1/checkin?userId=7");
    assert_eq!(calls[2].path, "staff/bookings/checkin-queue?staffId=7");

    // the row is gone because the snapshot was replaced, not patched
    let snapshot = coordinator.snapshot().await;
    assert_eq!(snapshot.version, 2);
    assert!(snapshot.entries.is_empty());
}

#[tokio::test]
async fn check_in_entry_rejects_stale_denied_row_without_network() {
    let mock = MockHttpClient::new();
    mock.enqueue(serde_json::json!([
        booking_json(1, "DENIED", "2025-06-01T08:00:00Z")
    ]));

    let coordinator = coordinator(&mock, QueueKind::CheckIn);
    coordinator.refresh().await.unwrap();

    let err = coordinator.check_in_entry(1).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidTransition { .. }));
    // only the initial refresh went out
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn deny_entry_rejects_blank_reason_without_network() {
    let mock = MockHttpClient::new();
    mock.enqueue(serde_json::json!([
        booking_json(1, "PENDING", "2025-06-01T08:00:00Z")
    ]));

    let coordinator = coordinator(&mock, QueueKind::CheckIn);
    coordinator.refresh().await.unwrap();

    let err = coordinator.deny_entry(1, "   ").await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn deny_entry_unknown_row_is_a_validation_error() {
    let mock = MockHttpClient::new();
    mock.enqueue(serde_json::json!([]));

    let coordinator = coordinator(&mock, QueueKind::CheckIn);
    coordinator.refresh().await.unwrap();

    let err = coordinator.deny_entry(999, "no-show").await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn return_entry_opens_ticket_for_low_battery() {
    let mock = MockHttpClient::new();
    mock.enqueue(serde_json::json!([
        booking_json(1, "CONFIRMED", "2025-06-01T08:00:00Z")
    ]));

    let coordinator = coordinator(&mock, QueueKind::Return);
    coordinator.refresh().await.unwrap();

    mock.enqueue(booking_json(1, "COMPLETED", "2025-06-01T08:00:00Z"));
    mock.enqueue(serde_json::json!({
        "maintenanceId": 9,
        "vehicleId": 3,
        "issueDescription": "Vehicle needs charging. Battery level at return: 12%",
        "status": "OPEN"
    }));
    mock.enqueue(serde_json::json!([])); // post-action refresh

    let outcome = coordinator.return_entry(1, 12.0).await.unwrap();
    assert_eq!(outcome.booking.status, BookingStatus::Completed);
    assert!(outcome.maintenance.is_some());
    assert_eq!(mock.call_count(), 4);
}

#[tokio::test(start_paused = true)]
async fn auto_refresh_runs_on_interval_until_cancelled() {
    let mock = MockHttpClient::new();
    mock.enqueue(serde_json::json!([
        booking_json(1, "PENDING", "2025-06-01T08:00:00Z")
    ]));
    mock.enqueue(serde_json::json!([]));

    let lifecycle = BookingLifecycle::new(
        RentalApi::new(mock.clone()),
        ClientConfig::default().with_queue_refresh_interval(30),
    );
    let coordinator = Arc::new(StaffQueueCoordinator::new(
        lifecycle,
        QueueKind::CheckIn,
        STAFF_ID,
    ));

    let shutdown = CancellationToken::new();
    let handle = coordinator.spawn_auto_refresh(shutdown.clone());

    tokio::time::sleep(std::time::Duration::from_secs(31)).await;
    assert_eq!(coordinator.snapshot().await.version, 1);

    tokio::time::sleep(std::time::Duration::from_secs(30)).await;
    assert_eq!(coordinator.snapshot().await.version, 2);

    shutdown.cancel();
    handle.await.unwrap();

    // no further refreshes after cancellation
    tokio::time::sleep(std::time::Duration::from_secs(90)).await;
    assert_eq!(coordinator.snapshot().await.version, 2);
    assert_eq!(mock.call_count(), 2);
}
