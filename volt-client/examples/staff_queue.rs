// volt-client/examples/staff_queue.rs
// Staff queue demo: mirrors the check-in queue against a live backend
// and prints each refreshed snapshot until Ctrl-C.

use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use volt_client::{
    BookingLifecycle, ClientConfig, NetworkHttpClient, QueueKind, RentalApi,
    StaffQueueCoordinator,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <staff_id> [token]", args[0]);
        println!("  Example: {} 7", args[0]);
        return Ok(());
    }
    let staff_id: i64 = args[1].parse()?;

    let base_url =
        std::env::var("VOLT_API_URL").unwrap_or_else(|_| "http://localhost:8080/api".to_string());
    let mut config = ClientConfig::new(&base_url);
    if let Some(token) = args.get(2) {
        config = config.with_token(token);
    }

    let http = NetworkHttpClient::new(&config)?;
    let lifecycle = BookingLifecycle::new(RentalApi::new(http), config);
    let coordinator = Arc::new(StaffQueueCoordinator::new(
        lifecycle,
        QueueKind::CheckIn,
        staff_id,
    ));

    // First pull up front so the worklist is populated before the timer
    let snapshot = coordinator.refresh().await?;
    for entry in &snapshot.entries {
        tracing::info!(
            booking_id = entry.booking.booking_id,
            status = %entry.booking.status,
            plate = entry.vehicle_plate.as_deref().unwrap_or("-"),
            "Queue row"
        );
    }

    let shutdown = CancellationToken::new();
    let handle = coordinator.spawn_auto_refresh(shutdown.clone());

    tokio::signal::ctrl_c().await?;
    shutdown.cancel();
    handle.await?;

    let last = coordinator.snapshot().await;
    tracing::info!(version = last.version, rows = last.entries.len(), "Shutting down");
    Ok(())
}
