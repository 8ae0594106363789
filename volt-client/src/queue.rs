//! Staff queue coordinator
//!
//! Keeps a locally cached, periodically refreshed worklist of bookings
//! awaiting staff action at their station. The cache is the only
//! mutable shared state in the client core and is only ever replaced
//! wholesale: readers hold an `Arc` to a complete snapshot and can
//! never observe a half-updated list. Row actions go through the
//! booking lifecycle and then trigger an out-of-band refresh instead of
//! patching the row locally, so server-side recomputation of dependent
//! fields is never shadowed.

use crate::booking::BookingLifecycle;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::Booking;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Which staff worklist this queue mirrors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueKind {
    /// Pending bookings awaiting check-in (denied rows stay visible
    /// for operator review until the backend drops them)
    CheckIn,
    /// Confirmed bookings awaiting vehicle return
    Return,
}

impl QueueKind {
    /// Backend endpoint segment for this queue
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::CheckIn => "checkin-queue",
            Self::Return => "return-queue",
        }
    }
}

impl std::fmt::Display for QueueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CheckIn => f.write_str("check-in"),
            Self::Return => f.write_str("return"),
        }
    }
}

/// One row of the staff worklist: the booking plus display summaries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffQueueEntry {
    #[serde(flatten)]
    pub booking: Booking,
    #[serde(default, alias = "plateNumber")]
    pub vehicle_plate: Option<String>,
    #[serde(default, alias = "userName")]
    pub customer_name: Option<String>,
}

/// An immutable, versioned view of the queue at one refresh
#[derive(Debug, Clone)]
pub struct QueueSnapshot {
    pub kind: QueueKind,
    pub entries: Vec<StaffQueueEntry>,
    /// Monotonic refresh counter; bumps exactly once per replace
    pub version: u64,
    pub refreshed_at: DateTime<Utc>,
}

/// Sort by start time ascending, entries without a start time last.
/// Stable, so rows that tie keep their backend order.
fn sort_entries(mut entries: Vec<StaffQueueEntry>) -> Vec<StaffQueueEntry> {
    entries.sort_by_key(|e| {
        e.booking
            .start_time
            .map(|t| t.timestamp_millis())
            .unwrap_or(i64::MAX)
    });
    entries
}

/// Coordinator for one staff member's queue of one kind
pub struct StaffQueueCoordinator<C: HttpClient> {
    lifecycle: BookingLifecycle<C>,
    kind: QueueKind,
    staff_id: i64,
    current: RwLock<Arc<QueueSnapshot>>,
}

impl<C: HttpClient> StaffQueueCoordinator<C> {
    pub fn new(lifecycle: BookingLifecycle<C>, kind: QueueKind, staff_id: i64) -> Self {
        let empty = Arc::new(QueueSnapshot {
            kind,
            entries: Vec::new(),
            version: 0,
            refreshed_at: Utc::now(),
        });
        Self {
            lifecycle,
            kind,
            staff_id,
            current: RwLock::new(empty),
        }
    }

    pub fn kind(&self) -> QueueKind {
        self.kind
    }

    /// Current complete snapshot (old or new, never a mix)
    pub async fn snapshot(&self) -> Arc<QueueSnapshot> {
        self.current.read().await.clone()
    }

    /// Pull the full list from the backend, normalize and sort it, and
    /// replace the cached snapshot atomically.
    ///
    /// Overlapping refreshes (manual on top of automatic) each perform
    /// their own complete replace, so the coordinator is idempotent
    /// under concurrency; a failed pull leaves the previous snapshot in
    /// place.
    pub async fn refresh(&self) -> ClientResult<Arc<QueueSnapshot>> {
        let entries = self
            .lifecycle
            .api()
            .list_staff_queue(self.kind, self.staff_id)
            .await?;
        let entries = sort_entries(entries);

        let mut guard = self.current.write().await;
        let snapshot = Arc::new(QueueSnapshot {
            kind: self.kind,
            entries,
            version: guard.version + 1,
            refreshed_at: Utc::now(),
        });
        *guard = snapshot.clone();
        tracing::debug!(
            kind = %self.kind,
            version = snapshot.version,
            rows = snapshot.entries.len(),
            "Staff queue refreshed"
        );
        Ok(snapshot)
    }

    fn find_booking(&self, snapshot: &QueueSnapshot, booking_id: i64) -> ClientResult<Booking> {
        snapshot
            .entries
            .iter()
            .find(|e| e.booking.booking_id == booking_id)
            .map(|e| e.booking.clone())
            .ok_or_else(|| {
                ClientError::Validation(format!(
                    "Booking {booking_id} is not in the {} queue",
                    self.kind
                ))
            })
    }

    /// Refresh after a successful row action; a refresh failure does
    /// not fail the action, the stale snapshot just survives until the
    /// next cycle.
    async fn refresh_after_action(&self) {
        if let Err(e) = self.refresh().await {
            tracing::warn!(kind = %self.kind, error = %e, "Post-action queue refresh failed");
        }
    }

    /// Check in a queue row
    pub async fn check_in_entry(&self, booking_id: i64) -> ClientResult<Booking> {
        let snapshot = self.snapshot().await;
        let booking = self.find_booking(&snapshot, booking_id)?;
        let updated = self.lifecycle.check_in(&booking, self.staff_id).await?;
        self.refresh_after_action().await;
        Ok(updated)
    }

    /// Deny a queue row with a mandatory reason
    pub async fn deny_entry(&self, booking_id: i64, reason: &str) -> ClientResult<Booking> {
        let snapshot = self.snapshot().await;
        let booking = self.find_booking(&snapshot, booking_id)?;
        let updated = self.lifecycle.deny(&booking, self.staff_id, reason).await?;
        self.refresh_after_action().await;
        Ok(updated)
    }

    /// Record a vehicle return against a queue row
    pub async fn return_entry(
        &self,
        booking_id: i64,
        returned_battery_level: f64,
    ) -> ClientResult<crate::booking::ReturnOutcome> {
        let snapshot = self.snapshot().await;
        let booking = self.find_booking(&snapshot, booking_id)?;
        let outcome = self
            .lifecycle
            .return_vehicle(&booking, self.staff_id, returned_battery_level)
            .await?;
        self.refresh_after_action().await;
        Ok(outcome)
    }
}

impl<C: HttpClient + 'static> StaffQueueCoordinator<C> {
    /// Spawn the fixed-interval auto-refresh task
    ///
    /// Runs independently of manual refreshes; both converge on the
    /// same atomic snapshot replace. Failures are logged and the task
    /// keeps its cadence.
    pub fn spawn_auto_refresh(self: &Arc<Self>, shutdown: CancellationToken) -> JoinHandle<()> {
        let coordinator = Arc::clone(self);
        tokio::spawn(async move {
            let period =
                std::time::Duration::from_secs(coordinator.lifecycle.config().queue_refresh_interval);
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // skip immediate tick
            tracing::info!(kind = %coordinator.kind, ?period, "Staff queue auto-refresh started");
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        tracing::info!(kind = %coordinator.kind, "Staff queue auto-refresh stopping");
                        break;
                    }
                    _ = interval.tick() => {
                        if let Err(e) = coordinator.refresh().await {
                            tracing::warn!(kind = %coordinator.kind, error = %e, "Staff queue auto-refresh failed");
                        }
                    }
                }
            }
        })
    }
}
