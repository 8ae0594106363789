//! Booking lifecycle
//!
//! The explicit state machine behind every booking action. The UI may
//! disable buttons, but staleness and concurrent staff edits mean the
//! machine must re-validate the cached status itself before any network
//! call, and the backend's current-state check stays authoritative for
//! anything the cache missed. All transitions are confirm-after-success:
//! nothing local mutates until the backend has accepted the request.

use crate::api::RentalApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use chrono::{DateTime, Duration, Utc};
use shared::availability::{VehicleFilter, filter_vehicles};
use shared::battery::{LOW_BATTERY_THRESHOLD, charge_issue_description, needs_maintenance};
use shared::models::{
    Booking, BookingCreate, BookingModify, BookingStatus, MaintenanceCreate, MaintenanceTicket,
    ReturnPayload, Settlement,
};
use shared::pricing::compute_rental;

/// New booking request
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub vehicle_id: i64,
    pub station_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Result of a vehicle return
///
/// The return itself either succeeded or errored; a failed automatic
/// maintenance ticket does NOT roll it back and surfaces here as a
/// warning instead.
#[derive(Debug)]
pub struct ReturnOutcome {
    /// The completed booking as persisted by the backend
    pub booking: Booking,
    /// Ticket opened by the low-battery trigger, when one was needed
    /// and creation succeeded
    pub maintenance: Option<MaintenanceTicket>,
    /// Non-fatal problem to surface to the operator
    pub warning: Option<String>,
}

/// Booking state machine over the remote API
#[derive(Debug, Clone)]
pub struct BookingLifecycle<C: HttpClient> {
    api: RentalApi<C>,
    config: ClientConfig,
}

impl<C: HttpClient> BookingLifecycle<C> {
    pub fn new(api: RentalApi<C>, config: ClientConfig) -> Self {
        Self { api, config }
    }

    pub fn api(&self) -> &RentalApi<C> {
        &self.api
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Guard a transition against the cached status, without touching
    /// the network when the cache already rules it out.
    fn require_status(
        booking: &Booking,
        expected: BookingStatus,
        action: &'static str,
    ) -> ClientResult<()> {
        if booking.status != expected {
            return Err(ClientError::InvalidTransition {
                action,
                status: booking.status.clone(),
            });
        }
        Ok(())
    }

    /// Create a booking (customer action, lands in `PENDING`)
    ///
    /// Client-side guards: positive time range, the configured lead
    /// time, and membership of the vehicle in the station's eligible
    /// set. These are usability guards, not a security boundary; the
    /// backend re-checks everything and may still reject (vehicle taken
    /// concurrently).
    pub async fn create(&self, request: &CreateRequest, user_id: i64) -> ClientResult<Booking> {
        if request.end_time <= request.start_time {
            return Err(ClientError::Validation(
                "End time must be after start time".into(),
            ));
        }
        let earliest_start = Utc::now() + Duration::hours(self.config.min_lead_time_hours);
        if request.start_time < earliest_start {
            return Err(ClientError::Validation(format!(
                "Start time must be at least {} hour(s) in the future",
                self.config.min_lead_time_hours
            )));
        }

        let quote = compute_rental(request.start_time, request.end_time, self.config.daily_rate);
        if quote.is_zero() {
            return Err(ClientError::Validation(
                "Rental duration is not yet computable".into(),
            ));
        }

        let vehicles = self.api.list_available_vehicles(request.station_id).await?;
        let eligible = filter_vehicles(&vehicles, &VehicleFilter::for_station(request.station_id));
        if !eligible.iter().any(|v| v.vehicle_id == request.vehicle_id) {
            return Err(ClientError::Validation(format!(
                "Vehicle {} is not available at station {}",
                request.vehicle_id, request.station_id
            )));
        }

        let payload = BookingCreate {
            vehicle_id: request.vehicle_id,
            station_id: request.station_id,
            start_time: request.start_time,
            end_time: request.end_time,
            total_price: quote.total_price,
        };
        let booking = self.api.create_booking(&payload, user_id).await?;
        tracing::info!(
            booking_id = booking.booking_id,
            duration_days = quote.duration_days,
            total_price = %quote.total_price,
            "Booking created"
        );
        Ok(booking)
    }

    /// Staff confirms the customer has taken the vehicle
    /// (`PENDING → CONFIRMED`; the vehicle becomes `RENTED` on the
    /// backend, observed, not owned, by this client)
    pub async fn check_in(&self, booking: &Booking, staff_id: i64) -> ClientResult<Booking> {
        Self::require_status(booking, BookingStatus::Pending, "check in")?;
        let updated = self.api.check_in(booking.booking_id, staff_id).await?;
        tracing::info!(booking_id = updated.booking_id, "Booking checked in");
        Ok(updated)
    }

    /// Staff rejects a pending booking; a non-blank reason is required
    pub async fn deny(
        &self,
        booking: &Booking,
        staff_id: i64,
        reason: &str,
    ) -> ClientResult<Booking> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ClientError::Validation("Deny reason is required".into()));
        }
        Self::require_status(booking, BookingStatus::Pending, "deny")?;
        let updated = self
            .api
            .deny_booking(booking.booking_id, staff_id, reason)
            .await?;
        tracing::info!(booking_id = updated.booking_id, reason, "Booking denied");
        Ok(updated)
    }

    /// Customer cancels a pending booking (terminal)
    pub async fn cancel(&self, booking: &Booking, user_id: i64) -> ClientResult<Booking> {
        Self::require_status(booking, BookingStatus::Pending, "cancel")?;
        let updated = self.api.cancel_booking(booking.booking_id, user_id).await?;
        tracing::info!(booking_id = updated.booking_id, "Booking cancelled");
        Ok(updated)
    }

    /// Change the end time of a pending booking; the price is
    /// recomputed from the original start time
    pub async fn modify(
        &self,
        booking: &Booking,
        new_end_time: DateTime<Utc>,
        actor_id: i64,
    ) -> ClientResult<Booking> {
        Self::require_status(booking, BookingStatus::Pending, "modify")?;
        let start_time = booking.start_time.ok_or_else(|| {
            ClientError::Validation("Booking has no start time to price from".into())
        })?;
        if new_end_time <= start_time {
            return Err(ClientError::Validation(
                "New end time must be after the start time".into(),
            ));
        }
        let quote = compute_rental(start_time, new_end_time, self.config.daily_rate);
        let payload = BookingModify {
            end_time: new_end_time,
            total_price: quote.total_price,
        };
        self.api
            .modify_booking(booking.booking_id, &payload, actor_id)
            .await
    }

    /// Staff records the vehicle hand-back (`CONFIRMED → COMPLETED`)
    ///
    /// When the returned battery level is below the maintenance
    /// threshold, a charge ticket is opened as a best-effort side call:
    /// its failure never rolls back the completed return and is
    /// surfaced as [`ReturnOutcome::warning`].
    pub async fn return_vehicle(
        &self,
        booking: &Booking,
        staff_id: i64,
        returned_battery_level: f64,
    ) -> ClientResult<ReturnOutcome> {
        if !(0.0..=100.0).contains(&returned_battery_level) {
            return Err(ClientError::Validation(
                "Battery level must be between 0 and 100".into(),
            ));
        }
        Self::require_status(booking, BookingStatus::Confirmed, "return")?;

        let payload = ReturnPayload {
            battery_level: returned_battery_level,
        };
        let updated = self
            .api
            .return_vehicle(booking.booking_id, staff_id, &payload)
            .await?;
        tracing::info!(
            booking_id = updated.booking_id,
            battery = returned_battery_level,
            "Vehicle returned"
        );

        if !needs_maintenance(returned_battery_level, LOW_BATTERY_THRESHOLD) {
            return Ok(ReturnOutcome {
                booking: updated,
                maintenance: None,
                warning: None,
            });
        }

        let ticket = MaintenanceCreate {
            vehicle_id: booking.vehicle_id,
            issue_description: charge_issue_description(returned_battery_level),
            scheduled_at: None,
        };
        match self.api.create_maintenance(staff_id, &ticket).await {
            Ok(maintenance) => Ok(ReturnOutcome {
                booking: updated,
                maintenance: Some(maintenance),
                warning: None,
            }),
            Err(e) => {
                tracing::warn!(
                    booking_id = updated.booking_id,
                    vehicle_id = booking.vehicle_id,
                    error = %e,
                    "Automatic maintenance ticket failed after return"
                );
                Ok(ReturnOutcome {
                    booking: updated,
                    maintenance: None,
                    warning: Some(format!(
                        "Vehicle returned, but the maintenance ticket could not be opened: {e}"
                    )),
                })
            }
        }
    }

    /// Settle a completed booking
    pub async fn settle(&self, booking: &Booking, user_id: i64) -> ClientResult<Settlement> {
        Self::require_status(booking, BookingStatus::Completed, "settle")?;
        if booking.settled {
            return Err(ClientError::Validation(
                "Booking has already been settled".into(),
            ));
        }
        self.api.settle_booking(booking.booking_id, user_id).await
    }
}
