//! Typed backend API adapter
//!
//! One method per remote collaborator. Every method owns the envelope
//! normalization for its endpoint and hands canonical `shared` types
//! to the rest of the client; the backend's duck-typed response shapes
//! never leak past this module.

use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::queue::{QueueKind, StaffQueueEntry};
use shared::models::{
    Booking, BookingCreate, BookingModify, DenyPayload, MaintenanceCreate, MaintenanceTicket,
    ReturnPayload, Settlement, Station, Vehicle,
};
use shared::response::{ListEnvelope, VehicleListing, VehiclePage};

/// Optional filters for the paginated vehicle listing
#[derive(Debug, Clone, Default)]
pub struct VehicleQuery {
    pub model_id: Option<i64>,
    pub min_battery: Option<f64>,
    pub status: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl VehicleQuery {
    fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(model_id) = self.model_id {
            params.push(format!("modelId={model_id}"));
        }
        if let Some(min_battery) = self.min_battery {
            params.push(format!("minBattery={min_battery}"));
        }
        if let Some(status) = &self.status {
            params.push(format!("status={status}"));
        }
        if let Some(page) = self.page {
            params.push(format!("page={page}"));
        }
        if let Some(size) = self.size {
            params.push(format!("size={size}"));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Typed adapter over the rental backend
#[derive(Debug, Clone)]
pub struct RentalApi<C: HttpClient> {
    http: C,
}

impl<C: HttpClient> RentalApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    // ==================== Vehicles and stations ====================

    /// Paginated vehicle listing; legacy bare-array responses fold
    /// into a single page.
    pub async fn list_vehicles(&self, query: &VehicleQuery) -> ClientResult<VehiclePage> {
        let listing: VehicleListing = self
            .http
            .get(&format!("vehicles{}", query.to_query_string()))
            .await?;
        Ok(listing.into_page())
    }

    /// Vehicles the backend considers rentable at one station
    pub async fn list_available_vehicles(&self, station_id: i64) -> ClientResult<Vec<Vehicle>> {
        let envelope: ListEnvelope<Vehicle> = self
            .http
            .get(&format!("vehicles/available?stationId={station_id}"))
            .await?;
        Ok(envelope.into_vec())
    }

    pub async fn list_stations(&self) -> ClientResult<Vec<Station>> {
        let envelope: ListEnvelope<Station> = self.http.get("stations").await?;
        Ok(envelope.into_vec())
    }

    /// Fetch stations and one station's available vehicles in parallel
    pub async fn fetch_booking_context(
        &self,
        station_id: i64,
    ) -> ClientResult<(Vec<Station>, Vec<Vehicle>)> {
        tokio::try_join!(
            self.list_stations(),
            self.list_available_vehicles(station_id)
        )
    }

    // ==================== Bookings ====================

    pub async fn get_booking(&self, id: i64) -> ClientResult<Booking> {
        self.http.get(&format!("bookings/{id}")).await
    }

    pub async fn create_booking(
        &self,
        payload: &BookingCreate,
        user_id: i64,
    ) -> ClientResult<Booking> {
        self.http
            .post(&format!("bookings?userId={user_id}"), payload)
            .await
    }

    pub async fn modify_booking(
        &self,
        id: i64,
        payload: &BookingModify,
        actor_id: i64,
    ) -> ClientResult<Booking> {
        self.http
            .put(&format!("bookings/{id}?userId={actor_id}"), payload)
            .await
    }

    pub async fn cancel_booking(&self, id: i64, user_id: i64) -> ClientResult<Booking> {
        self.http
            .delete(&format!("bookings/{id}?userId={user_id}"))
            .await
    }

    pub async fn check_in(&self, id: i64, staff_id: i64) -> ClientResult<Booking> {
        self.http
            .put_empty(&format!("bookings/{id}/checkin?userId={staff_id}"))
            .await
    }

    pub async fn deny_booking(
        &self,
        id: i64,
        staff_id: i64,
        reason: &str,
    ) -> ClientResult<Booking> {
        let payload = DenyPayload {
            reason: reason.to_string(),
        };
        self.http
            .put(&format!("bookings/{id}/deny?staffId={staff_id}"), &payload)
            .await
    }

    pub async fn return_vehicle(
        &self,
        id: i64,
        staff_id: i64,
        payload: &ReturnPayload,
    ) -> ClientResult<Booking> {
        self.http
            .put(&format!("bookings/{id}/return?userId={staff_id}"), payload)
            .await
    }

    pub async fn settle_booking(&self, id: i64, user_id: i64) -> ClientResult<Settlement> {
        self.http
            .post_empty(&format!("bookings/{id}/settlement?userId={user_id}"))
            .await
    }

    // ==================== Staff queue ====================

    pub async fn list_staff_queue(
        &self,
        kind: QueueKind,
        staff_id: i64,
    ) -> ClientResult<Vec<StaffQueueEntry>> {
        let envelope: ListEnvelope<StaffQueueEntry> = self
            .http
            .get(&format!(
                "staff/bookings/{}?staffId={staff_id}",
                kind.endpoint()
            ))
            .await?;
        Ok(envelope.into_vec())
    }

    // ==================== Maintenance ====================

    pub async fn create_maintenance(
        &self,
        staff_id: i64,
        payload: &MaintenanceCreate,
    ) -> ClientResult<MaintenanceTicket> {
        self.http
            .post(&format!("staff/maintenance?staffId={staff_id}"), payload)
            .await
    }
}
