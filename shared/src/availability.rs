//! Vehicle availability filtering
//!
//! A stable filter: the relative order of the input is preserved and
//! no re-sort is applied. Any ordering (e.g. by battery level) is a
//! separate, explicit step layered by the caller so the two concerns
//! stay independently testable.

use crate::models::{Vehicle, VehicleStatus};

/// Availability constraints for the booking flow
#[derive(Debug, Clone)]
pub struct VehicleFilter {
    /// Equality match against the vehicle's current station
    pub station_id: Option<i64>,
    /// Minimum battery charge percentage (inclusive)
    pub min_battery_percent: Option<f64>,
    /// Status allow-list; membership is checked on the already
    /// normalized status, so loose wire casing is handled upstream
    pub statuses_allowed: Vec<VehicleStatus>,
}

impl Default for VehicleFilter {
    fn default() -> Self {
        Self {
            station_id: None,
            min_battery_percent: None,
            statuses_allowed: vec![VehicleStatus::Available],
        }
    }
}

impl VehicleFilter {
    /// Rentable vehicles at one station
    pub fn for_station(station_id: i64) -> Self {
        Self {
            station_id: Some(station_id),
            ..Self::default()
        }
    }

    pub fn with_min_battery(mut self, percent: f64) -> Self {
        self.min_battery_percent = Some(percent);
        self
    }

    /// Whether a single vehicle satisfies every supplied constraint
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        if !self.statuses_allowed.contains(&vehicle.status) {
            return false;
        }
        if let Some(station_id) = self.station_id
            && vehicle.station_id != Some(station_id)
        {
            return false;
        }
        if let Some(min) = self.min_battery_percent
            && vehicle.battery_level < min
        {
            return false;
        }
        true
    }
}

/// Filter a vehicle list down to the eligible subset, preserving order
pub fn filter_vehicles(vehicles: &[Vehicle], filter: &VehicleFilter) -> Vec<Vehicle> {
    vehicles
        .iter()
        .filter(|v| filter.matches(v))
        .cloned()
        .collect()
}
