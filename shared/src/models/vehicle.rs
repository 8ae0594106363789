//! Vehicle Model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Vehicle fleet status
///
/// Same defensive parsing rule as booking statuses: loose casing in,
/// canonical SCREAMING_SNAKE_CASE out, unknowns preserved and logged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VehicleStatus {
    #[default]
    Available,
    Rented,
    Maintenance,
    /// Unrecognized status string, kept verbatim for investigation
    Unknown(String),
}

impl VehicleStatus {
    /// Parse a loosely-cased wire string into a closed status
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "AVAILABLE" => Self::Available,
            "RENTED" => Self::Rented,
            "MAINTENANCE" => Self::Maintenance,
            _ => {
                tracing::warn!(status = trimmed, "Unrecognized vehicle status");
                Self::Unknown(trimmed.to_string())
            }
        }
    }

    /// Canonical wire representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Rented => "RENTED",
            Self::Maintenance => "MAINTENANCE",
            Self::Unknown(raw) => raw,
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for VehicleStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VehicleStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Vehicle entity (server-owned; the client only reads and, via staff
/// actions, submits an updated battery level)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub vehicle_id: i64,
    pub plate_number: String,
    pub status: VehicleStatus,
    /// Battery charge percentage, 0-100
    pub battery_level: f64,
    #[serde(default)]
    pub mileage: f64,
    /// Current station location
    pub station_id: Option<i64>,
    pub model_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_loose_casing() {
        assert_eq!(VehicleStatus::parse("Available"), VehicleStatus::Available);
        assert_eq!(VehicleStatus::parse("AVAILABLE"), VehicleStatus::Available);
        assert_eq!(VehicleStatus::parse("rented"), VehicleStatus::Rented);
        assert_eq!(
            VehicleStatus::parse("  Maintenance "),
            VehicleStatus::Maintenance
        );
    }

    #[test]
    fn test_status_parse_unknown_preserved() {
        let status = VehicleStatus::parse("Charging");
        assert_eq!(status, VehicleStatus::Unknown("Charging".to_string()));
        assert_eq!(status.as_str(), "Charging");
    }

    #[test]
    fn test_vehicle_deserialize() {
        let json = r#"{
            "vehicleId": 11,
            "plateNumber": "59A-123.45",
            "status": "Available",
            "batteryLevel": 87.5,
            "mileage": 1200.0,
            "stationId": 2,
            "modelId": 4
        }"#;
        let vehicle: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.vehicle_id, 11);
        assert_eq!(vehicle.status, VehicleStatus::Available);
        assert_eq!(vehicle.station_id, Some(2));
    }
}
