//! Booking Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Booking lifecycle status
///
/// `PENDING → {CONFIRMED, DENIED, CANCELLED}`, `CONFIRMED → {COMPLETED}`.
/// `COMPLETED`, `DENIED` and `CANCELLED` are terminal. Upstream data has
/// been observed with inconsistent casing (`Pending` / `PENDING`), so
/// parsing is case-insensitive; anything unrecognized is preserved as
/// [`BookingStatus::Unknown`] and logged, never silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Denied,
    Cancelled,
    /// Unrecognized status string, kept verbatim for investigation
    Unknown(String),
}

impl BookingStatus {
    /// Parse a loosely-cased wire string into a closed status
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "PENDING" => Self::Pending,
            "CONFIRMED" => Self::Confirmed,
            "COMPLETED" => Self::Completed,
            "DENIED" => Self::Denied,
            "CANCELLED" => Self::Cancelled,
            _ => {
                tracing::warn!(status = trimmed, "Unrecognized booking status");
                Self::Unknown(trimmed.to_string())
            }
        }
    }

    /// Canonical wire representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Completed => "COMPLETED",
            Self::Denied => "DENIED",
            Self::Cancelled => "CANCELLED",
            Self::Unknown(raw) => raw,
        }
    }

    /// Whether no further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Denied | Self::Cancelled)
    }

    /// Whether the lifecycle permits moving to `next` from this status
    ///
    /// `Unknown` permits nothing in either direction; the caller must
    /// refresh and re-present the authoritative state.
    pub fn can_transition_to(&self, next: &BookingStatus) -> bool {
        matches!(
            (self, next),
            (
                Self::Pending,
                Self::Confirmed | Self::Denied | Self::Cancelled
            ) | (Self::Confirmed, Self::Completed)
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BookingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Booking entity (server-owned; the client holds a projection)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: i64,
    #[serde(rename = "bookingStatus", alias = "status")]
    pub status: BookingStatus,
    /// May be absent on some queue projections; such rows sort last
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Total amount in VND (whole units)
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub vehicle_id: i64,
    pub station_id: i64,
    pub user_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deny_reason: Option<String>,
    #[serde(default)]
    pub settled: bool,
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub vehicle_id: i64,
    pub station_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Client-side quote; the backend remains the pricing authority
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

/// Modify booking payload (end time change while PENDING)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingModify {
    pub end_time: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

/// Deny booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenyPayload {
    pub reason: String,
}

/// Return vehicle payload (measured battery at hand-back)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnPayload {
    pub battery_level: f64,
}

/// Settlement summary for a completed booking
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    #[serde(default, with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub late_fee: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub damage_fee: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub energy_fee: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total: Decimal,
}
