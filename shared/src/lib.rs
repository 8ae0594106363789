//! Shared types for the Volt rental client
//!
//! Data models, status enums and the pure rental rules (pricing,
//! availability, maintenance trigger) used by the client crates.
//! This crate performs no I/O; everything here is deterministic and
//! unit-testable in isolation.

pub mod availability;
pub mod battery;
pub mod models;
pub mod pricing;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use availability::{VehicleFilter, filter_vehicles};
pub use battery::{LOW_BATTERY_THRESHOLD, charge_issue_description, needs_maintenance};
pub use pricing::{DEFAULT_DAILY_RATE, RentalQuote, compute_rental};
pub use response::{ListEnvelope, VehiclePage};
