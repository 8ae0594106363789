//! Volt Client - rental client core
//!
//! The booking lifecycle, availability/pricing guards and staff queue
//! coordination for the Volt EV rental frontend. The remote backend
//! owns persistence, authorization and pricing authority; everything
//! here is a projection reached through the [`HttpClient`] boundary.

pub mod api;
pub mod booking;
pub mod config;
pub mod error;
pub mod http;
pub mod queue;

pub use api::{RentalApi, VehicleQuery};
pub use booking::{BookingLifecycle, CreateRequest, ReturnOutcome};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use queue::{QueueKind, QueueSnapshot, StaffQueueCoordinator, StaffQueueEntry};

// Re-export shared types for convenience
pub use shared::models::{
    Booking, BookingStatus, MaintenanceTicket, Settlement, Station, Vehicle, VehicleStatus,
};
pub use shared::{VehicleFilter, compute_rental, filter_vehicles, needs_maintenance};
