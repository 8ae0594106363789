//! Response envelope normalization
//!
//! The backend answers list endpoints with either a bare JSON array or
//! an object wrapping the collection under one of several property
//! names. Each API adapter deserializes into these types and converts
//! to a canonical `Vec` immediately, so the ambiguity never leaks past
//! that boundary.

use serde::{Deserialize, Serialize};

use crate::models::Vehicle;

/// A list response that may arrive bare or wrapped
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(
            alias = "data",
            alias = "content",
            alias = "items",
            alias = "bookings",
            alias = "vehicles",
            alias = "stations"
        )]
        items: Vec<T>,
    },
}

impl<T> ListEnvelope<T> {
    /// Canonical ordered sequence, whatever the wire shape was
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { items } => items,
        }
    }
}

/// Paginated vehicle listing
///
/// Newer backend builds paginate; legacy builds answer with a bare
/// array. [`VehiclePage::from_legacy`] folds the latter into a single
/// page so callers only ever see this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePage {
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default = "one")]
    pub total_pages: u32,
}

fn one() -> u32 {
    1
}

impl VehiclePage {
    /// Wrap a legacy bare-array response as a single page
    pub fn from_legacy(vehicles: Vec<Vehicle>) -> Self {
        Self {
            current_page: 0,
            total_items: vehicles.len() as u64,
            total_pages: 1,
            vehicles,
        }
    }
}

/// Either pagination shape for the vehicles endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VehicleListing {
    Paged(VehiclePage),
    Legacy(Vec<Vehicle>),
}

impl VehicleListing {
    pub fn into_page(self) -> VehiclePage {
        match self {
            Self::Paged(page) => page,
            Self::Legacy(vehicles) => VehiclePage::from_legacy(vehicles),
        }
    }
}
