//! Data models
//!
//! Wire entities shared between the client crates. All entities are
//! owned by the remote backend; the client holds transient projections
//! with no authority. All IDs are server-assigned `i64`.

pub mod booking;
pub mod maintenance;
pub mod station;
pub mod vehicle;

// Re-exports
pub use booking::*;
pub use maintenance::*;
pub use station::*;
pub use vehicle::*;
