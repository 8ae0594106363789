//! Client configuration

use rust_decimal::Decimal;
use shared::pricing::DEFAULT_DAILY_RATE;

/// Client configuration for connecting to the rental backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Bearer token for authenticated calls
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Per-day rental rate used for client-side quotes
    pub daily_rate: Decimal,

    /// Staff queue auto-refresh interval in seconds
    pub queue_refresh_interval: u64,

    /// Minimum lead time for a new booking's start, in hours
    pub min_lead_time_hours: i64,
}

impl ClientConfig {
    /// Create a new configuration with deployed defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            daily_rate: DEFAULT_DAILY_RATE,
            queue_refresh_interval: 30,
            min_lead_time_hours: 1,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the per-day rental rate
    pub fn with_daily_rate(mut self, rate: Decimal) -> Self {
        self.daily_rate = rate;
        self
    }

    /// Set the staff queue auto-refresh interval
    pub fn with_queue_refresh_interval(mut self, seconds: u64) -> Self {
        self.queue_refresh_interval = seconds;
        self
    }

    /// Set the minimum booking lead time
    pub fn with_min_lead_time_hours(mut self, hours: i64) -> Self {
        self.min_lead_time_hours = hours;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080/api")
    }
}
