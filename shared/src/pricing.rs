//! Rental pricing
//!
//! Duration is billed in whole days, rounded up. The deployed rate is a
//! single flat constant per day; every entry point takes the rate as a
//! parameter so a per-model or per-station rate becomes a configuration
//! change, not a calculation change.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Deployed flat rate: 250,000 VND per day
pub const DEFAULT_DAILY_RATE: Decimal = Decimal::from_parts(250_000, 0, 0, false, 0);

const SECONDS_PER_DAY: i64 = 86_400;

/// Client-side rental quote
///
/// A zero quote means "not yet computable" (invalid or empty range);
/// callers must block submission on it rather than surface it as a
/// real price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalQuote {
    pub duration_days: i64,
    pub total_price: Decimal,
}

impl RentalQuote {
    /// Canonical zero quote for a non-positive time range
    pub const ZERO: RentalQuote = RentalQuote {
        duration_days: 0,
        total_price: Decimal::ZERO,
    };

    pub fn is_zero(&self) -> bool {
        self.duration_days == 0
    }
}

/// Compute a rental quote from a time window and a per-day rate
///
/// Duration is `ceil((end - start) / 1 day)`, at least 1 for any
/// positive difference. `end <= start` yields [`RentalQuote::ZERO`]
/// and never errors.
pub fn compute_rental(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    rate_per_day: Decimal,
) -> RentalQuote {
    let span = end - start;
    if span <= chrono::Duration::zero() {
        return RentalQuote::ZERO;
    }
    let secs = span.num_seconds();
    let duration_days = ((secs + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY).max(1);
    RentalQuote {
        duration_days,
        total_price: Decimal::from(duration_days) * rate_per_day,
    }
}
