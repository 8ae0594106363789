//! Maintenance trigger rule
//!
//! A vehicle returned with a critically low battery must get a charge
//! ticket opened automatically. The threshold is exclusive on the low
//! side: 20% and above is safe.

/// Battery percentage below which a returned vehicle needs maintenance
pub const LOW_BATTERY_THRESHOLD: f64 = 20.0;

/// Whether a returned battery level requires opening a maintenance
/// ticket. Pure predicate; the caller owns the side effect.
pub fn needs_maintenance(returned_battery_level: f64, threshold_percent: f64) -> bool {
    returned_battery_level < threshold_percent
}

/// Auto-generated issue description referencing the measured level
pub fn charge_issue_description(battery_level: f64) -> String {
    format!("Vehicle needs charging. Battery level at return: {battery_level}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert!(needs_maintenance(19.0, LOW_BATTERY_THRESHOLD));
        assert!(!needs_maintenance(20.0, LOW_BATTERY_THRESHOLD));
        assert!(needs_maintenance(0.0, LOW_BATTERY_THRESHOLD));
        assert!(!needs_maintenance(100.0, LOW_BATTERY_THRESHOLD));
    }

    #[test]
    fn test_custom_threshold() {
        assert!(needs_maintenance(29.9, 30.0));
        assert!(!needs_maintenance(30.0, 30.0));
    }

    #[test]
    fn test_issue_description_references_level() {
        let issue = charge_issue_description(15.0);
        assert!(issue.contains("15"));
    }
}
