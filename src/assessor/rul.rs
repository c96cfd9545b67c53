//! Remaining Useful Life estimation.
//!
//! Tiered, not continuous: the health score selects a maintenance urgency
//! band and each band grants a fixed fraction of the mean component
//! baseline lifetime. The result never drops below one week.

use statrs::statistics::Statistics;

use crate::config::defaults::MIN_RUL_HOURS;
use crate::config::ComponentBaselines;
use crate::types::MaintenanceUrgency;

/// Arithmetic mean of all configured component lifetimes (hours).
pub fn mean_baseline_hours(baselines: &ComponentBaselines) -> f64 {
    baselines.values().mean()
}

/// RUL in whole hours for a health score, floored at 168.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rul_hours(health_score: f64, mean_baseline_hours: f64) -> u32 {
    let fraction = MaintenanceUrgency::from_health_score(health_score).baseline_fraction();
    // `as` saturates: negative or NaN products become 0 and hit the floor
    let hours = (mean_baseline_hours * fraction) as u32;
    hours.max(MIN_RUL_HOURS)
}
