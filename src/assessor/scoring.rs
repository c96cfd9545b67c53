//! Health Scoring
//!
//! Deterministic weighted-sum health score (0.0 = critical, 1.0 = excellent).
//!
//! # Scoring Algorithm
//!
//! - 35% Vibration headroom
//! - 25% Bearing temperature headroom
//! - 20% Gearbox oil temperature headroom
//! - 20% Power-output efficiency (output / rated capacity)
//!
//! Headroom sub-scores are floored at 0 before weighting. Power efficiency is
//! not clamped, so strong output can offset one poor sub-score, but the
//! composite is clamped to [0, 1].

use crate::config::defaults::{
    WEIGHT_BEARING_TEMP, WEIGHT_GEARBOX_TEMP, WEIGHT_POWER_EFFICIENCY, WEIGHT_VIBRATION,
};
use crate::config::CriticalThresholds;
use crate::types::SensorSample;

/// Remaining margin below a critical threshold, `max(0, 1 - measured / critical)`.
///
/// A reading at or above the threshold scores 0.
pub fn headroom(measured: f64, critical: f64) -> f64 {
    (1.0 - measured / critical).max(0.0)
}

/// Fraction of nameplate capacity currently produced. Unclamped.
pub fn power_efficiency(power_mw: f64, rated_capacity_mw: f64) -> f64 {
    power_mw / rated_capacity_mw
}

/// Weighted combination of the four sub-scores, clamped to [0, 1].
pub fn composite_health(vibration: f64, bearing: f64, gearbox: f64, power: f64) -> f64 {
    let score = vibration * WEIGHT_VIBRATION
        + bearing * WEIGHT_BEARING_TEMP
        + gearbox * WEIGHT_GEARBOX_TEMP
        + power * WEIGHT_POWER_EFFICIENCY;
    score.clamp(0.0, 1.0)
}

/// Health score for one sample.
pub fn health_score(
    sample: &SensorSample,
    thresholds: &CriticalThresholds,
    rated_capacity_mw: f64,
) -> f64 {
    composite_health(
        headroom(sample.vibration_rms, thresholds.vibration_critical_mm_s),
        headroom(sample.bearing_temp, thresholds.bearing_temp_critical_c),
        headroom(sample.gearbox_temp, thresholds.gearbox_temp_critical_c),
        power_efficiency(sample.generator_power, rated_capacity_mw),
    )
}
