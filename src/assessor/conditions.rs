//! Critical-condition checks.
//!
//! Pure threshold comparisons on the current sample, no smoothing or
//! hysteresis. Each rule fires independently.

use crate::config::CriticalThresholds;
use crate::types::{ConditionAlert, SensorSample};

/// Alerts for every reading strictly above its critical threshold.
pub fn check_conditions(sample: &SensorSample, thresholds: &CriticalThresholds) -> Vec<ConditionAlert> {
    let mut alerts = Vec::new();

    if sample.vibration_rms > thresholds.vibration_critical_mm_s {
        alerts.push(ConditionAlert::VibrationCritical);
    }
    if sample.bearing_temp > thresholds.bearing_temp_critical_c {
        alerts.push(ConditionAlert::BearingTempCritical);
    }
    if sample.gearbox_temp > thresholds.gearbox_temp_critical_c {
        alerts.push(ConditionAlert::GearboxTempElevated);
    }

    alerts
}

/// Alerts rendered as warning strings, e.g. `"CRITICAL: Vibration exceeds safe threshold"`.
pub fn warning_flags(sample: &SensorSample, thresholds: &CriticalThresholds) -> Vec<String> {
    check_conditions(sample, thresholds)
        .iter()
        .map(ToString::to_string)
        .collect()
}
