//! Failure-risk estimation and risk-component identification.
//!
//! The 30-day risk is a snapshot estimate capped at 0.5, optionally scaled by
//! the degradation trend multiplier. The 180-day risk compounds it by 2.5x.
//! Component risks are independent threshold rules on single readings and
//! ignore history entirely.

use crate::config::defaults::{
    LONG_HORIZON_RISK_FACTOR, MAX_RISK_COMPONENTS, MIN_HISTORY_FOR_TREND, SNAPSHOT_RISK_CAP,
};
use crate::config::CriticalThresholds;
use crate::types::{ComponentId, RiskComponent, RiskType, SensorSample};

use super::trend::degradation_trend;

// ============================================================================
// Horizon risks
// ============================================================================

/// Snapshot 30-day risk from the vibration ratio and the worse of the two
/// temperature ratios. A single snapshot never exceeds 0.5.
pub fn snapshot_risk(vibration_ratio: f64, temp_ratio: f64) -> f64 {
    ((vibration_ratio + temp_ratio) / 2.0).min(SNAPSHOT_RISK_CAP)
}

/// 180-day risk derived from a 30-day risk.
pub fn long_horizon_risk(risk_30d: f64) -> f64 {
    (risk_30d * LONG_HORIZON_RISK_FACTOR).min(1.0)
}

/// `(risk_30d, risk_180d)`, both in [0, 1] with `risk_180d >= risk_30d`.
///
/// The trend multiplier only applies once at least six historical samples
/// are available.
pub fn failure_risks(
    sample: &SensorSample,
    history: Option<&[SensorSample]>,
    thresholds: &CriticalThresholds,
) -> (f64, f64) {
    let vibration_ratio = sample.vibration_rms / thresholds.vibration_critical_mm_s;
    let temp_ratio = (sample.bearing_temp / thresholds.bearing_temp_critical_c)
        .max(sample.gearbox_temp / thresholds.gearbox_temp_critical_c);

    let mut risk_30d = snapshot_risk(vibration_ratio, temp_ratio);

    if let Some(history) = history.filter(|h| h.len() >= MIN_HISTORY_FOR_TREND) {
        risk_30d *= degradation_trend(history);
    }

    let risk_30d = risk_30d.clamp(0.0, 1.0);
    let risk_180d = long_horizon_risk(risk_30d).clamp(0.0, 1.0);
    (risk_30d, risk_180d)
}

// ============================================================================
// Component risks
// ============================================================================

/// Probability for a component rule: `Some(min(1, ratio * factor))` when
/// `ratio` is strictly above `trigger`.
pub fn triggered_probability(ratio: f64, trigger: f64, factor: f64) -> Option<f64> {
    (ratio > trigger).then(|| (ratio * factor).min(1.0))
}

struct ComponentRule {
    component: ComponentId,
    risk_type: RiskType,
    trigger: f64,
    factor: f64,
}

const BEARING_RULE: ComponentRule = ComponentRule {
    component: ComponentId::FrontBearing,
    risk_type: RiskType::HighTemperature,
    trigger: 0.7,
    factor: 0.8,
};

const VIBRATION_RULE: ComponentRule = ComponentRule {
    component: ComponentId::Gearbox,
    risk_type: RiskType::IncreasedVibration,
    trigger: 0.6,
    factor: 0.9,
};

const LUBE_OIL_RULE: ComponentRule = ComponentRule {
    component: ComponentId::LubeOilSystem,
    risk_type: RiskType::ThermalDegradation,
    trigger: 0.75,
    factor: 0.85,
};

/// Components most likely to fail, at most three, descending by probability.
pub fn risk_components(
    sample: &SensorSample,
    thresholds: &CriticalThresholds,
) -> Vec<RiskComponent> {
    let checks = [
        (&BEARING_RULE, sample.bearing_temp / thresholds.bearing_temp_critical_c),
        (&VIBRATION_RULE, sample.vibration_rms / thresholds.vibration_critical_mm_s),
        (&LUBE_OIL_RULE, sample.gearbox_temp / thresholds.gearbox_temp_critical_c),
    ];

    let mut risks: Vec<RiskComponent> = checks
        .into_iter()
        .filter_map(|(rule, ratio)| {
            triggered_probability(ratio, rule.trigger, rule.factor).map(|probability| {
                RiskComponent {
                    component: rule.component,
                    risk_type: rule.risk_type,
                    probability,
                }
            })
        })
        .collect();

    risks.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    risks.truncate(MAX_RISK_COMPONENTS);
    risks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(vibration: f64, bearing: f64, gearbox: f64) -> SensorSample {
        SensorSample {
            vibration_rms: vibration,
            bearing_temp: bearing,
            generator_power: 2.0,
            gearbox_temp: gearbox,
            blade_pitch_angle: 20.0,
            nacelle_wind_speed: 9.0,
            generator_rpm: 1100,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_snapshot_risk_capped() {
        assert_eq!(snapshot_risk(1.2, 1.1), 0.5);
        assert!((snapshot_risk(0.2, 0.4) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_long_horizon_compounds_and_caps() {
        assert!((long_horizon_risk(0.2) - 0.5).abs() < 1e-12);
        assert_eq!(long_horizon_risk(0.5), 1.0);
    }

    #[test]
    fn test_failure_risks_without_history() {
        let thresholds = CriticalThresholds::default();
        let (r30, r180) = failure_risks(&sample(3.0, 45.0, 51.0), None, &thresholds);
        // vib 0.2, temp max(0.5, 0.6) = 0.6
        assert!((r30 - 0.4).abs() < 1e-12, "r30={}", r30);
        assert!((r180 - 1.0).abs() < 1e-12, "r180={}", r180);
    }

    #[test]
    fn test_short_history_leaves_risk_unmultiplied() {
        let thresholds = CriticalThresholds::default();
        let current = sample(3.0, 30.0, 30.0);
        let history: Vec<_> = (0..5).map(|i| sample(1.0 + f64::from(i), 30.0, 30.0)).collect();
        assert_eq!(
            failure_risks(&current, Some(history.as_slice()), &thresholds),
            failure_risks(&current, None, &thresholds)
        );
    }

    #[test]
    fn test_worsening_history_raises_risk() {
        let thresholds = CriticalThresholds::default();
        let current = sample(3.0, 30.0, 30.0);
        let history: Vec<_> = (0..6).map(|i| sample(1.0 + f64::from(i), 30.0, 30.0)).collect();
        let (with, _) = failure_risks(&current, Some(history.as_slice()), &thresholds);
        let (without, _) = failure_risks(&current, None, &thresholds);
        assert!(with > without, "with={} without={}", with, without);
    }

    #[test]
    fn test_recovering_history_discount_floored() {
        let thresholds = CriticalThresholds::default();
        let current = sample(3.0, 30.0, 30.0);
        let history: Vec<_> = (0..8).map(|i| sample(10.0 - f64::from(i), 80.0 - f64::from(i) * 8.0, 30.0)).collect();
        let (with, _) = failure_risks(&current, Some(history.as_slice()), &thresholds);
        let (without, _) = failure_risks(&current, None, &thresholds);
        assert!((with - without * 0.8).abs() < 1e-12, "with={} without={}", with, without);
    }

    #[test]
    fn test_negative_readings_clamp_to_zero() {
        let thresholds = CriticalThresholds::default();
        let (r30, r180) = failure_risks(&sample(-5.0, -40.0, -40.0), None, &thresholds);
        assert_eq!(r30, 0.0);
        assert_eq!(r180, 0.0);
    }

    #[test]
    fn test_triggered_probability_strictly_above() {
        assert_eq!(triggered_probability(0.7, 0.7, 0.8), None);
        assert!((triggered_probability(0.8, 0.7, 0.8).unwrap() - 0.64).abs() < 1e-12);
        assert_eq!(triggered_probability(2.0, 0.7, 0.8), Some(1.0));
    }

    #[test]
    fn test_no_components_for_healthy_reading() {
        let risks = risk_components(&sample(2.5, 45.0, 55.0), &CriticalThresholds::default());
        assert!(risks.is_empty(), "{:?}", risks);
    }

    #[test]
    fn test_all_three_components_sorted() {
        let risks = risk_components(&sample(16.5, 92.0, 88.0), &CriticalThresholds::default());
        assert_eq!(risks.len(), 3);
        // vib 1.1*0.9=0.99, lube 1.035*0.85=0.88, bearing 1.022*0.8=0.818
        assert_eq!(risks[0].component, ComponentId::Gearbox);
        assert_eq!(risks[1].component, ComponentId::LubeOilSystem);
        assert_eq!(risks[2].component, ComponentId::FrontBearing);
        assert!(risks.windows(2).all(|w| w[0].probability >= w[1].probability));
    }

    #[test]
    fn test_single_bearing_component() {
        let risks = risk_components(&sample(2.0, 72.0, 40.0), &CriticalThresholds::default());
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].component, ComponentId::FrontBearing);
        assert_eq!(risks[0].risk_type, RiskType::HighTemperature);
        assert!((risks[0].probability - 0.64).abs() < 1e-12);
    }
}
