//! Degradation trend and prediction confidence from sensor history.
//!
//! History is always ordered oldest to newest. Neither function retains or
//! mutates it.

use statrs::statistics::Statistics;

use crate::config::defaults::{
    BASE_CONFIDENCE, CONFIDENCE_MAX, CONFIDENCE_MIN, HISTORY_CONFIDENCE_GAIN,
    HISTORY_SATURATION_POINTS, MIN_HISTORY_FOR_STABILITY, STABILITY_WINDOW, TREND_EPSILON,
    TREND_MULTIPLIER_MAX, TREND_MULTIPLIER_MIN, UNSTABLE_READINGS_PENALTY,
    VIBRATION_VARIANCE_LIMIT,
};
use crate::types::SensorSample;

/// Relative change from `oldest` to `newest`, guarded against a zero baseline.
pub fn relative_change(oldest: f64, newest: f64) -> f64 {
    (newest - oldest) / (oldest + TREND_EPSILON)
}

/// Risk multiplier in [0.8, 2.0] from the oldest vs newest sample.
///
/// Worsening vibration and bearing temperature push it above 1.0, recovery
/// pulls it below. Fewer than two samples yields exactly 1.0.
pub fn degradation_trend(history: &[SensorSample]) -> f64 {
    let [oldest, .., newest] = history else {
        return 1.0;
    };

    let vibration_trend = relative_change(oldest.vibration_rms, newest.vibration_rms);
    let bearing_trend = relative_change(oldest.bearing_temp, newest.bearing_temp);

    trend_multiplier(vibration_trend, bearing_trend)
}

/// `1 + (vibration_trend + bearing_trend) / 4`, clamped to [0.8, 2.0].
pub fn trend_multiplier(vibration_trend: f64, bearing_trend: f64) -> f64 {
    (1.0 + (vibration_trend + bearing_trend) / 4.0).clamp(TREND_MULTIPLIER_MIN, TREND_MULTIPLIER_MAX)
}

/// Population variance of vibration RMS over the most recent samples.
pub fn recent_vibration_variance(history: &[SensorSample]) -> f64 {
    let start = history.len().saturating_sub(STABILITY_WINDOW);
    history[start..]
        .iter()
        .map(|s| s.vibration_rms)
        .population_variance()
}

/// Confidence in [0.5, 1.0].
///
/// Starts at 0.7, gains up to 0.2 as history grows to 100 points, and loses
/// 0.1 when more than five samples are available and the last ten vibration
/// readings are noisy (variance > 5.0).
#[allow(clippy::cast_precision_loss)]
pub fn confidence(history: Option<&[SensorSample]>) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if let Some(history) = history {
        let points = history.len().min(HISTORY_SATURATION_POINTS);
        confidence += (points as f64 / HISTORY_SATURATION_POINTS as f64) * HISTORY_CONFIDENCE_GAIN;

        if history.len() > MIN_HISTORY_FOR_STABILITY
            && recent_vibration_variance(history) > VIBRATION_VARIANCE_LIMIT
        {
            confidence -= UNSTABLE_READINGS_PENALTY;
        }
    }

    confidence.clamp(CONFIDENCE_MIN, CONFIDENCE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(vibration: f64, bearing: f64) -> SensorSample {
        SensorSample {
            vibration_rms: vibration,
            bearing_temp: bearing,
            generator_power: 2.5,
            gearbox_temp: 55.0,
            blade_pitch_angle: 12.0,
            nacelle_wind_speed: 11.0,
            generator_rpm: 1350,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_trend_identity_for_short_history() {
        assert_eq!(degradation_trend(&[]), 1.0);
        assert_eq!(degradation_trend(&[sample(4.0, 60.0)]), 1.0);
    }

    #[test]
    fn test_trend_identity_for_constant_history() {
        let history = vec![sample(4.0, 60.0); 12];
        assert_eq!(degradation_trend(&history), 1.0);
    }

    #[test]
    fn test_trend_zero_baseline_does_not_divide_by_zero() {
        let history = [sample(0.0, 0.0), sample(0.0, 0.0)];
        assert_eq!(degradation_trend(&history), 1.0);

        let history = [sample(0.0, 50.0), sample(1.0, 50.0)];
        assert_eq!(degradation_trend(&history), TREND_MULTIPLIER_MAX);
    }

    #[test]
    fn test_trend_uses_endpoints_only() {
        let history = [sample(2.0, 40.0), sample(20.0, 95.0), sample(3.0, 40.0)];
        // vib +50%, bearing 0% -> 1 + 0.5/4
        let multiplier = degradation_trend(&history);
        assert!((multiplier - 1.125).abs() < 1e-6, "Multiplier: {}", multiplier);
    }

    #[test]
    fn test_trend_multiplier_bounds() {
        assert_eq!(trend_multiplier(-3.0, -3.0), TREND_MULTIPLIER_MIN);
        assert_eq!(trend_multiplier(5.0, 5.0), TREND_MULTIPLIER_MAX);
        assert!((trend_multiplier(0.4, 0.0) - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_confidence_without_history() {
        assert!((confidence(None) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_confidence_empty_history_has_no_boost() {
        assert!((confidence(Some(&[][..])) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_confidence_grows_with_stable_history() {
        let history = vec![sample(3.0, 50.0); 50];
        assert!((confidence(Some(history.as_slice())) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_confidence_saturates_at_100_points() {
        let full = vec![sample(3.0, 50.0); 100];
        let more = vec![sample(3.0, 50.0); 400];
        assert!((confidence(Some(full.as_slice())) - 0.9).abs() < 1e-12);
        assert_eq!(confidence(Some(full.as_slice())), confidence(Some(more.as_slice())));
    }

    #[test]
    fn test_noisy_recent_readings_reduce_confidence() {
        let mut history = vec![sample(3.0, 50.0); 40];
        history.extend((0..10).map(|i| sample(if i % 2 == 0 { 1.0 } else { 8.0 }, 50.0)));
        // 0.7 + 0.5 * 0.2 - 0.1
        assert!((confidence(Some(history.as_slice())) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_noise_outside_recent_window_ignored() {
        let mut history: Vec<_> = (0..10).map(|i| sample(if i % 2 == 0 { 1.0 } else { 8.0 }, 50.0)).collect();
        history.extend(vec![sample(3.0, 50.0); 10]);
        assert!((confidence(Some(history.as_slice())) - 0.74).abs() < 1e-12);
    }

    #[test]
    fn test_variance_needs_more_than_five_samples() {
        let history: Vec<_> = (0..5).map(|i| sample(if i % 2 == 0 { 0.0 } else { 20.0 }, 50.0)).collect();
        assert!((confidence(Some(history.as_slice())) - 0.71).abs() < 1e-12);
    }

    #[test]
    fn test_recent_variance_is_population_variance() {
        let history = [sample(1.0, 50.0), sample(3.0, 50.0)];
        assert!((recent_vibration_variance(&history) - 1.0).abs() < 1e-12);
    }
}
