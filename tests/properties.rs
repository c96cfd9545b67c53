//! Property tests for assessor output ranges and orderings.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use turbine_rul::{Assessor, SensorSample};

fn sample(vibration: f64, bearing: f64, power: f64, gearbox: f64) -> SensorSample {
    SensorSample {
        vibration_rms: vibration,
        bearing_temp: bearing,
        generator_power: power,
        gearbox_temp: gearbox,
        blade_pitch_angle: 5.0,
        nacelle_wind_speed: 9.0,
        generator_rpm: 1300,
        timestamp: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn arb_sample() -> impl Strategy<Value = SensorSample> {
    (0.0f64..40.0, -20.0f64..150.0, 0.0f64..4.5, -20.0f64..140.0)
        .prop_map(|(v, b, p, g)| sample(v, b, p, g))
}

proptest! {
    #[test]
    fn outputs_stay_in_range(
        current in arb_sample(),
        history in prop::option::of(prop::collection::vec(arb_sample(), 0..40)),
    ) {
        let result = Assessor::default().predict(&current, history.as_deref()).unwrap();

        prop_assert!((0.0..=1.0).contains(&result.health_score));
        prop_assert!((0.0..=1.0).contains(&result.failure_risk_30d));
        prop_assert!((0.0..=1.0).contains(&result.failure_risk_180d));
        prop_assert!(result.failure_risk_180d >= result.failure_risk_30d);
        prop_assert!((0.5..=1.0).contains(&result.confidence_interval));
        prop_assert!(result.predicted_rul_hours >= 168);
    }

    #[test]
    fn risk_components_bounded_and_sorted(current in arb_sample()) {
        let components = Assessor::default().risk_components(&current);
        prop_assert!(components.len() <= 3);
        prop_assert!(components.windows(2).all(|w| w[0].probability >= w[1].probability));
        prop_assert!(components.iter().all(|c| c.probability > 0.0 && c.probability <= 1.0));
    }

    #[test]
    fn rul_is_monotonic_in_health(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let assessor = Assessor::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(assessor.rul(low) <= assessor.rul(high));
    }

    #[test]
    fn trend_multiplier_bounded(history in prop::collection::vec(arb_sample(), 0..20)) {
        let trend = Assessor::default().trend(&history);
        prop_assert!((0.8..=2.0).contains(&trend));
    }

    #[test]
    fn warnings_present_only_above_thresholds(current in arb_sample()) {
        let warnings = Assessor::default().warnings(&current);
        let above = current.vibration_rms > 15.0
            || current.bearing_temp > 90.0
            || current.gearbox_temp > 85.0;
        prop_assert_eq!(warnings.is_empty(), !above);
    }
}
