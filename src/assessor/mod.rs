//! Health & RUL Assessor
//!
//! Turns one current `SensorSample` plus optional history into a
//! `PredictionResult`. The assessor holds only immutable configuration, so a
//! single instance can be shared across threads without locking.
//!
//! ## Pipeline
//!
//! 1. `scoring`: weighted health score
//! 2. `risk`: 30/180-day failure risk (trend-scaled with >= 6 history points)
//! 3. `trend`: degradation trend multiplier
//! 4. `rul`: tiered Remaining Useful Life
//! 5. `risk`: top risk components
//! 6. `conditions`: threshold warnings
//! 7. `trend`: confidence from history volume and stability
//!
//! Every step reads only the sample, the history and the config. The three
//! history heuristics (risk trend, confidence boost, stability penalty) do not
//! feed into each other.

pub mod conditions;
pub mod risk;
pub mod rul;
pub mod scoring;
pub mod trend;

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use crate::config::{AssessorConfig, ConfigError};
use crate::types::{ConditionAlert, PredictionResult, RiskComponent, SensorSample};

/// Errors that abort a single prediction.
///
/// The assessor keeps no state between calls, so an error never affects
/// later predictions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssessmentError {
    #[error("Non-finite sensor reading: {field} = {value}")]
    NonFiniteReading { field: &'static str, value: f64 },

    #[error("Non-finite {metric} computed: {value}")]
    NonFiniteOutput { metric: &'static str, value: f64 },
}

/// Stateless turbine health assessor.
#[derive(Debug, Clone)]
pub struct Assessor {
    config: AssessorConfig,
    /// Mean component lifetime, derived once from the immutable config
    mean_baseline_hours: f64,
}

impl Default for Assessor {
    fn default() -> Self {
        Self::from_valid_config(AssessorConfig::default())
    }
}

impl Assessor {
    /// Build an assessor from a config, validating it first.
    pub fn new(config: AssessorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: AssessorConfig) -> Self {
        let mean_baseline_hours = rul::mean_baseline_hours(&config.baselines);
        Self {
            config,
            mean_baseline_hours,
        }
    }

    pub fn config(&self) -> &AssessorConfig {
        &self.config
    }

    pub fn model_version(&self) -> &str {
        &self.config.model_version
    }

    /// Health score in [0, 1].
    pub fn score(&self, sample: &SensorSample) -> f64 {
        scoring::health_score(
            sample,
            &self.config.thresholds,
            self.config.turbine.rated_capacity_mw,
        )
    }

    /// `(risk_30d, risk_180d)`.
    pub fn risks(&self, sample: &SensorSample, history: Option<&[SensorSample]>) -> (f64, f64) {
        risk::failure_risks(sample, history, &self.config.thresholds)
    }

    /// Degradation trend multiplier in [0.8, 2.0].
    pub fn trend(&self, history: &[SensorSample]) -> f64 {
        trend::degradation_trend(history)
    }

    /// RUL in hours for a health score.
    pub fn rul(&self, health_score: f64) -> u32 {
        rul::rul_hours(health_score, self.mean_baseline_hours)
    }

    /// Top (at most 3) risk components, descending by probability.
    pub fn risk_components(&self, sample: &SensorSample) -> Vec<RiskComponent> {
        risk::risk_components(sample, &self.config.thresholds)
    }

    /// Threshold alerts for the sample.
    pub fn alerts(&self, sample: &SensorSample) -> Vec<ConditionAlert> {
        conditions::check_conditions(sample, &self.config.thresholds)
    }

    /// Threshold alerts rendered as warning strings.
    pub fn warnings(&self, sample: &SensorSample) -> Vec<String> {
        conditions::warning_flags(sample, &self.config.thresholds)
    }

    /// Confidence in [0.5, 1.0].
    pub fn confidence(&self, history: Option<&[SensorSample]>) -> f64 {
        trend::confidence(history)
    }

    /// Full assessment of `sample` with optional oldest-first `history`.
    ///
    /// Fails atomically: either every field is computed or an error is
    /// returned for this call.
    pub fn predict(
        &self,
        sample: &SensorSample,
        history: Option<&[SensorSample]>,
    ) -> Result<PredictionResult, AssessmentError> {
        check_finite(sample)?;
        if let Some(history) = history {
            history.iter().try_for_each(check_finite)?;
        }

        let health_score = finite("health_score", self.score(sample))?;
        let (failure_risk_30d, failure_risk_180d) = self.risks(sample, history);
        let failure_risk_30d = finite("failure_risk_30d", failure_risk_30d)?;
        let failure_risk_180d = finite("failure_risk_180d", failure_risk_180d)?;
        let predicted_rul_hours = self.rul(health_score);
        let top_risk_components = self.risk_components(sample);
        let warning_flags = self.warnings(sample);
        let confidence_interval = finite("confidence", self.confidence(history))?;

        debug!(
            health_score,
            failure_risk_30d,
            failure_risk_180d,
            predicted_rul_hours,
            confidence = confidence_interval,
            history_len = history.map_or(0, <[SensorSample]>::len),
            risk_components = top_risk_components.len(),
            warnings = warning_flags.len(),
            "Assessment complete"
        );

        Ok(PredictionResult {
            health_score,
            failure_risk_30d,
            failure_risk_180d,
            predicted_rul_hours,
            top_risk_components,
            model_version: self.config.model_version.clone(),
            inference_ts: Utc::now(),
            confidence_interval,
            warning_flags,
        })
    }
}

fn check_finite(sample: &SensorSample) -> Result<(), AssessmentError> {
    let readings = [
        ("vibration_rms", sample.vibration_rms),
        ("bearing_temp", sample.bearing_temp),
        ("generator_power", sample.generator_power),
        ("gearbox_temp", sample.gearbox_temp),
        ("blade_pitch_angle", sample.blade_pitch_angle),
        ("nacelle_wind_speed", sample.nacelle_wind_speed),
    ];
    match readings.into_iter().find(|(_, value)| !value.is_finite()) {
        Some((field, value)) => Err(AssessmentError::NonFiniteReading { field, value }),
        None => Ok(()),
    }
}

fn finite(metric: &'static str, value: f64) -> Result<f64, AssessmentError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AssessmentError::NonFiniteOutput { metric, value })
    }
}
