//! Assessment output types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Components
// ============================================================================

/// Drivetrain components tracked by the assessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentId {
    FrontBearing,
    RearBearing,
    Gearbox,
    Generator,
    Blade,
    LubeOilSystem,
}

impl ComponentId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentId::FrontBearing => "front_bearing",
            ComponentId::RearBearing => "rear_bearing",
            ComponentId::Gearbox => "gearbox",
            ComponentId::Generator => "generator",
            ComponentId::Blade => "blade",
            ComponentId::LubeOilSystem => "lube_oil_system",
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure mode attached to a flagged component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskType {
    HighTemperature,
    IncreasedVibration,
    ThermalDegradation,
}

impl RiskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskType::HighTemperature => "high_temperature",
            RiskType::IncreasedVibration => "increased_vibration",
            RiskType::ThermalDegradation => "thermal_degradation",
        }
    }
}

impl fmt::Display for RiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A component flagged as a likely failure source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskComponent {
    pub component: ComponentId,
    pub risk_type: RiskType,
    /// Failure probability in [0, 1]
    pub probability: f64,
}

// ============================================================================
// Maintenance urgency
// ============================================================================

/// Maintenance scheduling category, banded on health score.
///
/// | Band        | Health score | RUL fraction of mean baseline |
/// |-------------|--------------|-------------------------------|
/// | Emergency   | < 0.3        | 0.15                          |
/// | Expedited   | 0.3 - 0.5    | 0.25                          |
/// | Scheduled   | 0.5 - 0.7    | 0.60                          |
/// | Optimal     | >= 0.7       | 1.00                          |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceUrgency {
    Emergency,
    Expedited,
    Scheduled,
    Optimal,
}

impl MaintenanceUrgency {
    pub fn from_health_score(health_score: f64) -> Self {
        if health_score < 0.3 {
            MaintenanceUrgency::Emergency
        } else if health_score < 0.5 {
            MaintenanceUrgency::Expedited
        } else if health_score < 0.7 {
            MaintenanceUrgency::Scheduled
        } else {
            MaintenanceUrgency::Optimal
        }
    }

    /// Fraction of the mean component baseline lifetime granted as RUL.
    pub fn baseline_fraction(&self) -> f64 {
        match self {
            MaintenanceUrgency::Emergency => 0.15,
            MaintenanceUrgency::Expedited => 0.25,
            MaintenanceUrgency::Scheduled => 0.6,
            MaintenanceUrgency::Optimal => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceUrgency::Emergency => "emergency",
            MaintenanceUrgency::Expedited => "expedited",
            MaintenanceUrgency::Scheduled => "scheduled",
            MaintenanceUrgency::Optimal => "optimal",
        }
    }
}

impl fmt::Display for MaintenanceUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Prediction result
// ============================================================================

/// Immutable health / RUL assessment for one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Composite health in [0, 1] (1.0 = excellent)
    pub health_score: f64,
    /// Failure probability within 30 days
    pub failure_risk_30d: f64,
    /// Failure probability within 180 days, never below `failure_risk_30d`
    pub failure_risk_180d: f64,
    /// Hours until major maintenance, at least one week
    pub predicted_rul_hours: u32,
    /// At most 3 entries, descending by probability
    pub top_risk_components: Vec<RiskComponent>,
    pub model_version: String,
    pub inference_ts: DateTime<Utc>,
    /// Self-reported confidence in [0.5, 1.0]
    pub confidence_interval: f64,
    pub warning_flags: Vec<String>,
}

impl PredictionResult {
    pub fn urgency(&self) -> MaintenanceUrgency {
        MaintenanceUrgency::from_health_score(self.health_score)
    }

    pub fn has_critical_warning(&self) -> bool {
        self.warning_flags.iter().any(|w| w.starts_with("CRITICAL"))
    }
}
