//! Threshold alerts raised by the critical-condition checker

use serde::{Deserialize, Serialize};
use std::fmt;

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Warning => write!(f, "WARNING"),
            AlertSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A reading above its critical threshold.
///
/// Gearbox oil temperature only raises a warning: it has more operating
/// margin before failure than vibration or bearing temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionAlert {
    VibrationCritical,
    BearingTempCritical,
    GearboxTempElevated,
}

impl ConditionAlert {
    pub fn severity(&self) -> AlertSeverity {
        match self {
            ConditionAlert::VibrationCritical | ConditionAlert::BearingTempCritical => {
                AlertSeverity::Critical
            }
            ConditionAlert::GearboxTempElevated => AlertSeverity::Warning,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ConditionAlert::VibrationCritical => "Vibration exceeds safe threshold",
            ConditionAlert::BearingTempCritical => "Bearing temperature critical",
            ConditionAlert::GearboxTempElevated => "Gearbox temperature elevated",
        }
    }
}

impl fmt::Display for ConditionAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity(), self.message())
    }
}
