//! Turbine telemetry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point-in-time sample from the turbine IoT gateway.
///
/// Samples are assumed range-checked upstream. The assessor only rejects
/// non-finite readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSample {
    /// Vibration RMS (mm/s)
    pub vibration_rms: f64,
    /// Main bearing temperature (°C)
    pub bearing_temp: f64,
    /// Generator power output (MW)
    pub generator_power: f64,
    /// Gearbox oil temperature (°C)
    pub gearbox_temp: f64,
    /// Blade pitch angle (degrees)
    pub blade_pitch_angle: f64,
    /// Nacelle anemometer wind speed (m/s)
    pub nacelle_wind_speed: f64,
    /// Generator rotational speed (RPM)
    pub generator_rpm: u32,
    pub timestamp: DateTime<Utc>,
}

/// One unit of work for a fleet run: a turbine's latest sample plus its
/// recent history (oldest first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub turbine_id: String,
    pub current: SensorSample,
    #[serde(default)]
    pub history: Option<Vec<SensorSample>>,
}
