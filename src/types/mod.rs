//! Shared data structures for turbine health assessment
//!
//! - `SensorSample` / `AssessmentRequest`: telemetry delivered by the host
//! - `PredictionResult` / `RiskComponent`: assessor output
//! - `ConditionAlert`: threshold alerts rendered into `warning_flags`

mod alerts;
mod prediction;
mod sensor;

pub use alerts::*;
pub use prediction::*;
pub use sensor::*;
