//! Turbine RUL: Wind Turbine Health Assessment
//!
//! Deterministic health scoring and Remaining Useful Life estimation for
//! wind turbine drivetrains.
//!
//! ## Architecture
//!
//! - **Assessor**: stateless scoring engine, one `predict` per sample
//! - **Config**: critical thresholds and component lifetimes from TOML
//! - **Fleet**: parallel fan-out of independent assessments

pub mod assessor;
pub mod config;
pub mod fleet;
pub mod types;

// Re-export the assessor
pub use assessor::{AssessmentError, Assessor};

// Re-export configuration
pub use config::{AssessorConfig, ConfigError};

// Re-export commonly used types
pub use types::{
    AlertSeverity, AssessmentRequest, ComponentId, ConditionAlert, MaintenanceUrgency,
    PredictionResult, RiskComponent, RiskType, SensorSample,
};

// Re-export fleet helpers
pub use fleet::{assess_fleet, summarize, FleetAssessment, FleetSummary};
