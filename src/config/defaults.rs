//! Engine-wide default constants.
//!
//! Values that are part of the scoring model itself, not operator-tunable.
//! Tunable thresholds and lifetimes live in `AssessorConfig`.

// ============================================================================
// Model
// ============================================================================

/// Model version tag stamped on every prediction when the config omits one.
pub const DEFAULT_MODEL_VERSION: &str = "0.4.1";

// ============================================================================
// Health Scoring
// ============================================================================

/// Weight of the vibration sub-score. Dominates: vibration is the earliest
/// indicator of mechanical degradation.
pub const WEIGHT_VIBRATION: f64 = 0.35;
/// Weight of the bearing temperature sub-score.
pub const WEIGHT_BEARING_TEMP: f64 = 0.25;
/// Weight of the gearbox oil temperature sub-score.
pub const WEIGHT_GEARBOX_TEMP: f64 = 0.20;
/// Weight of the power-output efficiency sub-score.
pub const WEIGHT_POWER_EFFICIENCY: f64 = 0.20;

// ============================================================================
// Failure Risk
// ============================================================================

/// Cap on the snapshot 30-day risk before trend adjustment.
pub const SNAPSHOT_RISK_CAP: f64 = 0.5;

/// 180-day risk = 30-day risk × this factor (capped at 1.0).
pub const LONG_HORIZON_RISK_FACTOR: f64 = 2.5;

/// Minimum history length before the trend multiplier is applied to risk.
pub const MIN_HISTORY_FOR_TREND: usize = 6;

// ============================================================================
// Degradation Trend
// ============================================================================

/// Guards relative-change division against zero baselines.
pub const TREND_EPSILON: f64 = 1e-6;

pub const TREND_MULTIPLIER_MIN: f64 = 0.8;
pub const TREND_MULTIPLIER_MAX: f64 = 2.0;

// ============================================================================
// RUL
// ============================================================================

/// RUL floor (hours). One week.
pub const MIN_RUL_HOURS: u32 = 168;

// ============================================================================
// Confidence
// ============================================================================

pub const BASE_CONFIDENCE: f64 = 0.7;

/// Confidence gained from a full history window.
pub const HISTORY_CONFIDENCE_GAIN: f64 = 0.2;

/// History length at which the confidence gain saturates.
pub const HISTORY_SATURATION_POINTS: usize = 100;

/// History must be longer than this before reading stability is checked.
pub const MIN_HISTORY_FOR_STABILITY: usize = 5;

/// Number of most recent samples used for the stability check.
pub const STABILITY_WINDOW: usize = 10;

/// Vibration variance (mm²/s²) above which recent readings count as unstable.
pub const VIBRATION_VARIANCE_LIMIT: f64 = 5.0;

pub const UNSTABLE_READINGS_PENALTY: f64 = 0.1;

pub const CONFIDENCE_MIN: f64 = 0.5;
pub const CONFIDENCE_MAX: f64 = 1.0;

// ============================================================================
// Risk Components
// ============================================================================

/// At most this many components are reported per prediction.
pub const MAX_RISK_COMPONENTS: usize = 3;
