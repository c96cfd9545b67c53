//! Assessor Configuration - critical thresholds and component lifetimes
//!
//! Every tunable value the assessor reads is a field in this module. Each
//! struct implements `Default` with the factory values, so an assessor built
//! without a config file behaves exactly like the reference model.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults::DEFAULT_MODEL_VERSION;

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV_VAR: &str = "TURBINE_RUL_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "assessor_config.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for one assessor instance.
///
/// Load with `AssessorConfig::load()` which searches:
/// 1. `$TURBINE_RUL_CONFIG` env var
/// 2. `./assessor_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessorConfig {
    /// Version tag stamped on every prediction
    #[serde(default = "default_model_version")]
    pub model_version: String,

    /// Critical sensor thresholds
    #[serde(default)]
    pub thresholds: CriticalThresholds,

    /// Expected component lifetimes
    #[serde(default)]
    pub baselines: ComponentBaselines,

    /// Nameplate data
    #[serde(default)]
    pub turbine: TurbineRating,
}

fn default_model_version() -> String {
    DEFAULT_MODEL_VERSION.to_string()
}

impl Default for AssessorConfig {
    fn default() -> Self {
        Self {
            model_version: default_model_version(),
            thresholds: CriticalThresholds::default(),
            baselines: ComponentBaselines::default(),
            turbine: TurbineRating::default(),
        }
    }
}

impl AssessorConfig {
    /// Load configuration using the standard search order:
    /// 1. `$TURBINE_RUL_CONFIG` environment variable
    /// 2. `./assessor_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), model_version = %config.model_version, "Loaded assessor config from {CONFIG_ENV_VAR}");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {CONFIG_ENV_VAR}, falling back");
                    }
                }
            } else {
                warn!(path = %path, "{CONFIG_ENV_VAR} points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(model_version = %config.model_version, "Loaded assessor config from ./{LOCAL_CONFIG_FILE}");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{LOCAL_CONFIG_FILE}, using defaults");
                }
            }
        }

        info!("No {LOCAL_CONFIG_FILE} found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, err) => ConfigError::Parse(path.to_path_buf(), err),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are logged as warnings, never rejected.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate thresholds and baselines.
    ///
    /// Rules:
    /// - Model version must be non-empty
    /// - Thresholds, baselines and rated capacity must be finite and > 0
    ///   (all are used as divisors or averaged)
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        if self.model_version.trim().is_empty() {
            errors.push("model_version must not be empty".to_string());
        }

        let t = &self.thresholds;
        Self::check_positive(t.vibration_critical_mm_s, "thresholds.vibration_critical_mm_s", &mut errors);
        Self::check_positive(t.bearing_temp_critical_c, "thresholds.bearing_temp_critical_c", &mut errors);
        Self::check_positive(t.gearbox_temp_critical_c, "thresholds.gearbox_temp_critical_c", &mut errors);

        for (name, hours) in self.baselines.named() {
            Self::check_positive(hours, &format!("baselines.{name}_hours"), &mut errors);
        }

        Self::check_positive(self.turbine.rated_capacity_mw, "turbine.rated_capacity_mw", &mut errors);

        let (range_errors, range_warnings) = super::validation::validate_physical_ranges(self);
        errors.extend(range_errors);
        for w in &range_warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn check_positive(value: f64, name: &str, errors: &mut Vec<String>) {
        // NaN comparisons silently pass, catch them explicitly
        if !value.is_finite() {
            errors.push(format!("{name}: value must be finite (got {value})"));
        } else if value <= 0.0 {
            errors.push(format!("{name}: value must be > 0 (got {value:.3})"));
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {1}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {1}", .0.display())]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

// ============================================================================
// Critical Thresholds
// ============================================================================

/// Sensor values at or above which the turbine is in an unsafe state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalThresholds {
    /// Vibration RMS critical threshold (mm/s)
    #[serde(default = "default_vibration_critical")]
    pub vibration_critical_mm_s: f64,

    /// Main bearing temperature critical threshold (°C)
    #[serde(default = "default_bearing_temp_critical")]
    pub bearing_temp_critical_c: f64,

    /// Gearbox oil temperature critical threshold (°C)
    #[serde(default = "default_gearbox_temp_critical")]
    pub gearbox_temp_critical_c: f64,
}

fn default_vibration_critical() -> f64 {
    15.0
}
fn default_bearing_temp_critical() -> f64 {
    90.0
}
fn default_gearbox_temp_critical() -> f64 {
    85.0
}

impl Default for CriticalThresholds {
    fn default() -> Self {
        Self {
            vibration_critical_mm_s: default_vibration_critical(),
            bearing_temp_critical_c: default_bearing_temp_critical(),
            gearbox_temp_critical_c: default_gearbox_temp_critical(),
        }
    }
}

// ============================================================================
// Component Baselines
// ============================================================================

/// Expected lifetime (hours) of each major component under nominal load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentBaselines {
    /// 1 year
    #[serde(default = "default_front_bearing_hours")]
    pub front_bearing_hours: f64,

    /// 1.25 years
    #[serde(default = "default_rear_bearing_hours")]
    pub rear_bearing_hours: f64,

    /// ~1.67 years
    #[serde(default = "default_gearbox_hours")]
    pub gearbox_hours: f64,

    /// 2.5 years
    #[serde(default = "default_generator_hours")]
    pub generator_hours: f64,

    /// 5 years
    #[serde(default = "default_blade_hours")]
    pub blade_hours: f64,
}

fn default_front_bearing_hours() -> f64 {
    8_760.0
}
fn default_rear_bearing_hours() -> f64 {
    10_950.0
}
fn default_gearbox_hours() -> f64 {
    14_600.0
}
fn default_generator_hours() -> f64 {
    21_900.0
}
fn default_blade_hours() -> f64 {
    43_800.0
}

impl Default for ComponentBaselines {
    fn default() -> Self {
        Self {
            front_bearing_hours: default_front_bearing_hours(),
            rear_bearing_hours: default_rear_bearing_hours(),
            gearbox_hours: default_gearbox_hours(),
            generator_hours: default_generator_hours(),
            blade_hours: default_blade_hours(),
        }
    }
}

impl ComponentBaselines {
    /// All baselines paired with their config key stem.
    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("front_bearing", self.front_bearing_hours),
            ("rear_bearing", self.rear_bearing_hours),
            ("gearbox", self.gearbox_hours),
            ("generator", self.generator_hours),
            ("blade", self.blade_hours),
        ]
    }

    pub fn values(&self) -> [f64; 5] {
        self.named().map(|(_, hours)| hours)
    }
}

// ============================================================================
// Turbine Rating
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurbineRating {
    /// Nameplate generator capacity (MW)
    #[serde(default = "default_rated_capacity")]
    pub rated_capacity_mw: f64,
}

fn default_rated_capacity() -> f64 {
    3.0
}

impl Default for TurbineRating {
    fn default() -> Self {
        Self {
            rated_capacity_mw: default_rated_capacity(),
        }
    }
}
