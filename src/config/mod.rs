//! Assessor Configuration Module
//!
//! Critical thresholds, component baseline lifetimes and nameplate data,
//! loaded from TOML and fixed for the life of an assessor.
//!
//! ## Loading Order
//!
//! 1. `TURBINE_RUL_CONFIG` environment variable (path to TOML file)
//! 2. `assessor_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! ```ignore
//! let assessor = Assessor::new(AssessorConfig::load())?;
//! ```
//!
//! There is no process-wide config: each `Assessor` owns its copy, and a
//! different configuration means constructing a different assessor.

mod assessor_config;
pub mod defaults;
pub mod validation;

pub use assessor_config::*;
