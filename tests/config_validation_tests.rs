//! Config Validation Tests
//!
//! Typo detection, physical range checks and file loading for the
//! assessor configuration, exercised independently from the assessor.

use std::io::Write;

use turbine_rul::config::validation::{
    known_config_keys, suggest_correction, validate_physical_ranges, validate_unknown_keys,
};
use turbine_rul::config::{AssessorConfig, ConfigError, CONFIG_ENV_VAR};
use turbine_rul::Assessor;

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_threshold_warns_with_suggestion() {
    let toml_str = r#"
[thresholds]
vibraton_critical_mm_s = 12.0
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("vibraton_critical_mm_s"));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("thresholds.vibration_critical_mm_s")
    );
}

#[test]
fn misspelled_section_warns() {
    let warnings = validate_unknown_keys(
        r#"
[turbin]
rated_capacity_mw = 3.6
"#,
    );
    assert!(warnings.iter().any(|w| w.suggestion.as_deref() == Some("turbine")));
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = r#"
model_version = "0.5.0"

[thresholds]
vibration_critical_mm_s = 11.0
bearing_temp_critical_c = 95.0
gearbox_temp_critical_c = 80.0

[baselines]
front_bearing_hours = 9000.0
rear_bearing_hours = 11000.0
gearbox_hours = 15000.0
generator_hours = 22000.0
blade_hours = 44000.0

[turbine]
rated_capacity_mw = 4.2
"#;
    assert!(validate_unknown_keys(toml_str).is_empty());
    let config = AssessorConfig::from_toml_str(toml_str).unwrap();
    assert_eq!(config.model_version, "0.5.0");
    assert_eq!(config.turbine.rated_capacity_mw, 4.2);
}

#[test]
fn every_known_key_is_accepted() {
    let known = known_config_keys();
    for key in &known {
        assert_eq!(suggest_correction(key, &known).as_deref(), Some(*key));
    }
}

#[test]
fn unknown_key_does_not_fail_load() {
    let config = AssessorConfig::from_toml_str(
        r#"
site_name = "Hornsea"
[thresholds]
bearing_temp_critical_c = 88.0
"#,
    )
    .unwrap();
    assert_eq!(config.thresholds.bearing_temp_critical_c, 88.0);
}

// ============================================================================
// Range Validation
// ============================================================================

#[test]
fn default_config_passes_range_checks() {
    let (errors, warnings) = validate_physical_ranges(&AssessorConfig::default());
    assert!(errors.is_empty());
    assert!(warnings.is_empty());
}

#[test]
fn negative_baseline_is_rejected() {
    let result = AssessorConfig::from_toml_str(
        r#"
[baselines]
blade_hours = -1.0
"#,
    );
    match result {
        Err(ConfigError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("baselines.blade_hours")), "{errors:?}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn wrong_type_is_parse_error() {
    let result = AssessorConfig::from_toml_str(
        r#"
[thresholds]
vibration_critical_mm_s = "high"
"#,
    );
    assert!(matches!(result, Err(ConfigError::Parse(..))));
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn load_from_file_reads_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "model_version = \"site-b\"\n[turbine]\nrated_capacity_mw = 2.0").unwrap();

    let config = AssessorConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.model_version, "site-b");
    assert_eq!(config.turbine.rated_capacity_mw, 2.0);
    assert_eq!(config.thresholds.vibration_critical_mm_s, 15.0);
}

#[test]
fn load_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = AssessorConfig::load_from_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(..))));
}

#[test]
fn parse_error_names_the_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[thresholds\nbroken").unwrap();
    let err = AssessorConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains(&file.path().display().to_string()), "{err}");
}

#[test]
fn load_honours_env_var() {
    // Only test in this binary that touches the process environment
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "model_version = \"from-env\"").unwrap();

    std::env::set_var(CONFIG_ENV_VAR, file.path());
    let config = AssessorConfig::load();
    std::env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(config.model_version, "from-env");
}

#[test]
fn saved_config_builds_equivalent_assessor() {
    let mut config = AssessorConfig::default();
    config.thresholds.gearbox_temp_critical_c = 80.0;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(config.to_toml().unwrap().as_bytes()).unwrap();

    let loaded = AssessorConfig::load_from_file(file.path()).unwrap();
    let assessor = Assessor::new(loaded).unwrap();
    assert_eq!(assessor.config(), &config);
}
