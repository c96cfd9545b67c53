//! Config validation: unknown-key detection with Levenshtein suggestions
//! and physical range checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use std::collections::HashSet;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, ", did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for AssessorConfig.
///
/// Any new field added to AssessorConfig must be added here too.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        "model_version",
        // [thresholds]
        "thresholds",
        "thresholds.vibration_critical_mm_s",
        "thresholds.bearing_temp_critical_c",
        "thresholds.gearbox_temp_critical_c",
        // [baselines]
        "baselines",
        "baselines.front_bearing_hours",
        "baselines.rear_bearing_hours",
        "baselines.gearbox_hours",
        "baselines.generator_hours",
        "baselines.blade_hours",
        // [turbine]
        "turbine",
        "turbine.rated_capacity_mw",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
///
/// Ties resolve to the lexicographically smallest key.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (levenshtein(unknown, k), k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys, it only warns.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are handled by serde later
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Physical Range Validation
// ============================================================================

/// Validate physical ranges on a parsed AssessorConfig.
///
/// Returns (errors, warnings). Non-positive values are rejected by
/// `AssessorConfig::validate` itself; here errors are only values no
/// turbine could have, warnings are suspicious but legal.
pub fn validate_physical_ranges(
    config: &super::AssessorConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let t = &config.thresholds;

    // Lubricated bearings and gear oil break down well before 200 °C
    if t.bearing_temp_critical_c > 200.0 {
        errors.push(format!(
            "thresholds.bearing_temp_critical_c = {:.1} is outside physical range (0-200 °C)",
            t.bearing_temp_critical_c
        ));
    }
    if t.gearbox_temp_critical_c > 200.0 {
        errors.push(format!(
            "thresholds.gearbox_temp_critical_c = {:.1} is outside physical range (0-200 °C)",
            t.gearbox_temp_critical_c
        ));
    }

    // ISO 10816-21 zone D for wind turbine drivetrains tops out well below 50 mm/s
    if t.vibration_critical_mm_s > 50.0 {
        warnings.push(ValidationWarning {
            field: "thresholds.vibration_critical_mm_s".to_string(),
            message: format!(
                "vibration_critical_mm_s = {:.1} is outside typical range (1-50 mm/s)",
                t.vibration_critical_mm_s
            ),
            suggestion: None,
        });
    }

    if t.bearing_temp_critical_c < 40.0 || t.bearing_temp_critical_c > 150.0 {
        warnings.push(ValidationWarning {
            field: "thresholds.bearing_temp_critical_c".to_string(),
            message: format!(
                "bearing_temp_critical_c = {:.1} is outside typical range (40-150 °C)",
                t.bearing_temp_critical_c
            ),
            suggestion: None,
        });
    }

    // Utility-scale turbines: 0.5 MW to 20 MW
    let cap = config.turbine.rated_capacity_mw;
    if cap < 0.5 || cap > 20.0 {
        warnings.push(ValidationWarning {
            field: "turbine.rated_capacity_mw".to_string(),
            message: format!("rated_capacity_mw = {cap:.2} is outside typical range (0.5-20 MW)"),
            suggestion: None,
        });
    }

    // Anything beyond 30 years is longer than a turbine's design life
    for (name, hours) in config.baselines.named() {
        if hours > 262_800.0 {
            warnings.push(ValidationWarning {
                field: format!("baselines.{name}_hours"),
                message: format!("{name}_hours = {hours:.0} exceeds a 30-year design life"),
                suggestion: None,
            });
        }
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================
