//! turbine-rul - Wind turbine health assessment CLI
//!
//! Reads turbine telemetry as JSON lines, runs the health / RUL assessor on
//! every turbine and writes one JSON prediction per line to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Assess a recorded batch
//! turbine-rul assess --input fleet.jsonl
//!
//! # Pipe synthetic telemetry through the assessor
//! ./simulation --turbines 20 | turbine-rul assess
//!
//! # Show the effective configuration
//! turbine-rul config
//! ```
//!
//! # Environment Variables
//!
//! - `TURBINE_RUL_CONFIG`: Path to an assessor config TOML
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::{error, info, warn};

use turbine_rul::{
    assess_fleet, summarize, AssessmentRequest, Assessor, AssessorConfig, MaintenanceUrgency,
    PredictionResult,
};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "turbine-rul")]
#[command(about = "Wind turbine health assessment and RUL estimation")]
#[command(version)]
struct CliArgs {
    /// Assessor config TOML (overrides TURBINE_RUL_CONFIG and ./assessor_config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true, env = "TURBINE_RUL_JSON_LOGS")]
    json_logs: bool,

    #[command(subcommand)]
    command: SubCommand,
}

#[derive(Subcommand, Debug)]
enum SubCommand {
    /// Assess turbines from JSON lines of {turbine_id, current, history}
    Assess {
        /// Input file (default: stdin)
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Print the effective assessor configuration as TOML
    Config,
}

// ============================================================================
// Output
// ============================================================================

/// One output line: the prediction plus the turbine it belongs to.
#[derive(Serialize)]
struct AssessmentLine<'a> {
    turbine_id: &'a str,
    urgency: MaintenanceUrgency,
    #[serde(flatten)]
    prediction: &'a PredictionResult,
}

// ============================================================================
// Commands
// ============================================================================

fn load_config(path: Option<&PathBuf>) -> Result<AssessorConfig> {
    match path {
        Some(p) => AssessorConfig::load_from_file(p)
            .with_context(|| format!("Failed to load config from {}", p.display())),
        None => Ok(AssessorConfig::load()),
    }
}

/// Parse JSON-lines requests, skipping (and logging) malformed lines.
fn read_requests(reader: impl BufRead) -> Result<Vec<AssessmentRequest>> {
    let mut requests = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<AssessmentRequest>(&line) {
            Ok(req) => requests.push(req),
            Err(e) => error!(line = idx + 1, error = %e, "Skipping malformed request"),
        }
    }
    Ok(requests)
}

fn run_assess(assessor: &Assessor, input: Option<&PathBuf>) -> Result<()> {
    let requests = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            read_requests(BufReader::new(file))?
        }
        None => read_requests(io::stdin().lock())?,
    };

    info!(turbines = requests.len(), model_version = assessor.model_version(), "Assessing fleet");
    let assessments = assess_fleet(assessor, &requests);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for assessment in &assessments {
        match &assessment.outcome {
            Ok(prediction) => {
                if !prediction.warning_flags.is_empty() {
                    warn!(
                        turbine = %assessment.turbine_id,
                        warnings = ?prediction.warning_flags,
                        "Turbine above critical thresholds"
                    );
                }
                let line = AssessmentLine {
                    turbine_id: &assessment.turbine_id,
                    urgency: prediction.urgency(),
                    prediction,
                };
                serde_json::to_writer(&mut out, &line).context("Failed to serialize prediction")?;
                writeln!(out)?;
            }
            Err(e) => error!(turbine = %assessment.turbine_id, error = %e, "Assessment failed"),
        }
    }
    out.flush()?;

    let summary = summarize(&assessments);
    info!(
        assessed = summary.assessed,
        failed = summary.failed,
        critical = summary.with_critical_warnings,
        by_urgency = ?summary.by_urgency,
        "Fleet assessment complete"
    );
    Ok(())
}

fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.json_logs);

    let config = load_config(args.config.as_ref())?;

    match args.command {
        SubCommand::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        SubCommand::Assess { input } => {
            let assessor = Assessor::new(config).context("Invalid assessor configuration")?;
            run_assess(&assessor, input.as_ref())
        }
    }
}
