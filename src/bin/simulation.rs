//! Wind Turbine Telemetry Simulation
//!
//! Generates synthetic 10-minute SCADA samples for a small fleet and emits
//! one `AssessmentRequest` JSON line per turbine per emission interval,
//! ready to pipe into `turbine-rul assess`. Each turbine follows a wear
//! profile:
//! - Healthy: stable drivetrain, full power curve
//! - Wearing: slow vibration and temperature creep
//! - Failing: accelerating bearing / gearbox degradation
//!
//! # Usage
//! ```bash
//! ./simulation --turbines 12 --hours 48 --seed 7 | turbine-rul assess
//! ```

use chrono::{DateTime, Duration, Utc};
use clap::Parser;
use rand::prelude::*;
use rand_distr::{Distribution, Normal};
use std::collections::VecDeque;
use std::io::{self, Write};

use turbine_rul::{AssessmentRequest, SensorSample};

// ============================================================================
// Turbine Constants
// ============================================================================

/// Nameplate capacity (MW)
const RATED_POWER_MW: f64 = 3.0;
/// Cut-in wind speed (m/s)
const CUT_IN_WIND: f64 = 3.5;
/// Rated wind speed (m/s)
const RATED_WIND: f64 = 12.0;
/// Cut-out wind speed (m/s)
const CUT_OUT_WIND: f64 = 25.0;
/// Generator speed at rated power (RPM)
const RATED_RPM: f64 = 1_500.0;
/// Healthy vibration RMS (mm/s)
const BASE_VIBRATION: f64 = 2.0;
/// Healthy bearing temperature at rated load (°C)
const BASE_BEARING_TEMP: f64 = 45.0;
/// Healthy gearbox oil temperature at rated load (°C)
const BASE_GEARBOX_TEMP: f64 = 55.0;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "turbine-simulation")]
#[command(about = "Synthetic wind turbine telemetry for turbine-rul testing")]
#[command(version = "1.0")]
struct Args {
    /// Number of turbines in the fleet
    #[arg(short, long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..=500))]
    turbines: u32,

    /// Simulated duration in hours
    #[arg(short = 'H', long, default_value = "24", value_parser = clap::value_parser!(u32).range(1..=8760))]
    hours: u32,

    /// Minutes between samples
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..=60))]
    interval_minutes: u32,

    /// History samples carried with each request
    #[arg(long, default_value = "144")]
    window: usize,

    /// Emit a request every N hours (default: only at the end)
    #[arg(long)]
    emit_every_hours: Option<u32>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Suppress the run log on stderr
    #[arg(short, long)]
    quiet: bool,
}

// ============================================================================
// Wear Profiles
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum WearProfile {
    Healthy,
    Wearing,
    Failing,
}

impl WearProfile {
    fn name(&self) -> &'static str {
        match self {
            WearProfile::Healthy => "Healthy",
            WearProfile::Wearing => "Wearing (slow creep)",
            WearProfile::Failing => "Failing (bearing / gearbox fault)",
        }
    }

    /// Wear accumulated per simulated hour (0 = new, 1 = at failure).
    fn wear_rate(&self) -> f64 {
        match self {
            WearProfile::Healthy => 0.0,
            WearProfile::Wearing => 0.002,
            WearProfile::Failing => 0.02,
        }
    }

    /// Roughly 70% healthy, 20% wearing, 10% failing.
    fn pick(rng: &mut StdRng) -> Self {
        match rng.gen_range(0..10) {
            0 => WearProfile::Failing,
            1 | 2 => WearProfile::Wearing,
            _ => WearProfile::Healthy,
        }
    }
}

// ============================================================================
// Turbine State
// ============================================================================

struct TurbineState {
    id: String,
    profile: WearProfile,
    /// Accumulated wear in [0, 1]
    wear: f64,
    history: VecDeque<SensorSample>,
}

impl TurbineState {
    fn new(index: u32, profile: WearProfile, initial_wear: f64, window: usize) -> Self {
        Self {
            id: format!("WTG-{:03}", index + 1),
            profile,
            wear: initial_wear,
            history: VecDeque::with_capacity(window + 1),
        }
    }

    /// Fraction of rated power from a simplified cubic power curve.
    fn power_fraction(wind: f64) -> f64 {
        if !(CUT_IN_WIND..CUT_OUT_WIND).contains(&wind) {
            0.0
        } else if wind >= RATED_WIND {
            1.0
        } else {
            ((wind - CUT_IN_WIND) / (RATED_WIND - CUT_IN_WIND)).powi(3)
        }
    }

    fn sample(&self, rng: &mut StdRng, noise: &Normal<f64>, wind: f64, timestamp: DateTime<Utc>) -> SensorSample {
        let load = Self::power_fraction(wind);
        // Worn drivetrains lose output and run hotter and rougher
        let wear = self.wear.clamp(0.0, 1.0);

        let vibration = BASE_VIBRATION * (1.0 + 0.3 * load) + 14.0 * wear.powi(2) + noise.sample(rng) * 0.3;
        let bearing = 20.0 + (BASE_BEARING_TEMP - 20.0) * (0.5 + 0.5 * load) + 50.0 * wear + noise.sample(rng);
        let gearbox = 25.0 + (BASE_GEARBOX_TEMP - 25.0) * (0.5 + 0.5 * load) + 35.0 * wear + noise.sample(rng);
        let power = RATED_POWER_MW * load * (1.0 - 0.5 * wear);
        let pitch = if wind > RATED_WIND {
            (wind - RATED_WIND) * 2.5
        } else {
            0.0
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rpm = (RATED_RPM * load.cbrt()).round() as u32;

        SensorSample {
            vibration_rms: vibration.max(0.0),
            bearing_temp: bearing,
            generator_power: power.max(0.0),
            gearbox_temp: gearbox,
            blade_pitch_angle: pitch,
            nacelle_wind_speed: wind,
            generator_rpm: rpm,
            timestamp,
        }
    }

    fn record(&mut self, sample: SensorSample, window: usize) {
        self.history.push_back(sample);
        while self.history.len() > window + 1 {
            self.history.pop_front();
        }
    }

    /// The newest sample as `current`, everything before it as history.
    fn request(&self) -> Option<AssessmentRequest> {
        let current = self.history.back()?.clone();
        let older: Vec<SensorSample> = self.history.iter().take(self.history.len() - 1).cloned().collect();
        Some(AssessmentRequest {
            turbine_id: self.id.clone(),
            current,
            history: (!older.is_empty()).then_some(older),
        })
    }
}

// ============================================================================
// Logging Utilities
// ============================================================================

fn log_mission(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("[sim] {}", message);
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let sensor_noise = Normal::new(0.0, 1.0)?;
    let gust = Normal::new(0.0, 1.5)?;

    let mut fleet: Vec<TurbineState> = (0..args.turbines)
        .map(|i| {
            let profile = WearProfile::pick(&mut rng);
            let initial_wear = match profile {
                WearProfile::Healthy => rng.gen_range(0.0..0.1),
                WearProfile::Wearing => rng.gen_range(0.2..0.5),
                WearProfile::Failing => rng.gen_range(0.5..0.8),
            };
            TurbineState::new(i, profile, initial_wear, args.window)
        })
        .collect();

    log_mission(&"=".repeat(60), args.quiet);
    log_mission("WIND TURBINE TELEMETRY SIMULATION", args.quiet);
    log_mission(&format!("  Turbines: {}", args.turbines), args.quiet);
    log_mission(&format!("  Duration: {} h @ {} min", args.hours, args.interval_minutes), args.quiet);
    if let Some(seed) = args.seed {
        log_mission(&format!("  Random seed: {}", seed), args.quiet);
    }
    for turbine in &fleet {
        log_mission(
            &format!("  {} -> {} (wear {:.2})", turbine.id, turbine.profile.name(), turbine.wear),
            args.quiet,
        );
    }
    log_mission(&"=".repeat(60), args.quiet);

    let steps = args.hours * 60 / args.interval_minutes;
    let step_hours = f64::from(args.interval_minutes) / 60.0;
    let emit_every_steps = args
        .emit_every_hours
        .map(|h| (h * 60 / args.interval_minutes).max(1));
    let start = Utc::now() - Duration::hours(i64::from(args.hours));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut emitted = 0u64;

    // Mean site wind with slow drift, shared by the whole fleet
    let mut site_wind: f64 = 9.0;

    for step in 1..=steps {
        let timestamp = start + Duration::minutes(i64::from(step * args.interval_minutes));
        site_wind = (site_wind + gust.sample(&mut rng) * 0.3).clamp(0.0, 28.0);

        for turbine in &mut fleet {
            let wind = (site_wind + gust.sample(&mut rng) * 0.5).max(0.0);
            let sample = turbine.sample(&mut rng, &sensor_noise, wind, timestamp);
            turbine.record(sample, args.window);
            turbine.wear += turbine.profile.wear_rate() * step_hours;
        }

        let emit_now = step == steps || emit_every_steps.is_some_and(|n| step % n == 0);
        if emit_now {
            for turbine in &fleet {
                if let Some(req) = turbine.request() {
                    writeln!(out, "{}", serde_json::to_string(&req)?)?;
                    emitted += 1;
                }
            }
            out.flush()?;
        }
    }

    log_mission(&format!("SIMULATION COMPLETE: {} requests emitted", emitted), args.quiet);
    Ok(())
}
