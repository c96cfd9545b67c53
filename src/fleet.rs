//! Fleet fan-out
//!
//! Runs independent assessments for many turbines on the rayon pool. Each
//! turbine gets its own `Result`, so a malformed sample from one turbine
//! never fails the rest of the batch.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;

use crate::assessor::{AssessmentError, Assessor};
use crate::types::{AssessmentRequest, MaintenanceUrgency, PredictionResult};

/// Outcome of one turbine's assessment.
#[derive(Debug, Clone)]
pub struct FleetAssessment {
    pub turbine_id: String,
    pub outcome: Result<PredictionResult, AssessmentError>,
}

/// Per-band turbine counts for a fleet run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FleetSummary {
    pub assessed: usize,
    pub failed: usize,
    pub by_urgency: BTreeMap<MaintenanceUrgency, usize>,
    pub with_critical_warnings: usize,
}

/// Assess every request in parallel. Output order matches input order.
pub fn assess_fleet(assessor: &Assessor, requests: &[AssessmentRequest]) -> Vec<FleetAssessment> {
    requests
        .par_iter()
        .map(|req| FleetAssessment {
            turbine_id: req.turbine_id.clone(),
            outcome: assessor.predict(&req.current, req.history.as_deref()),
        })
        .collect()
}

/// Tally a fleet run by maintenance urgency.
pub fn summarize(assessments: &[FleetAssessment]) -> FleetSummary {
    let mut summary = FleetSummary::default();
    for assessment in assessments {
        match &assessment.outcome {
            Ok(result) => {
                summary.assessed += 1;
                *summary.by_urgency.entry(result.urgency()).or_insert(0) += 1;
                if result.has_critical_warning() {
                    summary.with_critical_warnings += 1;
                }
            }
            Err(_) => summary.failed += 1,
        }
    }
    summary
}
