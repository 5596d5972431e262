//! Enhancement factor estimates.
//!
//! Three independent heuristics for how much denser coherent doublets are
//! than random ones at the target scale, plus their aggregate.

use tracing::debug;

use crate::types::{
    BoostSummary, DecayComparison, EnhancementEstimate, EnhancementMethod, ModelParams,
};

/// Multipliers applied to the smallest and largest estimate for the range.
const RANGE_LOW: f64 = 0.5;
const RANGE_HIGH: f64 = 2.0;

/// E1 = random / coherent, E2 = (q/q_eff)², E3 = E1 * sqrt(q/q_eff).
pub fn estimate(comparison: &DecayComparison, model: &ModelParams) -> [EnhancementEstimate; 3] {
    let screening = model.screening_factor();

    let decay_ratio = comparison.random / comparison.coherent;
    let screened = screening.powi(2);
    let combined = decay_ratio * screening.sqrt();

    debug!(decay_ratio, screened, combined, screening, "Enhancement estimates");

    [
        EnhancementEstimate { method: EnhancementMethod::DecayRatio, value: decay_ratio },
        EnhancementEstimate { method: EnhancementMethod::Screening, value: screened },
        EnhancementEstimate { method: EnhancementMethod::Combined, value: combined },
    ]
}

/// Arithmetic mean and the heuristic [min * 0.5, max * 2] range.
///
/// An empty slice yields zeros.
pub fn summarize(estimates: &[EnhancementEstimate]) -> BoostSummary {
    if estimates.is_empty() {
        return BoostSummary { mean: 0.0, range: (0.0, 0.0) };
    }

    let values = estimates.iter().map(|e| e.value);
    let mean = values.clone().sum::<f64>() / estimates.len() as f64;
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.fold(f64::NEG_INFINITY, f64::max);

    BoostSummary {
        mean,
        range: (min * RANGE_LOW, max * RANGE_HIGH),
    }
}
