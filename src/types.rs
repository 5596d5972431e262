//! Shared types for the boost estimator.
//!
//! Inputs are grouped into `EstimatorInputs`, whose `Default` carries the
//! fixed literals of the Q47 calculation. Everything derived from them ends
//! up in a `BoostReport`, which the renderer and the JSON export consume.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Observed Q47 tuple counts at the reference scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedCounts {
    /// Upper bound of the full scan (n ≤ scan_limit).
    pub scan_limit: f64,
    pub total_primes: u64,
    pub doublets: u64,
    pub triplets: u64,
    pub quadruplets: u64,
}

impl Default for ObservedCounts {
    fn default() -> Self {
        Self {
            scan_limit: 2e9,
            total_primes: 18_356_706,
            doublets: 175_351,
            triplets: 1_755,
            quadruplets: 15,
        }
    }
}

/// Decimal exponents of the reference (observed) and target scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleParams {
    /// N₁ = 10^reference_exponent
    pub reference_exponent: u32,
    /// N₂ = 10^target_exponent
    pub target_exponent: u32,
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            reference_exponent: 9,
            target_exponent: 44,
        }
    }
}

/// Coherent-model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Correlation exponent α, from the n^(1/α) ~ γ fit (r = 0.994).
    pub alpha: f64,
    /// Polynomial modulus q.
    pub modulus: u32,
    /// Effective modulus q_eff ≈ q/3.
    pub effective_modulus: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            alpha: 2.74,
            modulus: 47,
            effective_modulus: 15.5,
        }
    }
}

impl ModelParams {
    /// Screening factor q / q_eff.
    pub fn screening_factor(&self) -> f64 {
        self.modulus as f64 / self.effective_modulus
    }
}

/// Everything the estimator reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorInputs {
    pub observed: ObservedCounts,
    pub scales: ScaleParams,
    pub model: ModelParams,
    /// Tuple orders k for the random (Poisson) model.
    pub tuple_orders: Vec<u32>,
}

impl Default for EstimatorInputs {
    fn default() -> Self {
        Self {
            observed: ObservedCounts::default(),
            scales: ScaleParams::default(),
            model: ModelParams::default(),
            tuple_orders: vec![2, 3, 4],
        }
    }
}

// ---------------------------------------------------------------------------
// Derived quantities
// ---------------------------------------------------------------------------

/// Natural-log values of the two scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogScales {
    /// ln(N₁)
    pub ln_reference: f64,
    /// ln(N₂)
    pub ln_target: f64,
    /// ln(N₁) / ln(N₂), in (0, 1) for valid inputs.
    pub ratio: f64,
}

impl LogScales {
    /// ln(N₂) / ln(N₁)
    pub fn inverse_ratio(&self) -> f64 {
        self.ln_target / self.ln_reference
    }
}

/// Density ratio of k-tuples between the target and reference scales
/// under the random model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayFactor {
    pub order: u32,
    pub factor: f64,
}

impl DecayFactor {
    /// How many times sparser k-tuples are at the target scale.
    pub fn sparsity(&self) -> f64 {
        1.0 / self.factor
    }
}

/// Random (k = 2) vs coherent (k = α) decay for doublets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayComparison {
    pub random: f64,
    pub coherent: f64,
}

/// How an enhancement estimate was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnhancementMethod {
    /// Random decay over coherent decay.
    DecayRatio,
    /// (q / q_eff)², a 2D screening analog.
    Screening,
    /// Decay ratio scaled by sqrt(q / q_eff).
    Combined,
}

impl fmt::Display for EnhancementMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnhancementMethod::DecayRatio => write!(f, "decay ratio"),
            EnhancementMethod::Screening => write!(f, "q_eff screening"),
            EnhancementMethod::Combined => write!(f, "combined"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementEstimate {
    pub method: EnhancementMethod,
    pub value: f64,
}

/// Aggregate of the individual estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostSummary {
    pub mean: f64,
    /// Heuristic range [min * 0.5, max * 2].
    pub range: (f64, f64),
}

impl fmt::Display for BoostSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}× (range {:.1}–{:.1}×)",
            self.mean, self.range.0, self.range.1
        )
    }
}

/// Full result of one estimator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostReport {
    pub inputs: EstimatorInputs,
    pub scales: LogScales,
    pub random_decays: Vec<DecayFactor>,
    pub comparison: DecayComparison,
    pub estimates: Vec<EnhancementEstimate>,
    pub summary: BoostSummary,
}

impl BoostReport {
    /// Value of the estimate produced by `method`, if present.
    pub fn estimate(&self, method: EnhancementMethod) -> Option<f64> {
        self.estimates
            .iter()
            .find(|e| e.method == method)
            .map(|e| e.value)
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Input validation and numeric failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimatorError {
    #[error("Scale exponent must be positive: {0}")]
    NonPositiveScale(u32),

    #[error("Target exponent {target} must exceed reference exponent {reference}")]
    ScaleOrdering { reference: u32, target: u32 },

    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Invalid tuple order: {0}")]
    InvalidOrder(u32),

    #[error("No tuple orders given")]
    NoOrders,

    #[error("Non-finite result for {0}")]
    NonFinite(&'static str),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
