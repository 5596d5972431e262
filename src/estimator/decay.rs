//! Decay factors under the random (Poisson) and coherent models.
//!
//! Under Poisson statistics k-tuple density scales as 1/ln^k(N), so the
//! density ratio between the two scales is ratio^k. The coherent model
//! replaces the integer k with the correlation exponent α.

use tracing::debug;

use crate::types::{DecayComparison, DecayFactor};

/// Random-model decay factor for a single tuple order.
///
/// Orders above `i32::MAX` saturate; `Estimator::validate` rejects them.
pub fn random_decay(ratio: f64, order: u32) -> DecayFactor {
    let exponent = i32::try_from(order).unwrap_or(i32::MAX);
    DecayFactor {
        order,
        factor: ratio.powi(exponent),
    }
}

/// Random-model decay factors for each order, in the given order.
pub fn random_decays(ratio: f64, orders: &[u32]) -> Vec<DecayFactor> {
    orders
        .iter()
        .map(|&k| {
            let d = random_decay(ratio, k);
            debug!(
                order = k,
                factor = d.factor,
                sparsity = d.sparsity(),
                "Random decay"
            );
            d
        })
        .collect()
}

/// Coherent decay ratio^α.
pub fn coherent_decay(ratio: f64, alpha: f64) -> f64 {
    ratio.powf(alpha)
}

/// Doublet (k = 2) random decay next to the coherent decay.
pub fn compare(ratio: f64, alpha: f64) -> DecayComparison {
    DecayComparison {
        random: random_decay(ratio, 2).factor,
        coherent: coherent_decay(ratio, alpha),
    }
}
