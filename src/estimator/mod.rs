//! Estimator: scales → decay factors → enhancement estimates → summary.

pub mod decay;
pub mod enhancement;
pub mod scales;

use tracing::{debug, info};

use crate::types::{BoostReport, EstimatorError, EstimatorInputs};

// ---------------------------------------------------------------------------
// Estimator
// ---------------------------------------------------------------------------

/// Runs the straight-line boost factor calculation over a set of inputs.
///
/// The calculation is a pure function of `inputs`: running it twice yields
/// identical reports.
pub struct Estimator {
    inputs: EstimatorInputs,
}

impl Estimator {
    pub fn new(inputs: EstimatorInputs) -> Self {
        Self { inputs }
    }

    /// Access the inputs.
    pub fn inputs(&self) -> &EstimatorInputs {
        &self.inputs
    }

    /// Check the model parameters and tuple orders.
    ///
    /// Scale exponents are checked by `ScaleParams::log_scales`.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        let model = &self.inputs.model;

        if !(model.alpha.is_finite() && model.alpha > 0.0) {
            return Err(EstimatorError::InvalidParameter { name: "alpha", value: model.alpha });
        }
        if model.modulus == 0 {
            return Err(EstimatorError::InvalidParameter { name: "q", value: 0.0 });
        }
        if !(model.effective_modulus.is_finite() && model.effective_modulus > 0.0) {
            return Err(EstimatorError::InvalidParameter {
                name: "q_eff",
                value: model.effective_modulus,
            });
        }

        if self.inputs.tuple_orders.is_empty() {
            return Err(EstimatorError::NoOrders);
        }
        // powi takes an i32 exponent.
        if let Some(&k) = self
            .inputs
            .tuple_orders
            .iter()
            .find(|&&k| k == 0 || i32::try_from(k).is_err())
        {
            return Err(EstimatorError::InvalidOrder(k));
        }

        Ok(())
    }

    /// Run the full calculation.
    pub fn run(&self) -> Result<BoostReport, EstimatorError> {
        self.validate()?;

        let scales = self.inputs.scales.log_scales()?;
        debug!(
            ln_reference = scales.ln_reference,
            ln_target = scales.ln_target,
            ratio = scales.ratio,
            "Reference scales"
        );

        let random_decays = decay::random_decays(scales.ratio, &self.inputs.tuple_orders);
        let comparison = decay::compare(scales.ratio, self.inputs.model.alpha);
        debug!(
            random = comparison.random,
            coherent = comparison.coherent,
            alpha = self.inputs.model.alpha,
            "Doublet decay"
        );

        let estimates = enhancement::estimate(&comparison, &self.inputs.model).to_vec();
        let summary = enhancement::summarize(&estimates);

        for e in &estimates {
            if !e.value.is_finite() {
                return Err(EstimatorError::NonFinite("enhancement estimate"));
            }
        }
        if !(summary.mean.is_finite() && summary.range.0.is_finite() && summary.range.1.is_finite()) {
            return Err(EstimatorError::NonFinite("summary"));
        }

        info!(
            mean = format!("{:.2}", summary.mean),
            low = format!("{:.2}", summary.range.0),
            high = format!("{:.2}", summary.range.1),
            "Boost factor estimated"
        );

        Ok(BoostReport {
            inputs: self.inputs.clone(),
            scales,
            random_decays,
            comparison,
            estimates,
            summary,
        })
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(EstimatorInputs::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
