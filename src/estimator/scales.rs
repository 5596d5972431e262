//! Reference and target scales in natural-log space.

use std::f64::consts::LN_10;

use crate::types::{EstimatorError, LogScales, ScaleParams};

impl ScaleParams {
    /// Convert the decimal exponents to ln(N₁), ln(N₂) and their ratio.
    ///
    /// ln(10^e) is taken as e * ln(10) so that 10^44 never has to be
    /// materialised as a float.
    pub fn log_scales(&self) -> Result<LogScales, EstimatorError> {
        for exp in [self.reference_exponent, self.target_exponent] {
            if exp == 0 {
                return Err(EstimatorError::NonPositiveScale(exp));
            }
        }
        if self.target_exponent <= self.reference_exponent {
            return Err(EstimatorError::ScaleOrdering {
                reference: self.reference_exponent,
                target: self.target_exponent,
            });
        }

        let ln_reference = self.reference_exponent as f64 * LN_10;
        let ln_target = self.target_exponent as f64 * LN_10;

        Ok(LogScales {
            ln_reference,
            ln_target,
            ratio: ln_reference / ln_target,
        })
    }
}
