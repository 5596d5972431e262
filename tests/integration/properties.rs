//! Property-based tests for the decay and enhancement invariants.

use proptest::prelude::*;

use boost_estimator::estimator::{decay, enhancement, Estimator};
use boost_estimator::report;
use boost_estimator::types::{EstimatorInputs, ModelParams, ScaleParams};

/// Strategy: reference exponent and a strictly larger target exponent.
fn scales_strategy() -> impl Strategy<Value = ScaleParams> {
    (1..60u32, 1..60u32).prop_map(|(reference, gap)| ScaleParams {
        reference_exponent: reference,
        target_exponent: reference + gap,
    })
}

/// Strategy: model parameters with α strictly between 2 and 3.
fn model_strategy() -> impl Strategy<Value = ModelParams> {
    (2.01..2.99f64, 1..200u32, 1.0..100.0f64).prop_map(|(alpha, modulus, effective_modulus)| {
        ModelParams { alpha, modulus, effective_modulus }
    })
}

proptest! {
    // 1. Ratio lies in (0, 1) whenever target > reference
    #[test]
    fn ratio_in_unit_interval(scales in scales_strategy()) {
        let s = scales.log_scales().unwrap();
        prop_assert!(s.ratio > 0.0 && s.ratio < 1.0, "ratio={}", s.ratio);
    }

    // 2. Random decay strictly decreasing in k
    #[test]
    fn random_decay_decreasing(scales in scales_strategy()) {
        let s = scales.log_scales().unwrap();
        let decays = decay::random_decays(s.ratio, &[1, 2, 3, 4]);
        prop_assert!(decays.windows(2).all(|w| w[1].factor < w[0].factor));
    }

    // 3. Coherent decay between the k=3 and k=2 random decays for 2 < α < 3
    #[test]
    fn coherent_between_k2_and_k3(scales in scales_strategy(), model in model_strategy()) {
        let s = scales.log_scales().unwrap();
        let c = decay::compare(s.ratio, model.alpha);
        let k3 = decay::random_decay(s.ratio, 3).factor;
        prop_assert!(c.coherent < c.random, "coherent={} k2={}", c.coherent, c.random);
        prop_assert!(c.coherent > k3, "coherent={} k3={}", c.coherent, k3);
    }

    // 4. Estimates positive and finite, range brackets them, mean is the mean
    #[test]
    fn summary_brackets_estimates(scales in scales_strategy(), model in model_strategy()) {
        let inputs = EstimatorInputs { scales, model, ..EstimatorInputs::default() };
        let report = Estimator::new(inputs).run().unwrap();
        let values: Vec<f64> = report.estimates.iter().map(|e| e.value).collect();

        prop_assert!(values.iter().all(|v| v.is_finite() && *v > 0.0), "{values:?}");
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        prop_assert!((report.summary.mean - mean).abs() <= 1e-9 * mean.abs().max(1.0));

        let (lo, hi) = report.summary.range;
        prop_assert!(values.iter().all(|&v| lo <= v && v <= hi), "range=({lo}, {hi}) values={values:?}");
    }

    // 5. Screening estimate depends only on q / q_eff
    #[test]
    fn screening_independent_of_scales(scales in scales_strategy(), model in model_strategy()) {
        let s = scales.log_scales().unwrap();
        let c = decay::compare(s.ratio, model.alpha);
        let e = enhancement::estimate(&c, &model);
        prop_assert_eq!(e[1].value, model.screening_factor().powi(2));
    }

    // 6. Any order the estimator accepts decays below the ratio itself
    #[test]
    fn accepted_orders_decay(scales in scales_strategy(), order in 1..=u32::MAX) {
        let inputs = EstimatorInputs { scales, tuple_orders: vec![order], ..EstimatorInputs::default() };
        match Estimator::new(inputs).run() {
            Ok(report) => {
                let d = &report.random_decays[0];
                prop_assert!(d.factor <= report.scales.ratio, "order={order} factor={}", d.factor);
            }
            Err(e) => prop_assert!(order > i32::MAX as u32, "order={order} rejected: {e}"),
        }
    }

    // 7. Rendering is deterministic
    #[test]
    fn render_deterministic(scales in scales_strategy(), model in model_strategy()) {
        let inputs = EstimatorInputs { scales, model, ..EstimatorInputs::default() };
        let report = Estimator::new(inputs).run().unwrap();
        prop_assert_eq!(report::render(&report), report::render(&report));
    }
}
