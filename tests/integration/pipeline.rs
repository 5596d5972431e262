//! End-to-end runs: default literals → report → rendered text → export.

use boost_estimator::config::AppConfig;
use boost_estimator::estimator::Estimator;
use boost_estimator::report;
use boost_estimator::storage;
use boost_estimator::types::{BoostReport, EnhancementMethod, EstimatorInputs};

fn temp_path(ext: &str) -> String {
    let mut p = std::env::temp_dir();
    p.push(format!("boost_it_{}.{ext}", uuid::Uuid::new_v4()));
    p.to_string_lossy().to_string()
}

#[test]
fn test_reference_values() {
    let report = Estimator::new(EstimatorInputs::default()).run().unwrap();

    assert!((report.scales.ln_reference - 20.72).abs() < 0.01);
    assert!((report.scales.ln_target - 101.32).abs() < 0.01);
    assert!((report.scales.ratio - 0.2045).abs() < 1e-4);

    let e1 = report.estimate(EnhancementMethod::DecayRatio).unwrap();
    let e2 = report.estimate(EnhancementMethod::Screening).unwrap();
    let e3 = report.estimate(EnhancementMethod::Combined).unwrap();
    assert_eq!(e2, (47.0_f64 / 15.5).powi(2));
    assert!((e2 - 9.19).abs() < 0.01);

    let mean = (e1 + e2 + e3) / 3.0;
    assert!((report.summary.mean - mean).abs() < 1e-12);
    let (lo, hi) = report.summary.range;
    assert!(lo <= e1.min(e2).min(e3));
    assert!(e1.max(e2).max(e3) <= hi);
}

#[test]
fn test_coherent_between_random_orders() {
    let report = Estimator::default().run().unwrap();
    let k2 = report.random_decays.iter().find(|d| d.order == 2).unwrap().factor;
    let k3 = report.random_decays.iter().find(|d| d.order == 3).unwrap().factor;
    assert!(k3 < report.comparison.coherent && report.comparison.coherent < k2);
}

#[test]
fn test_rendered_output_is_byte_identical() {
    let first = report::render(&Estimator::default().run().unwrap());
    let second = report::render(&Estimator::default().run().unwrap());
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_rendered_report_sections_in_order() {
    let out = report::render(&Estimator::default().run().unwrap());
    let titles = [
        "ENHANCEMENT FACTOR CALCULATION AT n ~ 10^44",
        "1. OBSERVED DATA",
        "2. REFERENCE SCALES",
        "3. RANDOM MODEL (Poisson)",
        "4. COHERENT MODEL",
        "5. ENHANCEMENT FACTOR",
        "FINAL ESTIMATE",
        "SUMMARY TABLE",
    ];
    let positions: Vec<usize> = titles
        .iter()
        .map(|t| out.find(t).unwrap_or_else(|| panic!("missing section {t}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn test_config_drives_export() {
    let config_path = temp_path("toml");
    let export_path = temp_path("json");
    std::fs::write(&config_path, format!("[export]\npath = {export_path:?}\n")).unwrap();

    let cfg = AppConfig::load_or_default(&config_path).unwrap();
    let report = Estimator::default().run().unwrap();
    storage::save_report(&report, cfg.export.path.as_deref()).unwrap();

    let json = std::fs::read_to_string(&export_path).unwrap();
    let loaded: BoostReport = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded.inputs, report.inputs);

    std::fs::remove_file(&export_path).unwrap();
    std::fs::remove_file(&config_path).unwrap();
}
