//! Structural boost factor estimator.
//!
//! Entry point. Loads configuration, initialises structured logging,
//! runs the estimator over the fixed Q47 literals and prints the report.
//! Logs go to stderr; stdout carries only the report.

use anyhow::Result;
use tracing::info;

use boost_estimator::config;
use boost_estimator::estimator::Estimator;
use boost_estimator::report;
use boost_estimator::storage;

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let config_path = config::AppConfig::path_from_env();
    let cfg = config::AppConfig::load_or_default(&config_path)?;

    init_logging(&cfg);
    info!(config = %config_path, "Boost estimator starting");

    let estimator = Estimator::default();
    let boost = estimator.run()?;

    print!("{}", report::render(&boost));

    if let Some(path) = cfg.export.path.as_deref() {
        storage::save_report(&boost, Some(path))?;
    }

    info!(summary = %boost.summary, "Done");
    Ok(())
}

/// Initialise the `tracing` subscriber on stderr.
fn init_logging(cfg: &config::AppConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.filter));

    let json_logging = cfg.logging.json || std::env::var("BOOST_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
