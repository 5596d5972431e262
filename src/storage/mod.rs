//! Report export.
//!
//! Writes the computed `BoostReport` to a pretty-printed JSON file. Export
//! is optional and only happens when a path is configured.

use anyhow::{Context, Result};
use tracing::info;

use crate::types::BoostReport;

/// Default export file path.
pub const DEFAULT_EXPORT_FILE: &str = "boost_report.json";

/// Save a report to a JSON file.
pub fn save_report(report: &BoostReport, path: Option<&str>) -> Result<()> {
    let path = path.unwrap_or(DEFAULT_EXPORT_FILE);
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialise boost report")?;

    std::fs::write(path, &json)
        .context(format!("Failed to write report to {path}"))?;

    info!(path, mean = report.summary.mean, "Report exported");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
