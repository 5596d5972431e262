//! Report rendering.
//!
//! Turns a `BoostReport` into the plain-text report and the markdown
//! summary table printed on stdout. Rendering is pure: the same report
//! always produces the same bytes.

pub mod format;
pub mod table;
pub mod text;

use crate::types::BoostReport;
use table::SummaryTable;
use text::TextReport;

/// Render the full report followed by the summary table.
pub fn render(report: &BoostReport) -> String {
    let mut out = TextReport::new(report).to_string();
    out.push_str(&summary_table(report));
    out
}

/// Render only the markdown summary table section.
pub fn summary_table(report: &BoostReport) -> String {
    SummaryTable::new(report).to_string()
}
