//! Markdown summary table.

use std::fmt;

use crate::types::BoostReport;

const WIDTHS: [usize; 3] = [23, 14, 23];

pub struct SummaryTable<'a> {
    report: &'a BoostReport,
}

impl<'a> SummaryTable<'a> {
    pub fn new(report: &'a BoostReport) -> Self {
        Self { report }
    }

    /// Table rows as (parameter, value, note).
    pub fn rows(&self) -> Vec<[String; 3]> {
        let inputs = &self.report.inputs;
        let scales = &self.report.scales;
        let summary = &self.report.summary;

        let row = |p: &str, v: String, n: &str| [p.to_string(), v, n.to_string()];
        vec![
            row("Reference scale N₁", format!("10^{}", inputs.scales.reference_exponent), "Full scan range"),
            row("Deep space scale N₂", format!("10^{}", inputs.scales.target_exponent), "Theoretical target"),
            row("ln(N₁)", format!("{:.1}", scales.ln_reference), ""),
            row("ln(N₂)", format!("{:.1}", scales.ln_target), ""),
            row("Correlation exponent α", inputs.model.alpha.to_string(), "From r = 0.994"),
            row("Effective modulus q_eff", inputs.model.effective_modulus.to_string(), "≈ q/3"),
            row("Enhancement factor", format!("~{:.0}×", summary.mean), "Central value"),
            row(
                "Enhancement range",
                format!("{:.0}–{:.0}×", summary.range.0, summary.range.1),
                "Conservative estimate",
            ),
        ]
    }
}

impl fmt::Display for SummaryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "SUMMARY TABLE")?;
        writeln!(f, "{}", "-".repeat(50))?;
        writeln!(f)?;

        table_row(f, &["Parameter", "Value", "Note"])?;
        writeln!(
            f,
            "|{}|{}|{}|",
            "-".repeat(WIDTHS[0] + 2),
            "-".repeat(WIDTHS[1] + 2),
            "-".repeat(WIDTHS[2] + 2)
        )?;
        for [p, v, n] in self.rows() {
            table_row(f, &[p.as_str(), v.as_str(), n.as_str()])?;
        }
        Ok(())
    }
}

fn table_row(f: &mut fmt::Formatter<'_>, cells: &[&str; 3]) -> fmt::Result {
    writeln!(
        f,
        "| {:<w0$} | {:<w1$} | {:<w2$} |",
        cells[0],
        cells[1],
        cells[2],
        w0 = WIDTHS[0],
        w1 = WIDTHS[1],
        w2 = WIDTHS[2]
    )
}
