//! Report rendering

use cstore_types::ValidationReport;
use std::io::{self, Write};

/// Output renderer for validation reports
#[derive(Clone, Copy)]
pub struct ReportRenderer {
    /// Use JSON output format
    json_output: bool,
}

impl ReportRenderer {
    /// Create new report renderer
    pub fn new(json_output: bool) -> Self {
        Self { json_output }
    }

    /// Render the report to `out`
    pub fn render<W: Write>(&self, report: &ValidationReport, out: &mut W) -> io::Result<()> {
        if self.json_output {
            Self::render_json(report, out)
        } else {
            Self::render_text(report, out)
        }
    }

    fn render_json<W: Write>(report: &ValidationReport, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
        writeln!(out, "{json}")
    }

    fn render_text<W: Write>(report: &ValidationReport, out: &mut W) -> io::Result<()> {
        writeln!(out, "Total files: {}", report.total)?;
        writeln!(out, "Validated: {}", report.validated)?;

        if report.mismatches.is_empty() {
            writeln!(out, "NOK: 0")?;
        } else {
            for mismatch in &report.mismatches {
                writeln!(
                    out,
                    "NOK: {}, {}, {}",
                    mismatch.path.display(),
                    mismatch.expected,
                    mismatch.actual
                )?;
            }
        }

        if report.orphans.is_empty() {
            writeln!(out, "Orphans: 0")?;
        } else {
            for orphan in &report.orphans {
                writeln!(
                    out,
                    "Orphans: {}, {}",
                    orphan.path.display(),
                    orphan.reference
                )?;
            }
        }

        out.flush()
    }
}
