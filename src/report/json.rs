use serde::Serialize;

use crate::model::records::Locale;
use crate::model::thresholds::{ResistanceBand, classify};
use crate::pipeline::stage3_pivot::Matrix;
use crate::report::ReportInputs;

/// Machine-readable companion to the HTML reports: what was merged,
/// matrix shape, and the severity-band histogram over all cells.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RunSummary {
    pub tool: &'static str,
    pub version: &'static str,
    pub target: String,
    pub merged_sources: Vec<String>,
    pub locales: Vec<Locale>,
    pub n_antibiotics: usize,
    pub n_organisms: usize,
    pub n_observed_cells: usize,
    pub bands: BandCounts,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct BandCounts {
    pub intrinsic: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub no_data: usize,
}

pub fn band_counts(matrix: &Matrix) -> BandCounts {
    let mut counts = BandCounts::default();
    for row in 0..matrix.n_rows() {
        for col in 0..matrix.n_cols() {
            match classify(matrix.cell(row, col)) {
                ResistanceBand::Intrinsic => counts.intrinsic += 1,
                ResistanceBand::High => counts.high += 1,
                ResistanceBand::Medium => counts.medium += 1,
                ResistanceBand::Low => counts.low += 1,
                ResistanceBand::NoData => counts.no_data += 1,
            }
        }
    }
    counts
}

impl RunSummary {
    pub fn collect(inputs: &ReportInputs<'_>) -> RunSummary {
        RunSummary {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            target: inputs.target_id.to_string(),
            merged_sources: inputs.merged_sources.to_vec(),
            locales: inputs.locales.to_vec(),
            n_antibiotics: inputs.matrix.n_rows(),
            n_organisms: inputs.matrix.n_cols(),
            n_observed_cells: inputs.matrix.observed_cells(),
            bands: band_counts(inputs.matrix),
        }
    }
}

pub fn render_summary_json(summary: &RunSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
