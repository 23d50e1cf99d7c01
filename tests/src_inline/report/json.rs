use super::*;
use crate::input::ObservationRow;
use crate::model::records::Locale;
use crate::pipeline::stage2_merge::MergedObservationSet;
use crate::pipeline::stage3_pivot::pivot;

fn row(organism: &str, antibiotic: &str, value: Option<f64>) -> ObservationRow {
    ObservationRow {
        organism_code: organism.to_string(),
        antibiotic_code: antibiotic.to_string(),
        resistance_pct: value,
    }
}

#[test]
fn test_band_counts_cover_all_cells() {
    let merged = MergedObservationSet::from_rows(vec![
        row("ECO", "AMP", Some(100.0)),
        row("ECO", "CIP", Some(25.0)),
        row("SAU", "AMP", Some(12.0)),
        row("SAU", "GEN", Some(3.0)),
    ]);
    let matrix = pivot(&merged);

    let counts = band_counts(&matrix);
    assert_eq!(counts.intrinsic, 1);
    assert_eq!(counts.high, 1);
    assert_eq!(counts.medium, 1);
    assert_eq!(counts.low, 1);
    // 3x2 grid, four observed cells, two gaps.
    assert_eq!(counts.no_data, 2);
}

#[test]
fn test_summary_serializes_to_stable_json() {
    let summary = RunSummary {
        tool: "abgram",
        version: "0.1.0",
        target: "de".to_string(),
        merged_sources: vec!["eu".to_string(), "de".to_string()],
        locales: vec![Locale::De, Locale::En],
        n_antibiotics: 2,
        n_organisms: 3,
        n_observed_cells: 4,
        bands: BandCounts {
            intrinsic: 1,
            high: 1,
            medium: 1,
            low: 1,
            no_data: 2,
        },
    };

    let json = render_summary_json(&summary).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["tool"], "abgram");
    assert_eq!(parsed["locales"][0], "de");
    assert_eq!(parsed["merged_sources"][1], "de");
    assert_eq!(parsed["bands"]["no_data"], 2);
    assert_eq!(parsed["n_observed_cells"], 4);
}
