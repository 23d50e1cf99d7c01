use super::*;
use crate::input::ObservationRow;

fn row(organism: &str, antibiotic: &str, value: Option<f64>) -> ObservationRow {
    ObservationRow {
        organism_code: organism.to_string(),
        antibiotic_code: antibiotic.to_string(),
        resistance_pct: value,
    }
}

#[test]
fn test_pivot_is_dense_with_absent_cells() {
    let merged = MergedObservationSet::from_rows(vec![
        row("ECO", "AMP", Some(15.0)),
        row("SAU", "CIP", Some(3.0)),
    ]);
    let matrix = pivot(&merged);

    assert_eq!(matrix.n_rows(), 2);
    assert_eq!(matrix.n_cols(), 2);
    assert_eq!(matrix.get("AMP", "ECO"), Some(15.0));
    assert_eq!(matrix.get("CIP", "SAU"), Some(3.0));
    // Never observed: absent, not zero.
    assert_eq!(matrix.get("AMP", "SAU"), None);
    assert_eq!(matrix.get("CIP", "ECO"), None);
}

#[test]
fn test_pivot_keys_are_distinct_codes() {
    let merged = MergedObservationSet::from_rows(vec![
        row("ECO", "AMP", Some(1.0)),
        row("ECO", "CIP", Some(2.0)),
        row("SAU", "AMP", Some(3.0)),
    ]);
    let matrix = pivot(&merged);

    assert_eq!(matrix.row_keys(), ["AMP", "CIP"]);
    assert_eq!(matrix.col_keys(), ["ECO", "SAU"]);
    assert_eq!(matrix.observed_cells(), 3);
}

#[test]
fn test_pivot_keeps_observed_no_data_cells() {
    let merged = MergedObservationSet::from_rows(vec![row("ECO", "AMP", None)]);
    let matrix = pivot(&merged);
    assert_eq!(matrix.n_rows(), 1);
    assert_eq!(matrix.get("AMP", "ECO"), None);
    assert_eq!(matrix.observed_cells(), 0);
}

#[test]
fn test_reorder_permutes_cells_consistently() {
    let merged = MergedObservationSet::from_rows(vec![
        row("ECO", "AMP", Some(1.0)),
        row("SAU", "AMP", Some(2.0)),
        row("ECO", "CIP", Some(3.0)),
    ]);
    let mut matrix = pivot(&merged);
    matrix.reorder(
        vec!["CIP".to_string(), "AMP".to_string()],
        vec!["SAU".to_string(), "ECO".to_string()],
    );

    assert_eq!(matrix.row_keys(), ["CIP", "AMP"]);
    assert_eq!(matrix.col_keys(), ["SAU", "ECO"]);
    assert_eq!(matrix.cell(0, 1), Some(3.0));
    assert_eq!(matrix.cell(1, 0), Some(2.0));
    assert_eq!(matrix.get("AMP", "ECO"), Some(1.0));
}
