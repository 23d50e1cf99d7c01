use super::*;
use crate::input::{Catalog, ObservationRow};
use crate::model::records::{
    AntibioticClass, AntibioticRecord, LocalizedName, OrganismClass, OrganismRecord,
};
use crate::pipeline::stage2_merge::MergedObservationSet;
use crate::pipeline::stage3_pivot::pivot;

fn antibiotic(code: &str, class_id: &str) -> AntibioticRecord {
    AntibioticRecord {
        code: code.to_string(),
        class_id: class_id.to_string(),
        full_name: LocalizedName::new(code, code),
    }
}

fn organism(code: &str, class_id: &str) -> OrganismRecord {
    OrganismRecord {
        code: code.to_string(),
        class_id: class_id.to_string(),
        full_name: LocalizedName::new(code, code),
    }
}

fn antibiotic_class(id: &str) -> AntibioticClass {
    AntibioticClass {
        id: id.to_string(),
        name: LocalizedName::new(id, id),
    }
}

fn organism_class(id: &str, parent: Option<&str>) -> OrganismClass {
    OrganismClass {
        id: id.to_string(),
        parent_id: parent.map(str::to_string),
        name: LocalizedName::new(id, id),
    }
}

fn fixture_catalog() -> Catalog {
    Catalog::from_records(
        Vec::new(),
        vec![
            antibiotic("CIP", "chi"),
            antibiotic("AMP", "pen"),
            antibiotic("PIP", "pen"),
        ],
        vec![
            organism("SAU", "sta"),
            organism("ECO", "ent"),
            organism("KPN", "ent"),
            organism("EFA", "ent2"),
        ],
        // Declaration order: penicillins before quinolones.
        vec![antibiotic_class("pen"), antibiotic_class("chi")],
        // Super-classes: gram-negative declared before gram-positive.
        vec![
            organism_class("gn", None),
            organism_class("gp", None),
            organism_class("ent", Some("gn")),
            organism_class("ent2", Some("gp")),
            organism_class("sta", Some("gp")),
        ],
    )
}

fn row(organism: &str, antibiotic: &str) -> ObservationRow {
    ObservationRow {
        organism_code: organism.to_string(),
        antibiotic_code: antibiotic.to_string(),
        resistance_pct: Some(1.0),
    }
}

#[test]
fn test_rows_sorted_by_class_rank_then_code() {
    let catalog = fixture_catalog();
    let merged = MergedObservationSet::from_rows(vec![
        row("ECO", "CIP"),
        row("ECO", "PIP"),
        row("ECO", "AMP"),
    ]);

    let matrix = order_matrix(pivot(&merged), &catalog);
    // pen (rank 0) before chi (rank 1); within pen, AMP < PIP lexically.
    assert_eq!(matrix.row_keys(), ["AMP", "PIP", "CIP"]);
}

#[test]
fn test_cols_sorted_by_super_class_class_then_code() {
    let catalog = fixture_catalog();
    let merged = MergedObservationSet::from_rows(vec![
        row("SAU", "AMP"),
        row("EFA", "AMP"),
        row("KPN", "AMP"),
        row("ECO", "AMP"),
    ]);

    let matrix = order_matrix(pivot(&merged), &catalog);
    // gn before gp; within gn class ent: ECO < KPN; within gp, class
    // ent2 is declared before sta.
    assert_eq!(matrix.col_keys(), ["ECO", "KPN", "EFA", "SAU"]);
}

#[test]
fn test_axes_restricted_to_observed_keys() {
    let catalog = fixture_catalog();
    let merged = MergedObservationSet::from_rows(vec![row("ECO", "AMP")]);

    let matrix = order_matrix(pivot(&merged), &catalog);
    assert_eq!(matrix.row_keys(), ["AMP"]);
    assert_eq!(matrix.col_keys(), ["ECO"]);
}

#[test]
fn test_unknown_codes_sort_last() {
    let catalog = fixture_catalog();
    let merged = MergedObservationSet::from_rows(vec![
        row("ECO", "ZZZ"),
        row("ECO", "AMP"),
        row("XXX", "AMP"),
    ]);

    let matrix = order_matrix(pivot(&merged), &catalog);
    assert_eq!(matrix.row_keys(), ["AMP", "ZZZ"]);
    assert_eq!(matrix.col_keys(), ["ECO", "XXX"]);
    // Values survive the permutation.
    assert_eq!(matrix.get("AMP", "ECO"), Some(1.0));
    assert_eq!(matrix.get("ZZZ", "ECO"), Some(1.0));
}

#[test]
fn test_sort_is_deterministic_across_discovery_orders() {
    let catalog = fixture_catalog();
    let forward = MergedObservationSet::from_rows(vec![
        row("ECO", "AMP"),
        row("SAU", "CIP"),
        row("KPN", "PIP"),
    ]);
    let backward = MergedObservationSet::from_rows(vec![
        row("KPN", "PIP"),
        row("SAU", "CIP"),
        row("ECO", "AMP"),
    ]);

    let a = order_matrix(pivot(&forward), &catalog);
    let b = order_matrix(pivot(&backward), &catalog);
    assert_eq!(a.row_keys(), b.row_keys());
    assert_eq!(a.col_keys(), b.col_keys());
}
