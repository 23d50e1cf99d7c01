use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::input::Catalog;
use crate::pipeline::stage3_pivot::Matrix;

/// Rank tables built once from catalog declaration order. Explicit
/// ranks keep the sort deterministic regardless of how observations
/// were discovered; anything unranked sorts last.
struct RankTables<'a> {
    antibiotic_class: HashMap<&'a str, usize>,
    organism_super_class: HashMap<&'a str, usize>,
    organism_class: HashMap<&'a str, usize>,
}

impl<'a> RankTables<'a> {
    fn build(catalog: &'a Catalog) -> Self {
        let antibiotic_class = catalog
            .antibiotic_classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.as_str(), i))
            .collect();

        // Parentless organism classes are the super-classes; parented
        // ones are the leaf classes. Each side is ranked separately.
        let organism_super_class = catalog
            .organism_classes
            .iter()
            .filter(|c| c.parent_id.is_none())
            .enumerate()
            .map(|(i, c)| (c.id.as_str(), i))
            .collect();
        let organism_class = catalog
            .organism_classes
            .iter()
            .filter(|c| c.parent_id.is_some())
            .enumerate()
            .map(|(i, c)| (c.id.as_str(), i))
            .collect();

        RankTables {
            antibiotic_class,
            organism_super_class,
            organism_class,
        }
    }
}

const UNRANKED: usize = usize::MAX;

/// Reorders the matrix axes into the hierarchy-consistent total order:
/// rows by (antibiotic-class rank, code), columns by (super-class rank,
/// class rank, code). Both axes stay restricted to the keys already in
/// the matrix.
pub fn order_matrix(mut matrix: Matrix, catalog: &Catalog) -> Matrix {
    let ranks = RankTables::build(catalog);
    let mut warned_classes: HashSet<String> = HashSet::new();

    let mut rows: Vec<String> = matrix.row_keys().to_vec();
    rows.sort_by_key(|code| (antibiotic_rank(catalog, &ranks, code), code.clone()));

    let mut cols: Vec<String> = matrix.col_keys().to_vec();
    cols.sort_by_key(|code| {
        let (super_rank, class_rank) = organism_ranks(catalog, &ranks, code, &mut warned_classes);
        (super_rank, class_rank, code.clone())
    });

    matrix.reorder(rows, cols);
    matrix
}

fn antibiotic_rank(catalog: &Catalog, ranks: &RankTables<'_>, code: &str) -> usize {
    let Some(antibiotic) = catalog.antibiotic(code) else {
        warn!("observed antibiotic `{code}` is not in the catalog; sorting last");
        return UNRANKED;
    };
    match ranks.antibiotic_class.get(antibiotic.class_id.as_str()) {
        Some(&rank) => rank,
        None => {
            warn!(
                "antibiotic `{code}` has unknown class `{}`; sorting last",
                antibiotic.class_id
            );
            UNRANKED
        }
    }
}

fn organism_ranks(
    catalog: &Catalog,
    ranks: &RankTables<'_>,
    code: &str,
    warned_classes: &mut HashSet<String>,
) -> (usize, usize) {
    let Some(organism) = catalog.organism(code) else {
        warn!("observed organism `{code}` is not in the catalog; sorting last");
        return (UNRANKED, UNRANKED);
    };

    let class_rank = ranks
        .organism_class
        .get(organism.class_id.as_str())
        .copied()
        .unwrap_or(UNRANKED);

    let super_rank = match catalog.super_class_of(&organism.class_id) {
        Some(super_class) => ranks
            .organism_super_class
            .get(super_class.id.as_str())
            .copied()
            .unwrap_or(UNRANKED),
        None => {
            if warned_classes.insert(organism.class_id.clone()) {
                warn!(
                    "organism class `{}` has no parentless super-class \
                     (two-level hierarchy breached or class unknown); sorting last",
                    organism.class_id
                );
            }
            UNRANKED
        }
    };

    (super_rank, class_rank)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_order.rs"]
mod tests;
