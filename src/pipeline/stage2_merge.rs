use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use crate::input::{ObservationRow, load_observations};
use crate::model::records::DataSourceNode;
use crate::pipeline::PipelineError;

/// Deduplicated observations keyed by (organism_code, antibiotic_code).
/// Iteration follows first-seen key order, so a merge over the same
/// inputs is byte-for-byte reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedObservationSet {
    keys: Vec<(String, String)>,
    values: HashMap<(String, String), Option<f64>>,
    /// Ids of the sources that actually contributed rows, root-to-target.
    pub merged_sources: Vec<String>,
}

impl MergedObservationSet {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn get(&self, organism_code: &str, antibiotic_code: &str) -> Option<Option<f64>> {
        self.values
            .get(&(organism_code.to_string(), antibiotic_code.to_string()))
            .copied()
    }

    /// (organism_code, antibiotic_code) → value, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&(String, String), Option<f64>)> {
        self.keys.iter().map(|k| (k, self.values[k]))
    }

    /// Builds a set from already-loaded rows, applying the same
    /// last-write-wins collapse as a file merge.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = ObservationRow>,
    {
        let mut set = MergedObservationSet::default();
        for row in rows {
            set.insert(row.organism_code, row.antibiotic_code, row.resistance_pct);
        }
        set
    }

    fn insert(&mut self, organism_code: String, antibiotic_code: String, value: Option<f64>) {
        let key = (organism_code, antibiotic_code);
        if !self.values.contains_key(&key) {
            self.keys.push(key.clone());
        }
        // Last write wins: ancestors are merged root-to-target, so the
        // most specific source overrides inherited data.
        self.values.insert(key, value);
    }
}

/// Merges the observation tables of an ancestor chain, root-to-target.
/// A missing or unreadable backing file skips that ancestor; the run
/// only fails when no ancestor contributed anything.
pub fn merge_observations(
    data_dir: &Path,
    chain: &[&DataSourceNode],
) -> Result<MergedObservationSet, PipelineError> {
    let mut merged = MergedObservationSet::default();

    for node in chain {
        if node.source_file.is_empty() {
            warn!("data source `{}` has no backing file; skipping", node.id);
            continue;
        }
        let path = data_dir.join(&node.source_file);
        if !path.exists() {
            warn!(
                "observation file {} for source `{}` not found; skipping",
                path.display(),
                node.id
            );
            continue;
        }
        let rows = match load_observations(&path) {
            Ok(rows) => rows,
            Err(err) => {
                warn!("skipping source `{}`: {err}", node.id);
                continue;
            }
        };
        info!(
            "merged {} observation rows from source `{}`",
            rows.len(),
            node.id
        );
        for row in rows {
            merged.insert(row.organism_code, row.antibiotic_code, row.resistance_pct);
        }
        merged.merged_sources.push(node.id.clone());
    }

    if merged.is_empty() {
        let target = chain.last().map(|n| n.id.clone()).unwrap_or_default();
        return Err(PipelineError::NoObservations(target));
    }
    Ok(merged)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_merge.rs"]
mod tests;
