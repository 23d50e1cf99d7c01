use std::collections::HashMap;

use crate::pipeline::stage2_merge::MergedObservationSet;

/// Dense antibiotic × organism grid. Rows are antibiotic codes, columns
/// organism codes; a cell with no observation is `None`, never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    row_keys: Vec<String>,
    col_keys: Vec<String>,
    cells: Vec<Option<f64>>,
    row_index: HashMap<String, usize>,
    col_index: HashMap<String, usize>,
}

impl Matrix {
    pub fn n_rows(&self) -> usize {
        self.row_keys.len()
    }

    pub fn n_cols(&self) -> usize {
        self.col_keys.len()
    }

    pub fn row_keys(&self) -> &[String] {
        &self.row_keys
    }

    pub fn col_keys(&self) -> &[String] {
        &self.col_keys
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.cells[row * self.col_keys.len() + col]
    }

    pub fn get(&self, antibiotic_code: &str, organism_code: &str) -> Option<f64> {
        let row = *self.row_index.get(antibiotic_code)?;
        let col = *self.col_index.get(organism_code)?;
        self.cell(row, col)
    }

    pub fn observed_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Permutes both axes into the given orders. The new key lists must
    /// be permutations of the current ones.
    pub(crate) fn reorder(&mut self, new_rows: Vec<String>, new_cols: Vec<String>) {
        debug_assert_eq!(new_rows.len(), self.row_keys.len());
        debug_assert_eq!(new_cols.len(), self.col_keys.len());

        let mut cells = Vec::with_capacity(self.cells.len());
        for ab in &new_rows {
            let old_row = self.row_index[ab];
            for org in &new_cols {
                let old_col = self.col_index[org];
                cells.push(self.cells[old_row * self.col_keys.len() + old_col]);
            }
        }

        self.row_index = index_of(&new_rows);
        self.col_index = index_of(&new_cols);
        self.row_keys = new_rows;
        self.col_keys = new_cols;
        self.cells = cells;
    }
}

fn index_of(keys: &[String]) -> HashMap<String, usize> {
    keys.iter()
        .enumerate()
        .map(|(i, k)| (k.clone(), i))
        .collect()
}

/// Pivots the merged triples into a dense matrix. Axis keys appear in
/// first-observed order; the hierarchy sort reorders them afterwards.
pub fn pivot(merged: &MergedObservationSet) -> Matrix {
    let mut row_keys: Vec<String> = Vec::new();
    let mut col_keys: Vec<String> = Vec::new();
    let mut row_index: HashMap<String, usize> = HashMap::new();
    let mut col_index: HashMap<String, usize> = HashMap::new();

    for ((organism, antibiotic), _) in merged.iter() {
        if !row_index.contains_key(antibiotic) {
            row_index.insert(antibiotic.clone(), row_keys.len());
            row_keys.push(antibiotic.clone());
        }
        if !col_index.contains_key(organism) {
            col_index.insert(organism.clone(), col_keys.len());
            col_keys.push(organism.clone());
        }
    }

    let mut cells = vec![None; row_keys.len() * col_keys.len()];
    for ((organism, antibiotic), value) in merged.iter() {
        let row = row_index[antibiotic];
        let col = col_index[organism];
        cells[row * col_keys.len() + col] = value;
    }

    Matrix {
        row_keys,
        col_keys,
        cells,
        row_index,
        col_index,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_pivot.rs"]
mod tests;
