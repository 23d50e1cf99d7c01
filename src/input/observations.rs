use std::path::Path;

use tracing::warn;

use crate::input::InputError;
use crate::input::table::read_table;

const ORGANISM_COLUMNS: &[&str] = &["organism_code", "organism_id", "organism"];
const ANTIBIOTIC_COLUMNS: &[&str] = &["antibiotic_code", "antibiotic_id", "antibiotic"];
const RESISTANCE_COLUMNS: &[&str] = &["resistance_pct", "resistance_percent"];

/// One flat (organism, antibiotic, value) triple from a per-source
/// observation table. `None` means the source carries no rate for the
/// combination ("no data"), not zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRow {
    pub organism_code: String,
    pub antibiotic_code: String,
    pub resistance_pct: Option<f64>,
}

/// Loads one observation table, normalizing heterogeneous identifier
/// column names to the canonical keys. A table with no resistance
/// column at all lists intrinsic resistances only: every row it
/// contributes gets 100.0.
pub fn load_observations(path: &Path) -> Result<Vec<ObservationRow>, InputError> {
    let table = read_table(path)?;

    let organism = table
        .column_any(ORGANISM_COLUMNS)
        .ok_or_else(|| InputError::missing_column(path, "organism_code"))?;
    let antibiotic = table
        .column_any(ANTIBIOTIC_COLUMNS)
        .ok_or_else(|| InputError::missing_column(path, "antibiotic_code"))?;
    let resistance = table.column_any(RESISTANCE_COLUMNS);

    let mut out = Vec::with_capacity(table.rows.len());
    for (line, row) in table.rows.iter().enumerate() {
        let organism_code = table.field(row, organism);
        let antibiotic_code = table.field(row, antibiotic);
        if organism_code.is_empty() || antibiotic_code.is_empty() {
            warn!(
                "{}: row {} lacks an organism or antibiotic identifier; skipping",
                path.display(),
                line + 2
            );
            continue;
        }

        let resistance_pct = match resistance {
            None => Some(100.0),
            Some(idx) => parse_rate(table.field(row, idx), path, line + 2),
        };

        out.push(ObservationRow {
            organism_code: organism_code.to_string(),
            antibiotic_code: antibiotic_code.to_string(),
            resistance_pct,
        });
    }
    Ok(out)
}

fn parse_rate(raw: &str, path: &Path, line: usize) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(
                "{}: row {} has unparseable resistance value `{raw}`; treating as no data",
                path.display(),
                line
            );
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/observations.rs"]
mod tests;
