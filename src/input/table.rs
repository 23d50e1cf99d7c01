use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::input::InputError;

/// A delimited table held as a header row plus raw string records.
/// Field access goes through the header so column order in the source
/// file never matters.
#[derive(Debug, Clone)]
pub struct Table {
    pub path: PathBuf,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Case-insensitive header lookup.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
    }

    /// First matching column among several accepted spellings.
    pub fn column_any(&self, names: &[&str]) -> Option<usize> {
        names.iter().find_map(|n| self.column(n))
    }

    pub fn require_column(&self, name: &str) -> Result<usize, InputError> {
        self.column(name)
            .ok_or_else(|| InputError::missing_column(&self.path, name))
    }

    pub fn field<'a>(&self, row: &'a [String], idx: usize) -> &'a str {
        row.get(idx).map(String::as_str).unwrap_or("")
    }
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path).map_err(|e| InputError::io(path, e))?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Resolves `name` inside `dir`, accepting a gzipped variant when the
/// plain file is absent.
pub fn resolve_table_path(dir: &Path, name: &str) -> PathBuf {
    let plain = dir.join(name);
    if plain.exists() {
        return plain;
    }
    let gz = dir.join(format!("{name}.gz"));
    if gz.exists() { gz } else { plain }
}

pub fn read_table(path: &Path) -> Result<Table, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();

    let read = reader
        .read_line(&mut buf)
        .map_err(|e| InputError::io(path, e))?;
    if read == 0 {
        return Err(InputError::parse(path, "table is empty"));
    }
    let columns = split_record(buf.trim_end_matches(['\r', '\n']));
    if columns.iter().all(String::is_empty) {
        return Err(InputError::parse(path, "table header is empty"));
    }

    let mut rows = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_line(&mut buf)
            .map_err(|e| InputError::io(path, e))?;
        if read == 0 {
            break;
        }
        let line = buf.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            continue;
        }
        rows.push(split_record(line));
    }

    Ok(Table {
        path: path.to_path_buf(),
        columns,
        rows,
    })
}

/// Splits one comma-delimited record. Double-quoted fields may contain
/// commas and `""` escapes; fields are trimmed.
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if quoted {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    quoted = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => quoted = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }
    fields.push(field);

    for f in &mut fields {
        let trimmed = f.trim();
        if trimmed.len() != f.len() {
            *f = trimmed.to_string();
        }
    }
    fields
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/table.rs"]
mod tests;
