pub mod html;
pub mod json;
pub mod locale;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::input::Catalog;
use crate::model::records::Locale;
use crate::pipeline::stage3_pivot::Matrix;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("report formatting failed: {0}")]
    Fmt(#[from] std::fmt::Error),
    #[error("summary serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ReportInputs<'a> {
    pub matrix: &'a Matrix,
    pub catalog: &'a Catalog,
    pub target_id: &'a str,
    pub merged_sources: &'a [String],
    pub locales: &'a [Locale],
    pub out_dir: &'a Path,
    pub base_name: &'a str,
    pub summary_json: bool,
}

/// Writes one HTML document per requested locale, plus the optional
/// machine-readable run summary. Rendering only reads the frozen,
/// already-ordered matrix, so locales are independent of each other.
pub fn write_reports(inputs: &ReportInputs<'_>) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(inputs.out_dir).map_err(|e| ReportError::Io {
        path: inputs.out_dir.display().to_string(),
        source: e,
    })?;

    let mut written = Vec::new();
    for &locale in inputs.locales {
        let document = html::render_html(inputs.matrix, inputs.catalog, locale)?;
        let path = inputs
            .out_dir
            .join(format!("{}_{locale}.html", inputs.base_name));
        write_file(&path, &document)?;
        info!("wrote {}", path.display());
        written.push(path);
    }

    if inputs.summary_json {
        let summary = json::RunSummary::collect(inputs);
        let path = inputs
            .out_dir
            .join(format!("{}_summary.json", inputs.base_name));
        write_file(&path, &json::render_summary_json(&summary)?)?;
        info!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    let io_err = |e| ReportError::Io {
        path: path.display().to_string(),
        source: e,
    };
    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    out.write_all(contents.as_bytes()).map_err(io_err)?;
    out.flush().map_err(io_err)
}

/// Collapses an already-ordered sequence of group ids into contiguous
/// (id, run length) spans for the header bands. Only neighboring equal
/// ids merge; equal ids separated by another group stay separate spans.
pub fn contiguous_spans<'a, I>(ids: I) -> Vec<(Option<&'a str>, usize)>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut spans: Vec<(Option<&'a str>, usize)> = Vec::new();
    for id in ids {
        match spans.last_mut() {
            Some((last, len)) if *last == id => *len += 1,
            _ => spans.push((id, 1)),
        }
    }
    spans
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
