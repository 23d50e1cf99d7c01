pub mod catalog;
pub mod observations;
pub mod table;

pub use catalog::Catalog;
pub use observations::{ObservationRow, load_observations};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: {message}")]
    Parse { path: String, message: String },
    #[error("{path}: missing required column `{column}`")]
    MissingColumn { path: String, column: String },
}

impl InputError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn parse(path: &std::path::Path, message: impl Into<String>) -> Self {
        InputError::Parse {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    pub fn missing_column(path: &std::path::Path, column: &str) -> Self {
        InputError::MissingColumn {
            path: path.display().to_string(),
            column: column.to_string(),
        }
    }
}
