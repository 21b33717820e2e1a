//! Error types for the edges of the application
//!
//! The list view pipeline itself cannot fail. Everything that touches the
//! outside world (data files, config, CSV export, command line values)
//! reports through [`AppError`]; the UI layer wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The data file could not be read
    #[error("failed to read data file {path}: {source}")]
    DataRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a valid college data set
    #[error("failed to parse college data: {0}")]
    DataParse(#[from] serde_json::Error),

    /// A sort field path that does not name a sortable column
    #[error("unknown sort field '{0}' (expected one of: {fields})", fields = crate::model::SortKey::known_paths())]
    UnknownSortField(String),

    /// A sort policy name other than `page` or `global`
    #[error("unknown sort policy '{0}' (expected 'page' or 'global')")]
    UnknownSortPolicy(String),

    /// Pages must contain at least one record
    #[error("page size must be at least 1")]
    ZeroPageSize,

    /// The config file exists but is not valid config JSON
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config could not be serialized
    #[error("failed to serialize config: {0}")]
    ConfigWrite(#[source] serde_json::Error),

    /// `$HOME` is unset, so no config directory can be derived
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the CSV export failed
    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
