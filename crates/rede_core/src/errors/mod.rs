use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fetching or parsing the institution dataset
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid data source: {0}")]
    InvalidSource(String),
}

/// Errors raised while parsing table filter values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown protection level filter: {0}")]
    UnknownProtectionLevel(String),
}

/// Alias for fallible operations in the core crate
pub type CoreResult<T> = Result<T, LoadError>;
