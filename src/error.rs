use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeparationError {
    #[error("Source {0} does not exist in our graph")]
    UnknownSource(String),

    #[error("Destination {0} does not exist in our graph")]
    UnknownDestination(String),

    // chain() walked from a source that was not the last BFS source
    #[error("Graph was not traversed from {0}; run the traversal from it first")]
    StaleTraversal(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrequencyError {
    #[error("Frequency table is empty")]
    EmptyTable,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed input: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),

    #[error("Delimiter must be a single byte, got {0:?}")]
    BadDelimiter(String),

    #[error("Bin size must be at least 1")]
    ZeroBinSize,
}
