//! Error types for loading signals and viewer configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a breathing-sensor signal.
///
/// A load error never leaves partial state behind: the caller keeps whatever
/// view it had before the failed load.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A remote source could not be fetched.
    #[error("Failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A row has a different number of fields than the first row.
    #[error("Line {line}: expected {expected} fields, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Rows are too narrow to contain the configured time/value columns.
    #[error(
        "Line {line}: need at least {required} fields for the configured columns, found {found}"
    )]
    MissingColumns {
        line: usize,
        required: usize,
        found: usize,
    },

    /// A time or value cell could not be parsed as a number. `line` and
    /// `column` are both one-based.
    #[error("Line {line}, column {column}: '{value}' is not a number")]
    NotNumeric {
        line: usize,
        column: usize,
        value: String,
    },
}

/// Result type for signal loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while reading the viewer configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No home directory available for the configuration file")]
    NoHomeDir,

    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
