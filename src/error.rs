use std::path::PathBuf;

use thiserror::Error;

/// A dimension definition that can never classify correctly. Raised when a
/// descriptor is built or registered, never during aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("dimension id must not be empty")]
    EmptyId,
    #[error("dimension `{id}` declares no labels")]
    EmptyLabels { id: String },
    #[error("dimension `{id}` declares label `{label}` more than once")]
    DuplicateLabel { id: String, label: String },
    #[error("dimension `{id}` declares an empty label")]
    BlankLabel { id: String },
    #[error("dimension `{id}` declares the reserved fallback label `{label}`")]
    ReservedLabel { id: String, label: String },
    #[error("dimension `{id}` has {labels} labels but its classifier produces {buckets} buckets")]
    NonTotalClassifier {
        id: String,
        labels: usize,
        buckets: usize,
    },
    #[error("dimension `{id}` has an invalid age bracket layout: {reason}")]
    InvalidBrackets { id: String, reason: String },
    #[error("dimension `{id}` is already registered")]
    DuplicateDimension { id: String },
    #[error("unknown dimension `{id}`")]
    UnknownDimension { id: String },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported roster format: {0} (use .json, .csv or .tsv, optionally .gz)")]
    UnsupportedFormat(String),
    #[error("invalid record at line {line}: {message}")]
    InvalidRecord { line: u64, message: String },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("report invariant violated: {0}")]
    Inconsistent(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("invalid argument: {0}")]
    Argument(String),
}
