use std::path::PathBuf;

use thiserror::Error;

/// Any failure that stops the ETL run.
#[derive(Debug, Error)]
pub enum EtlError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP status {status}")]
    Status { url: String, status: u16 },
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("table body #{index} not found, document only has {found}")]
    TableNotFound { index: usize, found: usize },
    #[error("no table body has a header containing '{header}'")]
    NoTableMatches { header: String },
    #[error("schema must name {expected} fields, got {found}")]
    SchemaMismatch { expected: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error("value '{value}' for '{country}' is not a finite number")]
    InvalidNumericFormat { country: String, value: String },
    #[error("record has no '{field}' field")]
    MissingField { field: String },
    #[error("record already carries '{field}'")]
    AlreadyNormalized { field: String },
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error on {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("database error")]
    Store(#[from] rusqlite::Error),
    #[error("invalid table name '{0}'")]
    InvalidTableName(String),
}
