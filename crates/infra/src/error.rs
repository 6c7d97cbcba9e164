use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Reference data is required to start; without it there are no match or
    /// player choices to offer.
    #[error("missing reference file: {path}")]
    MissingReferenceFile { path: PathBuf },

    #[error("malformed reference file {path}: {reason}")]
    MalformedReference { path: PathBuf, reason: String },

    /// A tabular log row that cannot be parsed is a hard error for the view
    /// reading it. Dropping rows silently would corrupt the aggregates built
    /// on top of the log.
    #[error("malformed row in {file} at line {line}: {reason}")]
    MalformedRow {
        file: String,
        line: u64,
        reason: String,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
