use std::path::PathBuf;

use thiserror::Error;

/// Error taxonomy for one batch run.
///
/// `Config` and `DiscountSource` are startup errors and abort before any
/// run begins; everything else is fatal to the current run and propagates
/// to the CLI boundary, where it is logged and mapped to a non-zero exit.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("run configuration {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("discount source {}: {message}", path.display())]
    DiscountSource { path: PathBuf, message: String },

    #[error("no input data found in {}", path.display())]
    NoInputData { path: PathBuf },

    #[error("{}: {source}", path.display())]
    DocumentParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("column {name} does not exist in the transaction table")]
    MissingColumn { name: String },

    #[error("order date {value:?} does not match expected format {format}")]
    DateFormat { value: String, format: &'static str },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
