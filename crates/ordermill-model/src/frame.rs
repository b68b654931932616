//! Transaction table access helpers.

use polars::prelude::{Column, DataFrame};

use crate::error::{PipelineError, Result};

/// Fetch a column by name, mapping absence to the schema error the run
/// reports instead of a raw frame lookup failure.
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| PipelineError::MissingColumn {
        name: name.to_string(),
    })
}
