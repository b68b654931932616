//! Run configuration.
//!
//! All externally supplied knobs for one batch run live here. The config
//! is loaded once at startup and passed by reference into every stage;
//! nothing reads it from global state.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PipelineError, Result};

/// Externally supplied configuration for one batch run.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Directory holding the per-order `*.json` transaction documents.
    pub transactions_dir: PathBuf,
    /// Two-column discount workbook (range key, rate), sheet `Sheet`.
    pub discount_workbook: PathBuf,
    /// Root under which each run writes its timestamp-named output tree.
    pub output_root: PathBuf,
    /// Status values to report on, in report order.
    pub status_reports: Vec<String>,
    /// Product lines eligible for the volume discount.
    pub discount_product_lines: BTreeSet<String>,
    /// Product line to status pairs to trend.
    pub sales_trends: BTreeMap<String, String>,
}

impl RunConfig {
    /// Load a run configuration from a YAML file.
    ///
    /// Any read or parse failure is a fatal configuration error.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|error| PipelineError::Config {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        serde_yaml::from_str(&text).map_err(|error| PipelineError::Config {
            path: path.to_path_buf(),
            message: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
transactions_dir: data/transactions
discount_workbook: data/discounts.xlsx
output_root: transactional_parquet
status_reports:
  - Shipped
  - Cancelled
discount_product_lines:
  - Classic Cars
  - Motorcycles
sales_trends:
  Classic Cars: Shipped
";

    #[test]
    fn parses_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, SAMPLE).unwrap();

        let config = RunConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.transactions_dir, PathBuf::from("data/transactions"));
        assert_eq!(config.status_reports, vec!["Shipped", "Cancelled"]);
        assert!(config.discount_product_lines.contains("Motorcycles"));
        assert_eq!(
            config.sales_trends.get("Classic Cars").map(String::as_str),
            Some("Shipped")
        );
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let error = RunConfig::from_yaml_file(Path::new("no/such/config.yaml")).unwrap_err();
        assert!(matches!(error, PipelineError::Config { .. }));
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "transactions_dir: [unclosed").unwrap();

        let error = RunConfig::from_yaml_file(&path).unwrap_err();
        assert!(matches!(error, PipelineError::Config { .. }));
    }
}
