//! Discount workbook loading.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::info;

use ordermill_model::{DiscountLadder, LadderRule, PipelineError, Result};

/// Sheet holding the (range key, rate) pairs.
pub const DISCOUNT_SHEET: &str = "Sheet";

/// Loads the discount ladder from a two-column workbook sheet.
///
/// Column 0 is the range key, column 1 the rate; one header row is
/// skipped. Row order is preserved, since it determines lookup
/// precedence. No validation of range coverage or overlap happens here.
/// Any open, sheet, or cell failure is a fatal configuration error.
pub fn load_discount_ladder(path: &Path) -> Result<DiscountLadder> {
    let mut workbook = open_workbook_auto(path).map_err(|error| source_error(path, &error))?;
    let range = workbook
        .worksheet_range(DISCOUNT_SHEET)
        .map_err(|error| source_error(path, &error))?;

    let mut rules = Vec::new();
    for row in range.rows().skip(1) {
        let key = row.first().map(cell_to_text).unwrap_or_default();
        let rate = row.get(1).and_then(cell_to_f64);
        match (key.is_empty(), rate) {
            (true, None) => continue,
            (_, Some(rate)) => rules.push(LadderRule::new(key, rate)),
            (false, None) => {
                return Err(PipelineError::DiscountSource {
                    path: path.to_path_buf(),
                    message: format!("range {key:?} has no numeric rate"),
                });
            }
        }
    }

    info!(path = %path.display(), rules = rules.len(), "discount ladder loaded");
    Ok(DiscountLadder::new(rules))
}

fn source_error(path: &Path, error: &dyn std::fmt::Display) -> PipelineError {
    PipelineError::DiscountSource {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn cell_to_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_workbook_is_a_discount_source_error() {
        let error = load_discount_ladder(Path::new("no/such/discounts.xlsx")).unwrap_err();
        assert!(matches!(error, PipelineError::DiscountSource { .. }));
    }

    #[test]
    fn cell_rendering_matches_sheet_conventions() {
        assert_eq!(cell_to_text(&Data::String(" 0-10 ".to_string())), "0-10");
        assert_eq!(cell_to_text(&Data::Int(42)), "42");
        assert_eq!(cell_to_text(&Data::Empty), "");
        assert_eq!(cell_to_f64(&Data::Float(0.05)), Some(0.05));
        assert_eq!(cell_to_f64(&Data::String("0.10".to_string())), Some(0.10));
        assert_eq!(cell_to_f64(&Data::Empty), None);
    }
}
