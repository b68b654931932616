//! Aggregate queries.
//!
//! All three are pure, idempotent functions of the table and their
//! parameters. Grouping goes through `BTreeMap`, so output ordering is
//! ascending by group key with no extra sort step.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use ordermill_model::schema::{MONTH, ORDER_NUMBER, PRODUCT_CODE, PRODUCT_LINE, STATUS, YEAR};
use ordermill_model::{Result, require_column};

/// Order counts for one status, overall and per year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusStats {
    pub status: String,
    pub total: u32,
    /// (year, count), ascending by year; empty when the status is absent.
    pub by_year: Vec<(i32, u32)>,
}

/// Product count for one product line.
///
/// `total` counts product code occurrences, not distinct codes: two rows
/// with the same code contribute two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLineCount {
    pub product_line: String,
    pub total: u32,
}

/// One (year, month) bucket of a sales trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendBucket {
    pub year: i32,
    pub month: i32,
    pub total: u32,
}

/// Order counts for one (product line, status) pair, bucketed by year
/// and month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesTrend {
    pub product_line: String,
    pub status: String,
    /// Ascending by (year, month); empty when nothing matches.
    pub buckets: Vec<TrendBucket>,
}

/// Counts rows with the given status, overall and per year.
///
/// A status absent from the table yields total 0 and an empty year
/// breakdown, not an error. Missing `STATUS` or `YEAR` is fatal.
pub fn status_stats(df: &DataFrame, status: &str) -> Result<StatusStats> {
    let statuses = require_column(df, STATUS)?.str()?;
    let years = require_column(df, YEAR)?.i32()?;

    let mut total = 0u32;
    let mut by_year: BTreeMap<i32, u32> = BTreeMap::new();
    for idx in 0..df.height() {
        if statuses.get(idx) != Some(status) {
            continue;
        }
        total += 1;
        if let Some(year) = years.get(idx) {
            *by_year.entry(year).or_insert(0) += 1;
        }
    }

    Ok(StatusStats {
        status: status.to_string(),
        total,
        by_year: by_year.into_iter().collect(),
    })
}

/// Counts product code occurrences per product line, ascending by line.
pub fn products_per_line(df: &DataFrame) -> Result<Vec<ProductLineCount>> {
    let lines = require_column(df, PRODUCT_LINE)?.str()?;
    let codes = require_column(df, PRODUCT_CODE)?.str()?;

    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for idx in 0..df.height() {
        let Some(line) = lines.get(idx) else {
            continue;
        };
        if codes.get(idx).is_some() {
            *counts.entry(line.to_string()).or_insert(0) += 1;
        }
    }

    Ok(counts
        .into_iter()
        .map(|(product_line, total)| ProductLineCount {
            product_line,
            total,
        })
        .collect())
}

/// Counts orders for one (product line, status) pair per (year, month).
pub fn sales_trend(df: &DataFrame, product_line: &str, status: &str) -> Result<SalesTrend> {
    let lines = require_column(df, PRODUCT_LINE)?.str()?;
    let statuses = require_column(df, STATUS)?.str()?;
    let years = require_column(df, YEAR)?.i32()?;
    let months = require_column(df, MONTH)?.i32()?;
    let orders = require_column(df, ORDER_NUMBER)?.i64()?;

    let mut buckets: BTreeMap<(i32, i32), u32> = BTreeMap::new();
    for idx in 0..df.height() {
        if lines.get(idx) != Some(product_line) || statuses.get(idx) != Some(status) {
            continue;
        }
        if orders.get(idx).is_none() {
            continue;
        }
        if let (Some(year), Some(month)) = (years.get(idx), months.get(idx)) {
            *buckets.entry((year, month)).or_insert(0) += 1;
        }
    }

    Ok(SalesTrend {
        product_line: product_line.to_string(),
        status: status.to_string(),
        buckets: buckets
            .into_iter()
            .map(|((year, month), total)| TrendBucket { year, month, total })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use polars::prelude::{Column, NamedFrom, Series};

    use ordermill_model::PipelineError;

    use super::*;

    fn sample_frame() -> DataFrame {
        let columns: Vec<Column> = vec![
            Series::new(
                ORDER_NUMBER.into(),
                vec![10100i64, 10100, 10101, 10102, 10103],
            )
            .into(),
            Series::new(
                PRODUCT_CODE.into(),
                vec!["S18_1749", "S18_1749", "S18_2248", "S24_3969", "S18_4409"],
            )
            .into(),
            Series::new(
                PRODUCT_LINE.into(),
                vec![
                    "Classic Cars",
                    "Classic Cars",
                    "Trains",
                    "Classic Cars",
                    "Trains",
                ],
            )
            .into(),
            Series::new(
                STATUS.into(),
                vec!["Shipped", "Shipped", "Cancelled", "Shipped", "Shipped"],
            )
            .into(),
            Series::new(YEAR.into(), vec![2003i32, 2003, 2003, 2004, 2004]).into(),
            Series::new(MONTH.into(), vec![2i32, 2, 5, 11, 11]).into(),
        ];
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn status_totals_break_down_by_year() {
        let stats = status_stats(&sample_frame(), "Shipped").unwrap();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.by_year, vec![(2003, 2), (2004, 2)]);
    }

    #[test]
    fn absent_status_reports_zero_not_error() {
        let stats = status_stats(&sample_frame(), "On Hold").unwrap();
        assert_eq!(stats.total, 0);
        assert!(stats.by_year.is_empty());
    }

    #[test]
    fn missing_year_column_is_fatal_even_for_absent_status() {
        let columns: Vec<Column> =
            vec![Series::new(STATUS.into(), vec!["Shipped"]).into()];
        let df = DataFrame::new(columns).unwrap();
        let error = status_stats(&df, "On Hold").unwrap_err();
        assert!(matches!(error, PipelineError::MissingColumn { name } if name == YEAR));
    }

    #[test]
    fn product_counts_are_occurrences_not_distinct() {
        let counts = products_per_line(&sample_frame()).unwrap();
        // Two rows share PRODUCTCODE S18_1749; both count.
        assert_eq!(
            counts,
            vec![
                ProductLineCount {
                    product_line: "Classic Cars".to_string(),
                    total: 3,
                },
                ProductLineCount {
                    product_line: "Trains".to_string(),
                    total: 2,
                },
            ]
        );
    }

    #[test]
    fn per_line_totals_sum_to_row_count() {
        let df = sample_frame();
        let counts = products_per_line(&df).unwrap();
        let sum: u32 = counts.iter().map(|c| c.total).sum();
        assert_eq!(sum as usize, df.height());
    }

    #[test]
    fn trend_buckets_ascend_by_year_month() {
        let trend = sales_trend(&sample_frame(), "Classic Cars", "Shipped").unwrap();
        assert_eq!(
            trend.buckets,
            vec![
                TrendBucket {
                    year: 2003,
                    month: 2,
                    total: 2,
                },
                TrendBucket {
                    year: 2004,
                    month: 11,
                    total: 1,
                },
            ]
        );
    }

    #[test]
    fn unmatched_trend_filter_yields_empty_buckets() {
        let trend = sales_trend(&sample_frame(), "Planes", "Shipped").unwrap();
        assert!(trend.buckets.is_empty());
    }
}
