//! Batch run orchestration with explicit stages.
//!
//! Stage order for one run:
//! 1. **Ladder**: load the discount ladder from the workbook
//! 2. **Flatten**: read and flatten the transaction documents
//! 3. **Dates**: parse `ORDERDATE`, derive `YEAR`/`MONTH`/`DAY`
//! 4. **Discounts**: compute the `DISCOUNT` column
//! 5. **Persist**: write the enriched table as partitioned Parquet
//! 6. **Report**: status counts, product-line counts, sales trends
//!
//! Stages fail fast: reports are printed as they are computed, so a
//! failure partway through leaves only the earlier reports visible.

use std::path::PathBuf;

use chrono::Local;
use tracing::{info, info_span};

use ordermill_ingest::{load_discount_ladder, read_transaction_folder};
use ordermill_model::{DiscountLadder, Result, RunConfig};
use ordermill_report::{
    ProductLineCount, SalesTrend, StatusStats, print_product_line_counts, print_sales_trend,
    print_status_stats, products_per_line, sales_trend, status_stats,
};
use ordermill_store::{run_stamp, write_partitioned};
use ordermill_transform::{apply_discounts, normalize_order_dates};

/// Per-invocation switches layered over the run configuration.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Overrides the configured output root.
    pub output_root: Option<PathBuf>,
    /// Skip the Parquet sink; transforms and reports still run.
    pub dry_run: bool,
}

/// Result of one completed run.
#[derive(Debug)]
pub struct RunSummary {
    /// Rows in the flattened transaction table.
    pub rows: usize,
    /// Output root of this run; `None` on a dry run.
    pub output_path: Option<PathBuf>,
    pub status_reports: Vec<StatusStats>,
    pub product_line_counts: Vec<ProductLineCount>,
    pub sales_trends: Vec<SalesTrend>,
}

/// Runs one batch: loads the ladder from the configured workbook, then
/// delegates to [`run_with_ladder`].
pub fn run(config: &RunConfig, options: &RunOptions) -> Result<RunSummary> {
    let ladder = load_discount_ladder(&config.discount_workbook)?;
    run_with_ladder(config, options, &ladder)
}

/// Runs one batch with an already-loaded discount ladder.
pub fn run_with_ladder(
    config: &RunConfig,
    options: &RunOptions,
    ladder: &DiscountLadder,
) -> Result<RunSummary> {
    let span = info_span!("run");
    let _guard = span.enter();

    let mut table = read_transaction_folder(&config.transactions_dir)?;
    normalize_order_dates(&mut table)?;
    apply_discounts(&mut table, ladder, &config.discount_product_lines)?;

    let output_path = if options.dry_run {
        info!("dry run, skipping parquet output");
        None
    } else {
        let output_root = options
            .output_root
            .as_ref()
            .unwrap_or(&config.output_root);
        let stamp = run_stamp(Local::now());
        Some(write_partitioned(&table, output_root, &stamp)?)
    };

    let mut status_reports = Vec::with_capacity(config.status_reports.len());
    for status in &config.status_reports {
        info!(status, "generating status stats");
        let stats = status_stats(&table, status)?;
        print_status_stats(&stats);
        status_reports.push(stats);
    }

    info!("generating product counts per product line");
    let product_line_counts = products_per_line(&table)?;
    print_product_line_counts(&product_line_counts);

    let mut sales_trends = Vec::with_capacity(config.sales_trends.len());
    for (product_line, status) in &config.sales_trends {
        info!(product_line, status, "generating sales trend");
        let trend = sales_trend(&table, product_line, status)?;
        print_sales_trend(&trend);
        sales_trends.push(trend);
    }

    Ok(RunSummary {
        rows: table.height(),
        output_path,
        status_reports,
        product_line_counts,
        sales_trends,
    })
}
