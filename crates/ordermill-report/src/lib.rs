//! Aggregate reporting over the enriched transaction table.

pub mod queries;
pub mod render;

pub use queries::{
    ProductLineCount, SalesTrend, StatusStats, TrendBucket, products_per_line, sales_trend,
    status_stats,
};
pub use render::{print_product_line_counts, print_sales_trend, print_status_stats};
