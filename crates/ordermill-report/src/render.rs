//! Terminal rendering of the aggregate reports.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::queries::{ProductLineCount, SalesTrend, StatusStats};

pub fn print_status_stats(stats: &StatusStats) {
    println!(
        "Total number of {} orders: {}",
        stats.status, stats.total
    );
    println!("Year-wise {} orders:", stats.status);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Year"), header_cell("Total")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (year, total) in &stats.by_year {
        table.add_row(vec![Cell::new(year), Cell::new(total)]);
    }
    println!("{table}");
    println!();
}

pub fn print_product_line_counts(counts: &[ProductLineCount]) {
    println!("Count of unique products per product line");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Product Line"), header_cell("Total")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for count in counts {
        table.add_row(vec![
            Cell::new(&count.product_line),
            Cell::new(count.total),
        ]);
    }
    println!("{table}");
    println!();
}

pub fn print_sales_trend(trend: &SalesTrend) {
    println!(
        "Sales trend for {} having status {}",
        trend.product_line, trend.status
    );
    if trend.buckets.is_empty() {
        println!("(no matching orders)");
        println!();
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Year"),
        header_cell("Month"),
        header_cell("Status"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for bucket in &trend.buckets {
        table.add_row(vec![
            Cell::new(bucket.year),
            Cell::new(bucket.month),
            Cell::new(&trend.status),
            Cell::new(bucket.total),
        ]);
    }
    println!("{table}");
    println!();
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
