//! JSON document flattening.
//!
//! Each source file holds one order document: two scalar identifiers and
//! a nested `attributes` list. Flattening produces one table row per
//! attribute entry, carrying the identifiers onto every row from that
//! file.

use std::path::Path;

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::{debug, info};

use ordermill_model::schema::{
    AttributeRecord, CITY, COUNTRY, CUSTOMER_NAME, DEAL_SIZE, MONTH_ID, MSRP,
    ORDER_DATE, ORDER_LINE_NUMBER, ORDER_NUMBER, PRICE_EACH, PRODUCT_CODE, PRODUCT_LINE, QTR_ID,
    QUANTITY_ORDERED, SALES, STATUS, YEAR_ID,
};
use ordermill_model::{PipelineError, Result, TransactionDocument};

/// Column-wise accumulator for flattened rows.
#[derive(Debug, Default)]
struct ColumnBuffers {
    order_numbers: Vec<i64>,
    product_codes: Vec<String>,
    quantities: Vec<i64>,
    prices_each: Vec<f64>,
    order_line_numbers: Vec<i64>,
    sales: Vec<f64>,
    order_dates: Vec<String>,
    statuses: Vec<String>,
    product_lines: Vec<String>,
    msrps: Vec<f64>,
    qtr_ids: Vec<Option<i64>>,
    month_ids: Vec<Option<i64>>,
    year_ids: Vec<Option<i64>>,
    customer_names: Vec<Option<String>>,
    cities: Vec<Option<String>>,
    countries: Vec<Option<String>>,
    deal_sizes: Vec<Option<String>>,
}

impl ColumnBuffers {
    fn push(&mut self, order_number: i64, product_code: &str, attribute: AttributeRecord) {
        self.order_numbers.push(order_number);
        self.product_codes.push(product_code.to_string());
        self.quantities.push(attribute.quantity_ordered);
        self.prices_each.push(attribute.price_each);
        self.order_line_numbers.push(attribute.order_line_number);
        self.sales.push(attribute.sales);
        self.order_dates.push(attribute.order_date);
        self.statuses.push(attribute.status);
        self.product_lines.push(attribute.product_line);
        self.msrps.push(attribute.msrp);
        self.qtr_ids.push(attribute.qtr_id);
        self.month_ids.push(attribute.month_id);
        self.year_ids.push(attribute.year_id);
        self.customer_names.push(attribute.customer_name);
        self.cities.push(attribute.city);
        self.countries.push(attribute.country);
        self.deal_sizes.push(attribute.deal_size);
    }

    fn into_frame(self) -> Result<DataFrame> {
        let columns: Vec<Column> = vec![
            Series::new(ORDER_NUMBER.into(), self.order_numbers).into(),
            Series::new(PRODUCT_CODE.into(), self.product_codes).into(),
            Series::new(QUANTITY_ORDERED.into(), self.quantities).into(),
            Series::new(PRICE_EACH.into(), self.prices_each).into(),
            Series::new(ORDER_LINE_NUMBER.into(), self.order_line_numbers).into(),
            Series::new(SALES.into(), self.sales).into(),
            Series::new(ORDER_DATE.into(), self.order_dates).into(),
            Series::new(STATUS.into(), self.statuses).into(),
            Series::new(PRODUCT_LINE.into(), self.product_lines).into(),
            Series::new(MSRP.into(), self.msrps).into(),
            Series::new(QTR_ID.into(), self.qtr_ids).into(),
            Series::new(MONTH_ID.into(), self.month_ids).into(),
            Series::new(YEAR_ID.into(), self.year_ids).into(),
            Series::new(CUSTOMER_NAME.into(), self.customer_names).into(),
            Series::new(CITY.into(), self.cities).into(),
            Series::new(COUNTRY.into(), self.countries).into(),
            Series::new(DEAL_SIZE.into(), self.deal_sizes).into(),
        ];
        Ok(DataFrame::new(columns)?)
    }
}

/// Reads every `*.json` document in a directory and flattens them into
/// one transaction table.
///
/// Rows are appended in file enumeration order. A directory with zero
/// matching files is the distinct no-input-data error; a file that fails
/// to parse as a [`TransactionDocument`] fails the whole run. A document
/// with an empty `attributes` list contributes zero rows.
pub fn read_transaction_folder(dir: &Path) -> Result<DataFrame> {
    info!(path = %dir.display(), "reading transaction documents");
    let files = crate::discovery::list_json_files(dir)?;
    if files.is_empty() {
        return Err(PipelineError::NoInputData {
            path: dir.to_path_buf(),
        });
    }

    let mut buffers = ColumnBuffers::default();
    for path in &files {
        let text = std::fs::read_to_string(path)?;
        let document: TransactionDocument =
            serde_json::from_str(&text).map_err(|source| PipelineError::DocumentParse {
                path: path.clone(),
                source,
            })?;
        debug!(
            path = %path.display(),
            order_number = document.order_number,
            rows = document.attributes.len(),
            "flattening document"
        );
        for attribute in document.attributes {
            buffers.push(document.order_number, &document.product_code, attribute);
        }
    }

    let frame = buffers.into_frame()?;
    info!(files = files.len(), rows = frame.height(), "transaction table built");
    Ok(frame)
}
