//! Transaction table schema.
//!
//! Column names are fixed at ingestion: each source document is
//! deserialized into [`TransactionDocument`] before any frame is built, so
//! downstream stages operate on a known set of typed columns instead of
//! runtime-discovered ones.

use serde::Deserialize;

/// Order identifier carried from the document top level onto every row.
pub const ORDER_NUMBER: &str = "ORDERNUMBER";
/// Product identifier carried from the document top level onto every row.
pub const PRODUCT_CODE: &str = "PRODUCTCODE";
pub const QUANTITY_ORDERED: &str = "QUANTITYORDERED";
pub const PRICE_EACH: &str = "PRICEEACH";
pub const ORDER_LINE_NUMBER: &str = "ORDERLINENUMBER";
pub const SALES: &str = "SALES";
/// Raw order date string on ingest; re-typed to a datetime column by the
/// date normalizer.
pub const ORDER_DATE: &str = "ORDERDATE";
pub const STATUS: &str = "STATUS";
pub const PRODUCT_LINE: &str = "PRODUCTLINE";
pub const MSRP: &str = "MSRP";
pub const QTR_ID: &str = "QTR_ID";
pub const MONTH_ID: &str = "MONTH_ID";
pub const YEAR_ID: &str = "YEAR_ID";
pub const CUSTOMER_NAME: &str = "CUSTOMERNAME";
pub const CITY: &str = "CITY";
pub const COUNTRY: &str = "COUNTRY";
pub const DEAL_SIZE: &str = "DEALSIZE";

/// Derived by the date normalizer from `ORDERDATE`.
pub const YEAR: &str = "YEAR";
pub const MONTH: &str = "MONTH";
pub const DAY: &str = "DAY";
/// Derived by the discount calculator.
pub const DISCOUNT: &str = "DISCOUNT";

/// One source JSON document: two scalar identifiers plus the nested
/// attribute list that flattening turns into rows.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionDocument {
    #[serde(rename = "ORDERNUMBER")]
    pub order_number: i64,
    #[serde(rename = "PRODUCTCODE")]
    pub product_code: String,
    pub attributes: Vec<AttributeRecord>,
}

/// One entry of a document's `attributes` list.
///
/// Required fields are the ones the pipeline computes with; the optional
/// ones are carried through to the persisted table and null-padded when a
/// source document omits them. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AttributeRecord {
    #[serde(rename = "QUANTITYORDERED")]
    pub quantity_ordered: i64,
    #[serde(rename = "PRICEEACH")]
    pub price_each: f64,
    #[serde(rename = "ORDERLINENUMBER")]
    pub order_line_number: i64,
    #[serde(rename = "SALES")]
    pub sales: f64,
    #[serde(rename = "ORDERDATE")]
    pub order_date: String,
    #[serde(rename = "STATUS")]
    pub status: String,
    #[serde(rename = "PRODUCTLINE")]
    pub product_line: String,
    #[serde(rename = "MSRP")]
    pub msrp: f64,
    #[serde(rename = "QTR_ID", default)]
    pub qtr_id: Option<i64>,
    #[serde(rename = "MONTH_ID", default)]
    pub month_id: Option<i64>,
    #[serde(rename = "YEAR_ID", default)]
    pub year_id: Option<i64>,
    #[serde(rename = "CUSTOMERNAME", default)]
    pub customer_name: Option<String>,
    #[serde(rename = "CITY", default)]
    pub city: Option<String>,
    #[serde(rename = "COUNTRY", default)]
    pub country: Option<String>,
    #[serde(rename = "DEALSIZE", default)]
    pub deal_size: Option<String>,
}
