//! Transaction table transforms.
//!
//! Each transform mutates the table in place, enriching it for the sink
//! and the reporters downstream.

pub mod dates;
pub mod discount;

pub use dates::{ORDER_DATE_FORMAT, normalize_order_dates};
pub use discount::apply_discounts;
