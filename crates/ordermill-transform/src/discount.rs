//! Volume discount calculation.

use std::collections::BTreeSet;

use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::info;

use ordermill_model::schema::{DISCOUNT, MSRP, PRODUCT_LINE, QUANTITY_ORDERED};
use ordermill_model::{DiscountLadder, Result, require_column};

/// Appends the `DISCOUNT` column: `MSRP * rate` for rows whose product
/// line is discount-eligible, where the rate comes from the ladder lookup
/// on `QUANTITYORDERED`. Rows that are not eligible, or whose quantity
/// hits no ladder rule, get 0.0.
pub fn apply_discounts(
    df: &mut DataFrame,
    ladder: &DiscountLadder,
    eligible: &BTreeSet<String>,
) -> Result<()> {
    let height = df.height();
    let lines = require_column(df, PRODUCT_LINE)?.str()?;
    let quantities = require_column(df, QUANTITY_ORDERED)?.i64()?;
    let msrps = require_column(df, MSRP)?.f64()?;

    let mut discounts: Vec<f64> = Vec::with_capacity(height);
    let mut discounted_rows = 0usize;
    for idx in 0..height {
        let line = lines.get(idx).unwrap_or("");
        let discount = if eligible.contains(line) {
            quantities
                .get(idx)
                .zip(msrps.get(idx))
                .and_then(|(quantity, msrp)| ladder.rate_for(quantity).map(|rate| msrp * rate))
                .unwrap_or(0.0)
        } else {
            0.0
        };
        if discount != 0.0 {
            discounted_rows += 1;
        }
        discounts.push(discount);
    }

    df.with_column(Series::new(DISCOUNT.into(), discounts))?;
    info!(rows = height, discounted_rows, "volume discounts applied");
    Ok(())
}
