//! Order date normalization.

use chrono::{Datelike, NaiveDateTime};
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::info;

use ordermill_model::schema::{DAY, MONTH, ORDER_DATE, YEAR};
use ordermill_model::{PipelineError, Result, require_column};

/// Expected format of the raw `ORDERDATE` strings.
pub const ORDER_DATE_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Parses the `ORDERDATE` string column into datetimes and derives the
/// `YEAR`, `MONTH`, and `DAY` integer columns.
///
/// Total-or-nothing: the first value that fails [`ORDER_DATE_FORMAT`]
/// fails the whole operation and the table is left untouched: no row is
/// skipped, no derived column appears. On success `ORDERDATE` is replaced
/// with a datetime column.
pub fn normalize_order_dates(df: &mut DataFrame) -> Result<()> {
    let raw = require_column(df, ORDER_DATE)?.str()?;

    let mut parsed: Vec<NaiveDateTime> = Vec::with_capacity(df.height());
    for value in raw {
        let value = value.unwrap_or("");
        let datetime =
            NaiveDateTime::parse_from_str(value, ORDER_DATE_FORMAT).map_err(|_| {
                PipelineError::DateFormat {
                    value: value.to_string(),
                    format: ORDER_DATE_FORMAT,
                }
            })?;
        parsed.push(datetime);
    }

    let years: Vec<i32> = parsed.iter().map(Datelike::year).collect();
    let months: Vec<i32> = parsed.iter().map(|d| d.month() as i32).collect();
    let days: Vec<i32> = parsed.iter().map(|d| d.day() as i32).collect();

    df.with_column(Series::new(ORDER_DATE.into(), parsed))?;
    df.with_column(Series::new(YEAR.into(), years))?;
    df.with_column(Series::new(MONTH.into(), months))?;
    df.with_column(Series::new(DAY.into(), days))?;

    info!(rows = df.height(), "order dates normalized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use polars::prelude::{Column, DataFrame, DataType};

    use super::*;

    fn frame_with_dates(dates: &[&str]) -> DataFrame {
        let dates: Vec<String> = dates.iter().map(|d| (*d).to_string()).collect();
        let columns: Vec<Column> = vec![Series::new(ORDER_DATE.into(), dates).into()];
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn derives_year_month_day() {
        let mut df = frame_with_dates(&["2/24/2003 0:00", "11/6/2004 16:45"]);
        normalize_order_dates(&mut df).unwrap();

        assert!(matches!(
            df.column(ORDER_DATE).unwrap().dtype(),
            DataType::Datetime(_, _)
        ));
        let years = df.column(YEAR).unwrap().i32().unwrap();
        let months = df.column(MONTH).unwrap().i32().unwrap();
        let days = df.column(DAY).unwrap().i32().unwrap();
        assert_eq!(years.get(0), Some(2003));
        assert_eq!(months.get(0), Some(2));
        assert_eq!(days.get(0), Some(24));
        assert_eq!(years.get(1), Some(2004));
        assert_eq!(months.get(1), Some(11));
        assert_eq!(days.get(1), Some(6));
    }

    #[test]
    fn one_bad_value_fails_the_whole_column() {
        let mut df = frame_with_dates(&["2/24/2003 0:00", "2003-02-24"]);
        let error = normalize_order_dates(&mut df).unwrap_err();

        match error {
            PipelineError::DateFormat { value, format } => {
                assert_eq!(value, "2003-02-24");
                assert_eq!(format, ORDER_DATE_FORMAT);
            }
            other => panic!("expected DateFormat, got {other}"),
        }
        // No partial output: derived columns must not exist.
        assert!(df.column(YEAR).is_err());
        assert!(df.column(MONTH).is_err());
        assert!(df.column(DAY).is_err());
        assert!(matches!(
            df.column(ORDER_DATE).unwrap().dtype(),
            DataType::String
        ));
    }

    #[test]
    fn missing_order_date_column_is_a_schema_error() {
        let columns: Vec<Column> =
            vec![Series::new("OTHER".into(), vec!["x".to_string()]).into()];
        let mut df = DataFrame::new(columns).unwrap();
        let error = normalize_order_dates(&mut df).unwrap_err();
        assert!(matches!(error, PipelineError::MissingColumn { name } if name == ORDER_DATE));
    }
}
