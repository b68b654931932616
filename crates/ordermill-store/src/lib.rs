//! Partitioned Parquet persistence.
//!
//! Each run writes under its own timestamp-named root, so repeated runs
//! never collide. Partitions follow the Hive layout
//! `YEAR=<y>/MONTH=<m>/DAY=<d>/data.parquet`, gzip-compressed; the
//! partition columns are also retained inside each file, so a partition
//! is self-describing when read back on its own.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use polars::prelude::{DataFrame, ParquetCompression, ParquetReader, ParquetWriter, SerReader};
use tracing::{debug, info};

use ordermill_model::schema::{DAY, MONTH, YEAR};
use ordermill_model::{Result, require_column};

/// File name of the data file inside each partition directory.
pub const PARTITION_FILE: &str = "data.parquet";

/// Formats a run timestamp into the per-run directory name.
pub fn run_stamp(now: DateTime<Local>) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

/// Writes the table under `<output_root>/<stamp>/`, partitioned by
/// `YEAR`, `MONTH`, and `DAY`.
///
/// Returns the run's output root. Any I/O or encode failure is fatal and
/// propagates; nothing is retried.
pub fn write_partitioned(df: &DataFrame, output_root: &Path, stamp: &str) -> Result<PathBuf> {
    let run_root = output_root.join(stamp);
    std::fs::create_dir_all(&run_root)?;

    let partitions = df.partition_by_stable([YEAR, MONTH, DAY], true)?;
    for mut partition in partitions {
        let Some(year) = require_column(&partition, YEAR)?.i32()?.get(0) else {
            continue;
        };
        let Some(month) = require_column(&partition, MONTH)?.i32()?.get(0) else {
            continue;
        };
        let Some(day) = require_column(&partition, DAY)?.i32()?.get(0) else {
            continue;
        };

        let dir = partition_dir(&run_root, year, month, day);
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(PARTITION_FILE);
        debug!(path = %path.display(), rows = partition.height(), "writing partition");

        let file = File::create(&path)?;
        ParquetWriter::new(file)
            .with_compression(ParquetCompression::Gzip(None))
            .finish(&mut partition)?;
    }

    info!(path = %run_root.display(), rows = df.height(), "transaction table persisted");
    Ok(run_root)
}

/// Reads one partition of a previously written run back into a frame.
pub fn read_partition(run_root: &Path, year: i32, month: i32, day: i32) -> Result<DataFrame> {
    let path = partition_dir(run_root, year, month, day).join(PARTITION_FILE);
    let file = File::open(path)?;
    Ok(ParquetReader::new(file).finish()?)
}

fn partition_dir(run_root: &Path, year: i32, month: i32, day: i32) -> PathBuf {
    run_root
        .join(format!("{YEAR}={year}"))
        .join(format!("{MONTH}={month}"))
        .join(format!("{DAY}={day}"))
}
