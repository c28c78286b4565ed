//! CSV reading for trip datasets.

use std::path::Path;

use polars::prelude::*;

use bikeshare_model::columns::{REQUIRED_COLUMNS, UNKNOWN};

use crate::error::{IngestError, Result};

/// Check that the file exists before handing it to Polars.
fn ensure_readable(path: &Path) -> Result<()> {
    std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    Ok(())
}

/// Reads a trip CSV into a DataFrame.
///
/// Every column is read as text; timestamps are parsed later, only where a
/// filter or summary needs them. Empty cells are replaced with `"Unknown"`.
pub fn read_trip_csv(path: &Path) -> Result<DataFrame> {
    ensure_readable(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    require_columns(&df, path)?;
    fill_missing(df, UNKNOWN)
}

/// Fails with [`IngestError::MissingColumn`] for the first absent trip column.
pub fn require_columns(df: &DataFrame, path: &Path) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if df.column(column).is_err() {
            return Err(IngestError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Replace every null cell with `marker`.
///
/// Expects text columns, as produced by [`read_trip_csv`].
pub fn fill_missing(df: DataFrame, marker: &str) -> Result<DataFrame> {
    let exprs: Vec<Expr> = df
        .get_column_names_owned()
        .into_iter()
        .map(|name| col(name.clone()).fill_null(lit(marker)).alias(name))
        .collect();
    if exprs.is_empty() {
        return Ok(df);
    }
    Ok(df.lazy().with_columns(exprs).collect()?)
}
