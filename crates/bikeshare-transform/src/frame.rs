//! DataFrame access helpers.

use polars::prelude::{AnyValue, DataFrame, StringChunked};

use crate::error::{Result, TransformError};

/// Returns true if the frame has a column with exactly this name.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Borrow a text column, failing if it is absent or not text.
pub fn text_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    let column = df
        .column(name)
        .map_err(|_| TransformError::ColumnNotFound {
            column: name.to_string(),
        })?;
    Ok(column.str()?)
}

/// Distinct non-null values of a text column in first-seen order.
pub fn distinct_text(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = text_column(df, name)?;
    let mut values: Vec<String> = Vec::new();
    for value in column.into_iter().flatten() {
        if !values.iter().any(|seen| seen == value) {
            values.push(value.to_string());
        }
    }
    Ok(values)
}

/// Converts a cell to display text. Null renders as an empty string.
pub fn cell_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}
