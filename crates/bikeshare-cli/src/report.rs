//! Trip summary output and sample paging.

use std::io::{BufRead, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use bikeshare_model::{YES, yes_no_domain};
use bikeshare_transform::frame::cell_text;
use bikeshare_transform::summarize;

use crate::console::Console;
use crate::error::Result;

/// Rows added to the sample on every affirmative answer.
pub const PAGE_SIZE: usize = 5;

/// Printed instead of the statistics when the frame has no rows.
pub const NO_TRIPS: &str = "No trips match the selected filter.";

const MORE_ROWS_PROMPT: &str = "Would you like to show more rows of this sample? Enter Yes or No.";

/// Print the most popular start hour, end hour, weekday and month.
pub fn print_summary<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    frame: &DataFrame,
) -> Result<()> {
    let Some(summary) = summarize(frame)? else {
        return console.say(NO_TRIPS);
    };
    console.say(format!(
        "Most Popular Start Hour: {}",
        or_unavailable(summary.start_hour)
    ))?;
    console.say(format!(
        "Most Popular End Hour: {}",
        or_unavailable(summary.end_hour)
    ))?;
    console.say(format!(
        "Most Popular day for traveling: {}",
        or_unavailable(summary.weekday_name())
    ))?;
    console.say(format!(
        "Most Popular month for traveling: {}",
        or_unavailable(summary.month_name())
    ))
}

fn or_unavailable<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

/// Show the first rows of `frame` for as long as the user keeps asking.
///
/// Each "yes" prints [`PAGE_SIZE`] more rows than the previous page (capped by
/// the row count); the first "no" stops. Returns the row count of every page
/// printed.
pub fn page_sample<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    frame: &DataFrame,
    label: &str,
) -> Result<Vec<usize>> {
    let domain = yes_no_domain();
    let table_name = if label.is_empty() {
        "city data".to_string()
    } else {
        format!("city data {label}")
    };
    let first_prompt =
        format!("Would you like to see a sample of the {table_name} table? Enter Yes or No.");

    let mut shown = Vec::new();
    let mut rows = PAGE_SIZE;
    let mut answer = console.choose(&domain, &first_prompt)?;
    while answer == YES {
        let sample = frame.head(Some(rows));
        console.say(sample_table(&sample))?;
        shown.push(sample.height());
        rows += PAGE_SIZE;
        answer = console.choose(&domain, MORE_ROWS_PROMPT)?;
    }
    Ok(shown)
}

/// Render every row of `frame` with a leading row-number column.
pub fn sample_table(frame: &DataFrame) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(
        frame
            .get_column_names()
            .into_iter()
            .map(|name| header_cell(name.as_str())),
    );
    table.set_header(header);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for idx in 0..frame.height() {
        let mut row = vec![Cell::new(idx).fg(Color::DarkGrey)];
        for column in frame.get_columns() {
            let value = cell_text(column.get(idx).unwrap_or(AnyValue::Null));
            row.push(Cell::new(value));
        }
        table.add_row(row);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn sample_table_has_row_numbers_and_headers() {
        let frame = DataFrame::new(vec![
            Series::new("User Type".into(), &["Subscriber", "Customer"]).into_column(),
        ])
        .unwrap();
        let rendered = sample_table(&frame).to_string();
        assert!(rendered.contains("User Type"));
        assert!(rendered.contains("Customer"));
        assert_eq!(sample_table(&frame).row_iter().count(), 2);
    }

    #[test]
    fn unavailable_values_render_placeholder() {
        assert_eq!(or_unavailable::<u32>(None), "n/a");
        assert_eq!(or_unavailable(Some(17)), "17");
    }
}
