//! Interactive filter selection.

use std::io::{BufRead, Write};

use polars::prelude::DataFrame;
use tracing::{debug, info_span};

use bikeshare_model::columns::GENDER;
use bikeshare_model::{City, FilterKind, FilterMenu};
use bikeshare_transform::frame::has_column;
use bikeshare_transform::{ObservedValues, apply_selection, observed_values};

use crate::console::Console;
use crate::error::{Result, SessionError};

/// Ask for a filter and a value, then return the reduced frame.
///
/// The Gender option is offered only if `frame` has a gender column. Values
/// are restricted to those observed in `frame`. `frame` itself is left
/// untouched; "No Filter" returns an identical copy.
pub fn apply_filter<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    frame: &DataFrame,
    city: City,
) -> Result<DataFrame> {
    let span = info_span!("filter", city = %city, rows = frame.height());
    let _guard = span.enter();

    let menu = FilterMenu::new(has_column(frame, GENDER));
    let label = console.choose(&menu.domain(), &menu.prompt())?;
    let kind: FilterKind = label.parse().map_err(SessionError::UnexpectedAnswer)?;
    debug!(kind = %kind, "filter chosen");

    let Some(observed) = observed_values(frame, kind)? else {
        return Ok(frame.clone());
    };
    if observed.is_empty() {
        console.say(format!("No values available to filter by {kind}."))?;
        return Ok(frame.clone());
    }

    let answer = console.choose(&observed.domain(), &value_prompt(kind, &observed))?;
    let selection = observed
        .select(kind, &answer)
        .ok_or(SessionError::UnexpectedAnswer(answer))?;
    Ok(apply_selection(frame, &selection)?)
}

fn value_prompt(kind: FilterKind, observed: &ObservedValues) -> String {
    let values = observed.render();
    match kind {
        FilterKind::Month => format!(
            "Choose a month from the list: {values}\n(Only existing months can be chosen.)"
        ),
        FilterKind::DayOfWeek => format!(
            "Choose a day from 0 to 6 :\nWith Monday=0, Sunday=6\n(Only existing days can be chosen: {values})"
        ),
        FilterKind::Gender => format!("Choose a gender from the following list: {values}"),
        FilterKind::UserType => format!("Choose a user type from the following list: {values}"),
        FilterKind::NoFilter => String::new(),
    }
}
