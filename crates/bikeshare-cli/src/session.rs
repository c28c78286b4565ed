//! The exploration session: load, page, filter, summarize, repeat.

use std::io::{BufRead, Write};

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use bikeshare_ingest::DataLocations;
use bikeshare_model::Domain;

use crate::console::Console;
use crate::dataset::choose_dataset;
use crate::error::{Result, SessionError};
use crate::filter::apply_filter;
use crate::report::{page_sample, print_summary};

const RESTART_PROMPT: &str = "Would you like to restart? Enter Yes or No.";
const RATING_PROMPT: &str =
    "Rate your experience from 1 to 5:\n(1 being \"So bad\", and 5 being \"The best\")";

/// Settings that stay fixed for a whole session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub locations: DataLocations,
}

/// Run rounds until the user declines to restart, then ask for a rating.
///
/// # Errors
///
/// [`SessionError::Quit`] when the user quits; load and frame errors are
/// fatal for the session.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &SessionConfig,
) -> Result<()> {
    let mut round = 1usize;
    loop {
        let span = info_span!("session", round);
        let _guard = span.enter();
        let filtered = run_round(console, &config.locations)?;
        info!(rows = filtered.height(), "round complete");
        if !ask_restart(console)? {
            break;
        }
        round += 1;
    }
    ask_rating(console)?;
    Ok(())
}

/// One pass: load a city, page it, filter it, summarize and page the result.
pub fn run_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    locations: &DataLocations,
) -> Result<DataFrame> {
    let dataset = choose_dataset(console, locations)?;
    page_sample(console, &dataset.frame, "")?;
    let filtered = apply_filter(console, &dataset.frame, dataset.city)?;
    print_summary(console, &filtered)?;
    page_sample(console, &filtered, "new")?;
    Ok(filtered)
}

/// Only "yes" or "y" restart; any other answer ends the loop.
fn ask_restart<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<bool> {
    let answer = console.ask(RESTART_PROMPT)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "yes" | "y"))
}

fn ask_rating<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<u8> {
    let answer = console.choose(&Domain::enumeration(1..=5), RATING_PROMPT)?;
    let (rating, verdict) = answer
        .parse::<u8>()
        .ok()
        .and_then(|rating| rating_verdict(rating).map(|verdict| (rating, verdict)))
        .ok_or(SessionError::UnexpectedAnswer(answer))?;
    info!(rating, "session rated");
    console.say(format!(
        "Thank you for your rating.\nWe also find you {verdict}"
    ))?;
    Ok(rating)
}

fn rating_verdict(rating: u8) -> Option<&'static str> {
    match rating {
        1 => Some("SO BAD (-_-)"),
        2 => Some("NOT SO GOOD :d"),
        3 => Some("OK :/"),
        4 => Some("AWESOME (^_-)"),
        5 => Some("THE BEST! (^O^)"),
        _ => None,
    }
}
