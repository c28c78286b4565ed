//! City prompt and dataset loading.

use std::io::{BufRead, Write};

use tracing::debug;

use bikeshare_ingest::{DataLocations, LoadedDataset, load_city};
use bikeshare_model::{CITY_PROMPT, City};

use crate::console::Console;
use crate::error::{Result, SessionError};

/// Printed before retrying the load next to the executable.
pub const FALLBACK_NOTICE: &str =
    "Oops!\nThe file couldn't be located manually.\nLet me try to locate it for you...";

/// Ask for a city and load its trips.
///
/// A load failure in the primary location prints [`FALLBACK_NOTICE`] and is
/// retried once in the fallback location; a second failure ends the session.
pub fn choose_dataset<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    locations: &DataLocations,
) -> Result<LoadedDataset> {
    let file_name = console.choose(&City::domain(), CITY_PROMPT)?;
    let city =
        City::from_file_name(&file_name).ok_or(SessionError::UnexpectedAnswer(file_name))?;
    debug!(city = %city, "city chosen");

    let mut notice = Ok(());
    let loaded = load_city(city, locations, |_| notice = console.say(FALLBACK_NOTICE));
    notice?;
    Ok(loaded?)
}
