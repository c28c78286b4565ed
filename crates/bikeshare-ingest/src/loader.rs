//! City dataset loading with a single fallback location.

use std::path::PathBuf;

use polars::prelude::DataFrame;
use tracing::{debug, info, warn};

use bikeshare_model::City;

use crate::error::{IngestError, Result};
use crate::locate::DataLocations;
use crate::reader::read_trip_csv;

/// A city dataset ready for exploration.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub city: City,
    /// File the frame was read from.
    pub path: PathBuf,
    pub frame: DataFrame,
}

/// Load the trips of `city`.
///
/// The primary location is tried first. On any failure `on_fallback` is
/// called with that error and the load is retried exactly once in the
/// fallback directory. A second failure is returned to the caller.
pub fn load_city<F>(city: City, locations: &DataLocations, mut on_fallback: F) -> Result<LoadedDataset>
where
    F: FnMut(&IngestError),
{
    let file_name = city.file_name();
    let primary = locations.primary_path(file_name);
    debug!(city = %city, path = %primary.display(), "loading dataset");

    let (path, frame) = match read_trip_csv(&primary) {
        Ok(frame) => (primary, frame),
        Err(error) => {
            warn!(city = %city, path = %primary.display(), %error, "primary dataset location failed");
            let Some(fallback) = locations.fallback_path(file_name) else {
                return Err(error);
            };
            on_fallback(&error);
            debug!(city = %city, path = %fallback.display(), "retrying next to the executable");
            let frame = read_trip_csv(&fallback)?;
            (fallback, frame)
        }
    };

    info!(
        city = %city,
        path = %path.display(),
        rows = frame.height(),
        columns = frame.width(),
        "dataset loaded"
    );
    Ok(LoadedDataset { city, path, frame })
}
