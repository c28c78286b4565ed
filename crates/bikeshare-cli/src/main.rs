//! Bike-share explorer CLI.

use bikeshare_cli::logging::init_logging;
use bikeshare_cli::{Console, SessionConfig, SessionError, run_session};
use bikeshare_ingest::DataLocations;
use clap::Parser;
use std::io;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config = SessionConfig {
        locations: match &cli.data_dir {
            Some(dir) => DataLocations::new(dir.clone()),
            None => DataLocations::current_dir(),
        },
    };
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let exit_code = match run_session(&mut console, &config) {
        Ok(()) | Err(SessionError::Quit) => 0,
        Err(error) => {
            tracing::error!(%error, "session aborted");
            let error = anyhow::Error::new(error).context("exploration session failed");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
