//! Command implementations for the fitlog CLI
//!
//! This module contains the command execution logic and rendering for the
//! CLI interface. Each command is implemented in its own module; all of
//! them are thin adapters that load inputs through the filesystem adapter,
//! call the core engines, and render the returned value objects.

pub mod dashboard;
pub mod log;
pub mod profile;
pub mod progress;
pub mod shared;

use anyhow::Result;

use crate::cli::args::{Args, Commands};

/// Main command runner for fitlog
///
/// Sets up logging, resolves file locations, and dispatches to the
/// subcommand handler.
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args);
    let config = shared::load_configuration(&args)?;

    match args.get_command() {
        Commands::Dashboard => dashboard::run_dashboard(&config, args.output_format),
        Commands::Progress(progress_args) => {
            progress::run_progress(&config, &progress_args, args.output_format)
        }
        Commands::Log { action } => log::run_log(&config, &action, args.output_format),
        Commands::Profile { action } => {
            profile::run_profile(&config, &action, args.output_format)
        }
    }
}
