//! Shared components for CLI commands
//!
//! Logging setup, configuration resolution, and small rendering helpers
//! used across the command implementations.

use anyhow::{Context, Result};
use colored::*;
use tracing::debug;

use crate::Config;
use crate::cli::args::Args;

/// Set up structured logging from the global verbosity flags
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fitlog={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Resolve file locations from the global path overrides
pub fn load_configuration(args: &Args) -> Result<Config> {
    let config = Config::resolve(
        args.data_dir.clone(),
        args.log_file.clone(),
        args.profile_file.clone(),
    )
    .context("Failed to resolve data file locations")?;

    config.validate().context("Invalid file configuration")?;
    Ok(config)
}

/// Print a labelled value line in the shared report style
pub fn print_kv(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", format!("{}:", label).bright_cyan(), value);
}

/// Print a report section heading
pub fn print_heading(heading: &str) {
    println!("\n{}", heading.bright_green().bold());
}

/// Format a kcal/day quantity for display, rounded to whole calories
pub fn format_kcal(value: f64) -> String {
    format!("{:.0} kcal/day", value.round())
}
