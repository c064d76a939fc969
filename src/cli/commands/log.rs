//! Log command: append, list, and remove training entries

use anyhow::{Context, Result};
use serde_json::json;

use super::shared::{print_heading, print_kv};
use crate::Config;
use crate::app::adapters::filesystem;
use crate::app::models::TrainingEntry;
use crate::cli::args::{AddEntryArgs, LogAction, OutputFormat};

/// Run a log subcommand
pub fn run_log(config: &Config, action: &LogAction, output_format: OutputFormat) -> Result<()> {
    match action {
        LogAction::Add(add_args) => run_add(config, add_args),
        LogAction::List => run_list(config, output_format),
        LogAction::RemoveLast => run_remove_last(config),
    }
}

/// Append one entry to the training log
fn run_add(config: &Config, args: &AddEntryArgs) -> Result<()> {
    args.validate().context("Invalid training entry")?;

    let entry = TrainingEntry {
        date: args.resolve_date(),
        exercise: args.exercise.trim().to_string(),
        weight: args.weight,
        reps: args.reps,
        sets: args.sets,
    };

    filesystem::append_entry(&config.log_path, entry.clone())
        .context("Failed to append training entry")?;

    println!("Logged: {}", format_entry(&entry));
    Ok(())
}

/// List all entries in file order
fn run_list(config: &Config, output_format: OutputFormat) -> Result<()> {
    let result = filesystem::read_log(&config.log_path);

    match output_format {
        OutputFormat::Json => {
            let payload = json!({
                "entries": result.entries,
                "stats": result.stats,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Human => {
            if result.entries.is_empty() {
                println!("No entries logged yet.");
                return Ok(());
            }

            print_heading("Training Entries");
            for entry in &result.entries {
                println!("  {}", format_entry(entry));
            }
            print_kv("Total", result.entries.len());
            if result.stats.records_skipped > 0 {
                print_kv("Skipped records", result.stats.records_skipped);
            }
        }
    }

    Ok(())
}

/// Remove the most recent entry
fn run_remove_last(config: &Config) -> Result<()> {
    let removed = filesystem::remove_last_entry(&config.log_path)
        .context("Failed to rewrite training log")?;

    match removed {
        Some(entry) => println!("Removed: {}", format_entry(&entry)),
        None => println!("No entries to remove."),
    }
    Ok(())
}

/// One-line rendering of an entry: date | exercise | weight x reps (sets)
fn format_entry(entry: &TrainingEntry) -> String {
    format!(
        "{} | {} | {} kg x {} ({} sets)",
        entry.date, entry.exercise, entry.weight, entry.reps, entry.sets
    )
}
