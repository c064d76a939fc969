//! Progress command: recent-vs-prior training comparison

use anyhow::Result;
use serde_json::json;

use super::shared::{print_heading, print_kv};
use crate::Config;
use crate::app::adapters::filesystem;
use crate::app::services::progress::{compare_latest, compare_windows};
use crate::cli::args::{OutputFormat, ProgressArgs};

/// Compare recent training activity against prior activity.
///
/// With `--exercise` (or `--latest`) the last qualifying entry is compared
/// against the one before it on the combined performance value; otherwise
/// the windowed average comparison runs over the raw sequence. Too little
/// history is reported, not treated as a failure.
pub fn run_progress(
    config: &Config,
    args: &ProgressArgs,
    output_format: OutputFormat,
) -> Result<()> {
    let entries = filesystem::read_log(&config.log_path).entries;

    if args.exercise.is_some() || args.latest {
        match compare_latest(&entries, args.exercise.as_deref()) {
            Ok(comparison) => match output_format {
                OutputFormat::Json => {
                    let payload = json!({
                        "enough": true,
                        "current_date": comparison.current_date,
                        "current_value": comparison.current_value,
                        "previous_date": comparison.previous_date,
                        "previous_value": comparison.previous_value,
                        "delta": comparison.delta,
                    });
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                }
                OutputFormat::Human => {
                    print_heading("Training Progress");
                    if let Some(exercise) = &args.exercise {
                        print_kv("Exercise", exercise);
                    }
                    print_kv(
                        "Current",
                        format!("{} ({})", comparison.current_value, comparison.current_date),
                    );
                    print_kv(
                        "Previous",
                        format!("{} ({})", comparison.previous_value, comparison.previous_date),
                    );
                    print_kv("Change", format!("{:+}", comparison.delta));
                }
            },
            Err(insufficient) => report_insufficient(&insufficient.reason, output_format)?,
        }
        return Ok(());
    }

    match compare_windows(&entries) {
        Ok(comparison) => match output_format {
            OutputFormat::Json => {
                let payload = json!({
                    "enough": true,
                    "avg_weight_recent": comparison.avg_weight_recent,
                    "avg_weight_prior": comparison.avg_weight_prior,
                    "avg_reps_recent": comparison.avg_reps_recent,
                    "avg_reps_prior": comparison.avg_reps_prior,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            OutputFormat::Human => {
                print_heading("Training Progress");
                print_kv(
                    "Avg weight (last 7)",
                    format!(
                        "{:.1} kg (before: {:.1} kg)",
                        comparison.avg_weight_recent, comparison.avg_weight_prior
                    ),
                );
                print_kv(
                    "Avg reps (last 7)",
                    format!(
                        "{:.1} (before: {:.1})",
                        comparison.avg_reps_recent, comparison.avg_reps_prior
                    ),
                );
            }
        },
        Err(insufficient) => report_insufficient(&insufficient.reason, output_format)?,
    }

    Ok(())
}

/// Report a too-short history without failing the command
fn report_insufficient(reason: &str, output_format: OutputFormat) -> Result<()> {
    match output_format {
        OutputFormat::Json => {
            let payload = json!({ "enough": false, "reason": reason });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Human => {
            println!("Not enough history to compare: {}", reason);
        }
    }
    Ok(())
}
