//! Profile command: strict profile intake and inspection

use anyhow::{Context, Result};
use serde_json::json;

use super::shared::{format_kcal, print_heading, print_kv};
use crate::Config;
use crate::app::adapters::filesystem;
use crate::app::models::Profile;
use crate::app::services::energy_budget::compute_budget;
use crate::cli::args::{OutputFormat, ProfileAction, SetProfileArgs};

/// Run a profile subcommand
pub fn run_profile(
    config: &Config,
    action: &ProfileAction,
    output_format: OutputFormat,
) -> Result<()> {
    match action {
        ProfileAction::Set(set_args) => run_set(config, set_args),
        ProfileAction::Show => run_show(config, output_format),
    }
}

/// Create or replace the stored profile
fn run_set(config: &Config, args: &SetProfileArgs) -> Result<()> {
    args.validate().context("Invalid profile")?;

    let profile = Profile {
        age: args.age,
        sex: args.sex,
        height_cm: args.height_cm,
        weight_kg: args.weight_kg,
        activity_level: args.activity_level,
        goal: args.goal,
    };

    filesystem::save_profile(&config.profile_path, &profile)
        .context("Failed to save profile")?;

    // Echo the resulting daily target so the budget is visible immediately
    let budget = compute_budget(&profile);
    println!("Profile saved. Daily target: {}", format_kcal(budget.target_kcal));
    Ok(())
}

/// Show the stored profile
fn run_show(config: &Config, output_format: OutputFormat) -> Result<()> {
    let profile = filesystem::load_profile(&config.profile_path)?;

    match output_format {
        OutputFormat::Json => {
            let payload = json!({ "profile": profile });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Human => {
            print_heading("Profile");
            print_kv("Age", format!("{} years", profile.age));
            print_kv("Sex", format!("{:?}", profile.sex).to_lowercase());
            print_kv("Height", format!("{} cm", profile.height_cm));
            print_kv("Weight", format!("{} kg", profile.weight_kg));
            print_kv("Activity", format!("{:?}", profile.activity_level));
            print_kv("Goal", format!("{:?}", profile.goal));
        }
    }

    Ok(())
}
