//! Dashboard command: profile summary with derived calorie budget

use anyhow::{Context, Result};
use serde_json::json;

use super::shared::{format_kcal, print_heading, print_kv};
use crate::Config;
use crate::app::adapters::filesystem;
use crate::app::services::energy_budget::compute_budget;
use crate::cli::args::OutputFormat;

/// Show the stored profile together with its calorie budget.
///
/// The budget is recomputed from the profile on every call, never cached.
pub fn run_dashboard(config: &Config, output_format: OutputFormat) -> Result<()> {
    let profile = filesystem::load_profile(&config.profile_path)
        .context("Dashboard needs a complete profile")?;
    let budget = compute_budget(&profile);

    match output_format {
        OutputFormat::Json => {
            let payload = json!({
                "profile": profile,
                "budget": budget,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Human => {
            print_heading("Dashboard");
            print_kv("Age", format!("{} years", profile.age));
            print_kv("Sex", format!("{:?}", profile.sex).to_lowercase());
            print_kv("Height", format!("{} cm", profile.height_cm));
            print_kv("Weight", format!("{} kg", profile.weight_kg));
            print_kv("Activity multiplier", profile.activity_level.multiplier());
            print_kv("Goal delta", format_kcal(budget.goal_delta));
            print_kv("BMR", format_kcal(budget.bmr));
            print_kv("TDEE", format_kcal(budget.tdee));
            print_kv("Daily target", format_kcal(budget.target_kcal));
        }
    }

    Ok(())
}
