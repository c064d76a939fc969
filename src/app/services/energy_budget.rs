//! Energy budget calculation
//!
//! Pure function from a user profile to basal/total daily expenditure and a
//! calorie target, using the Mifflin-St Jeor estimate:
//!
//! ```text
//! BMR = 10·weight(kg) + 6.25·height(cm) − 5·age + 5    (male)
//! BMR = 10·weight(kg) + 6.25·height(cm) − 5·age − 161  (female)
//! TDEE = BMR × activity multiplier
//! target = TDEE + goal delta
//! ```
//!
//! All intermediates stay unrounded; rounding is a display concern
//! ([`CalorieBudget::rounded`]).

use crate::app::models::{CalorieBudget, Profile, Sex};

/// Compute the calorie budget for a profile.
///
/// The profile arrives fully typed from the intake layer and is not
/// re-validated here; implausible inputs produce implausible (but exact)
/// output.
pub fn compute_budget(profile: &Profile) -> CalorieBudget {
    let sex_term = match profile.sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };

    let bmr = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age)
        + sex_term;
    let tdee = bmr * profile.activity_level.multiplier();
    let goal_delta = profile.goal.calorie_delta();

    CalorieBudget {
        bmr,
        tdee,
        goal_delta,
        target_kcal: tdee + goal_delta,
    }
}
