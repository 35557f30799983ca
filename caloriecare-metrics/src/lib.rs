//! Health metric formulas: BMI, BMR, step calorie burn and goal progress.
//!
//! Every function here is pure. Missing inputs never fail, they fall back to
//! fixed values instead.

mod bmi;
mod bmr;
mod progress;

pub use bmi::{calculate_bmi, classify_bmi, profile_bmi};
pub use bmr::{activity_multiplier, calculate_bmr, FALLBACK_BMR};
pub use progress::{calorie_burn_estimate, progress_percentage};

/// Rounds to the nearest integer with halves going towards positive infinity.
fn round_half_up(x: f64) -> f64 {
    let r = x.floor();
    if x - r >= 0.5 {
        r + 1.0
    } else {
        r
    }
}
