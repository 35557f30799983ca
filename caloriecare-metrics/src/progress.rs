use crate::round_half_up;

const CALORIES_PER_STEP: f64 = 0.04;

/// Rough number of kcal burned walking `steps` steps.
pub fn calorie_burn_estimate(steps: u32) -> u32 {
    round_half_up(steps as f64 * CALORIES_PER_STEP) as u32
}

/// Share of `goal` reached, as a percentage capped at 100. `goal` must be
/// positive.
pub fn progress_percentage(current: f64, goal: f64) -> f64 {
    (current / goal * 100.0).min(100.0)
}
