use caloriecare_metrics::{calorie_burn_estimate, progress_percentage};

/// Summary of the current day shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub daily_goal: u32,
    pub consumed: u64,
    /// Calories left for today; negative once the goal is exceeded.
    pub remaining: i64,
    pub over_goal: bool,
    pub calorie_progress: f64,
    pub steps: u32,
    pub step_goal: u32,
    pub step_progress: f64,
    pub calories_burned: u32,
}

impl DashboardStats {
    pub fn new(daily_goal: u32, consumed: u64, steps: u32, step_goal: u32) -> Self {
        Self {
            daily_goal,
            consumed,
            remaining: daily_goal as i64 - consumed as i64,
            over_goal: consumed > daily_goal as u64,
            calorie_progress: progress_percentage(consumed as f64, daily_goal as f64),
            steps,
            step_goal,
            step_progress: progress_percentage(steps as f64, step_goal as f64),
            calories_burned: calorie_burn_estimate(steps),
        }
    }
}
