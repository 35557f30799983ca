use caloriecare_metrics::calculate_bmr;
use caloriecare_model::user::{ActivityLevel, Gender, UserProfile, DEFAULT_STEP_GOAL};
use log::{debug, info};

use crate::auth::PendingAccount;

/// Biometrics and optional goal overrides collected right after signup.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct OnboardingForm {
    pub age: Option<u32>,
    pub height: Option<u32>,
    pub weight: Option<f64>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    pub daily_calorie_goal: Option<u32>,
    pub daily_step_goal: Option<u32>,
}

impl PendingAccount {
    pub fn complete(self, form: OnboardingForm) -> UserProfile {
        let mut profile = UserProfile {
            age: form.age,
            height: form.height,
            weight: form.weight,
            gender: form.gender,
            activity_level: form.activity_level,
            ..UserProfile::new(self.name, self.email)
        };

        let calorie_goal = match form.daily_calorie_goal.filter(|goal| *goal > 0) {
            Some(goal) => goal,
            None => {
                let recommended = calculate_bmr(&profile).max(1) as u32;
                debug!("No calorie goal given, recommending {} kcal", recommended);
                recommended
            }
        };
        profile.daily_calorie_goal = Some(calorie_goal);
        profile.daily_step_goal = Some(
            form.daily_step_goal
                .filter(|goal| *goal > 0)
                .unwrap_or(DEFAULT_STEP_GOAL),
        );

        info!(
            "Onboarding of {} complete, goals: {} kcal, {} steps",
            profile.email,
            profile.calorie_goal(),
            profile.step_goal()
        );
        profile
    }
}
