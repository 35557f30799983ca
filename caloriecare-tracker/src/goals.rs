use caloriecare_model::user::UserProfile;
use log::info;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct GoalUpdate {
    pub daily_calorie_goal: u32,
    pub daily_step_goal: u32,
    /// New body weight in kg, if the user entered one.
    pub weight: Option<f64>,
}

impl GoalUpdate {
    pub fn apply(&self, profile: &mut UserProfile) -> Result<()> {
        if self.daily_calorie_goal == 0 || self.daily_step_goal == 0 {
            return Err(Error::InvalidGoal);
        }
        if self
            .weight
            .is_some_and(|weight| weight.is_nan() || weight <= 0.0)
        {
            return Err(Error::InvalidGoal);
        }

        profile.daily_calorie_goal = Some(self.daily_calorie_goal);
        profile.daily_step_goal = Some(self.daily_step_goal);
        if let Some(weight) = self.weight.filter(|w| Some(*w) != profile.weight) {
            info!("Weight updated to {} kg", weight);
            profile.weight = Some(weight);
        }
        info!(
            "Goals updated: {} kcal, {} steps",
            self.daily_calorie_goal, self.daily_step_goal
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            height: Some(170),
            weight: Some(72.0),
            ..UserProfile::new("Kim".to_owned(), "kim@example.com".to_owned())
        }
    }

    #[test]
    fn apply_updates_goals_and_weight() {
        let mut profile = profile();
        GoalUpdate {
            daily_calorie_goal: 1900,
            daily_step_goal: 9000,
            weight: Some(70.5),
        }
        .apply(&mut profile)
        .unwrap();

        assert_eq!(profile.daily_calorie_goal, Some(1900));
        assert_eq!(profile.daily_step_goal, Some(9000));
        assert_eq!(profile.weight, Some(70.5));
    }

    #[test]
    fn apply_without_weight_keeps_current_weight() {
        let mut profile = profile();
        GoalUpdate {
            daily_calorie_goal: 2100,
            daily_step_goal: 11000,
            weight: None,
        }
        .apply(&mut profile)
        .unwrap();

        assert_eq!(profile.weight, Some(72.0));
    }

    #[test]
    fn apply_rejects_non_positive_values() {
        let test_data = [
            (0, 10000, None),
            (2000, 0, None),
            (2000, 10000, Some(0.0)),
            (2000, 10000, Some(-60.0)),
        ];

        for (i, (daily_calorie_goal, daily_step_goal, weight)) in test_data.into_iter().enumerate() {
            let mut profile = profile();
            let update = GoalUpdate {
                daily_calorie_goal,
                daily_step_goal,
                weight,
            };
            assert_eq!(update.apply(&mut profile), Err(Error::InvalidGoal), "Test case #{}", i);
            assert_eq!(profile.daily_calorie_goal, None, "Test case #{}", i);
            assert_eq!(profile.weight, Some(72.0), "Test case #{}", i);
        }
    }
}
