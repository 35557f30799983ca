use std::sync::Arc;

use caloriecare_metrics::profile_bmi;
use caloriecare_model::{bmi::BmiCategory, meal::Meal, user::UserProfile};
use log::info;
use uuid::Uuid;

use crate::{
    clock::Clock,
    dashboard::DashboardStats,
    goals::GoalUpdate,
    history::{meal_history, DayHistory},
    meals::MealLog,
    Error, Result,
};

/// Day-to-day state of a signed-in user: their profile, logged meals and
/// today's step count.
pub struct Tracker {
    profile: UserProfile,
    meals: MealLog,
    steps: u32,
    clock: Arc<dyn Clock>,
}

impl Tracker {
    pub fn new(profile: UserProfile, clock: Arc<dyn Clock>) -> Self {
        Self {
            profile,
            meals: MealLog::new(),
            steps: 0,
            clock,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn add_meal(&mut self, name: &str, calories: u32) -> Result<Meal> {
        let now = self.clock.now();
        self.meals.add(name, calories, now)
    }

    pub fn delete_meal(&mut self, id: Uuid) -> Option<Meal> {
        self.meals.delete(id)
    }

    pub fn todays_meals(&self) -> Vec<&Meal> {
        self.meals.on(self.clock.now().date()).collect()
    }

    pub fn total_consumed(&self) -> u64 {
        self.meals.total_on(self.clock.now().date())
    }

    pub fn meal_history(&self, search: &str) -> Vec<DayHistory> {
        meal_history(&self.meals, search)
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn add_steps(&mut self, steps: u32) -> Result<u32> {
        if steps == 0 {
            return Err(Error::InvalidSteps);
        }
        self.steps = self.steps.saturating_add(steps);
        info!("Added {} steps, {} today", steps, self.steps);
        Ok(self.steps)
    }

    pub fn set_steps(&mut self, steps: u32) {
        self.steps = steps;
        info!("Steps set to {}", steps);
    }

    pub fn update_goals(&mut self, update: &GoalUpdate) -> Result<()> {
        update.apply(&mut self.profile)
    }

    pub fn bmi(&self) -> Option<(f64, BmiCategory)> {
        profile_bmi(&self.profile)
    }

    pub fn dashboard(&self) -> DashboardStats {
        DashboardStats::new(
            self.profile.calorie_goal(),
            self.total_consumed(),
            self.steps,
            self.profile.step_goal(),
        )
    }
}
