use std::{env, sync::Arc};

use caloriecare_model::{bmi::BmiCategory, user::UserProfile};
use caloriecare_tracker::{
    auth::Credentials, dashboard::DashboardStats, history::DayHistory,
    onboarding::OnboardingForm, Clock, Session,
};
use dotenv::dotenv;
use log::{debug, error, info};
use serde::Deserialize;

const DEFAULT_DAY_LOG: &str = "day.json";

pub struct Config {
    pub day_log_path: String,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        let day_log_path = env::var("CALORIECARE_DAY_LOG").unwrap_or_else(|_| {
            info!("CALORIECARE_DAY_LOG not set, using {}", DEFAULT_DAY_LOG);
            DEFAULT_DAY_LOG.to_owned()
        });
        Self { day_log_path }
    }
}

#[derive(Debug, Deserialize)]
pub struct MealEntry {
    pub name: String,
    pub calories: u32,
}

/// One day of activity to replay: who signs in, how they onboard (if this is
/// a new account), what they ate and how far they walked.
#[derive(Debug, Deserialize)]
pub struct DayLog {
    pub credentials: Credentials,
    pub onboarding: Option<OnboardingForm>,
    #[serde(default)]
    pub meals: Vec<MealEntry>,
    #[serde(default)]
    pub steps: u32,
    #[serde(default)]
    pub search: String,
}

#[derive(Debug)]
pub struct Report {
    pub profile: UserProfile,
    pub stats: DashboardStats,
    pub bmi: Option<(f64, BmiCategory)>,
    pub history: Vec<DayHistory>,
    pub skipped_meals: usize,
}

pub fn replay(day_log: &DayLog, clock: Arc<dyn Clock>) -> caloriecare_tracker::Result<Report> {
    let mut session = Session::new(clock);

    let tracker = match &day_log.onboarding {
        Some(form) => {
            info!("Signing up {}", day_log.credentials.email);
            session.signup(&day_log.credentials)?;
            session.complete_onboarding(form.clone())?
        }
        None => {
            info!("Signing in {}", day_log.credentials.email);
            session.login(&day_log.credentials)?
        }
    };

    let mut skipped_meals = 0;
    for entry in &day_log.meals {
        if let Err(e) = tracker.add_meal(&entry.name, entry.calories) {
            error!("Skipping meal {:?}: {}", entry.name, e);
            skipped_meals += 1;
        }
    }
    debug!("Replayed {} meals", day_log.meals.len() - skipped_meals);
    tracker.set_steps(day_log.steps);

    Ok(Report {
        profile: tracker.profile().clone(),
        stats: tracker.dashboard(),
        bmi: tracker.bmi(),
        history: tracker.meal_history(&day_log.search),
        skipped_meals,
    })
}

impl Report {
    pub fn log(&self) {
        let stats = &self.stats;
        info!("Report for {} <{}>", self.profile.name, self.profile.email);
        if let Some(activity_level) = self.profile.activity_level {
            info!("Activity: {} ({})", activity_level, activity_level.description());
        }
        info!(
            "Calories: {} of {} ({:.0}%)",
            stats.consumed, stats.daily_goal, stats.calorie_progress
        );
        if stats.over_goal {
            info!("{} calories over goal", stats.remaining.abs());
        } else {
            info!("{} calories left", stats.remaining);
        }
        info!(
            "Steps: {} of {} ({:.0}%), ~{} calories burned",
            stats.steps, stats.step_goal, stats.step_progress, stats.calories_burned
        );
        if let Some((bmi, category)) = self.bmi {
            info!("BMI: {:.1} ({})", bmi, category);
        }
        for day in &self.history {
            info!(
                "{}: {} calories total",
                day.date.format("%A, %B %-d, %Y"),
                day.total_calories
            );
            for meal in &day.meals {
                info!("  {} {} ({} kcal)", meal.time_label(), meal.name, meal.calories);
            }
        }
    }
}
