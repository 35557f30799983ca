use caloriecare_model::meal::Meal;
use chrono::NaiveDate;
use itertools::Itertools;

use crate::meals::MealLog;

#[derive(Debug, Clone, PartialEq)]
pub struct DayHistory {
    pub date: NaiveDate,
    pub meals: Vec<Meal>,
    pub total_calories: u64,
}

/// Meals grouped by day, newest day first, keeping only meals whose name
/// contains `search` (case-insensitive). Days with no matching meal are left
/// out.
pub fn meal_history(log: &MealLog, search: &str) -> Vec<DayHistory> {
    let needle = search.to_lowercase();

    log.iter()
        .filter(|meal| meal.name.to_lowercase().contains(&needle))
        .cloned()
        .into_group_map_by(Meal::date)
        .into_iter()
        .sorted_by(|(a, _), (b, _)| b.cmp(a))
        .map(|(date, meals)| DayHistory {
            date,
            total_calories: meals.iter().map(|meal| meal.calories as u64).sum(),
            meals,
        })
        .collect()
}
