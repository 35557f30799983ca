use caloriecare_model::meal::Meal;
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, info};
use uuid::Uuid;

use crate::{Error, Result};

/// Meals logged during a session, oldest first. Meals are only ever
/// appended or removed.
#[derive(Debug, Default)]
pub struct MealLog {
    meals: Vec<Meal>,
}

impl MealLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, calories: u32, logged_at: NaiveDateTime) -> Result<Meal> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::MissingFields);
        }
        if calories == 0 {
            return Err(Error::InvalidCalories);
        }

        let meal = Meal::new(name.to_owned(), calories, logged_at);
        info!("Meal added: {} ({} kcal)", meal.name, meal.calories);
        debug!("{:?}", meal);
        self.meals.push(meal.clone());
        Ok(meal)
    }

    pub fn delete(&mut self, id: Uuid) -> Option<Meal> {
        let index = self.meals.iter().position(|meal| meal.id == id)?;
        let meal = self.meals.remove(index);
        info!("Meal deleted: {}", meal.name);
        Some(meal)
    }

    pub fn on(&self, date: NaiveDate) -> impl Iterator<Item = &Meal> {
        self.meals.iter().filter(move |meal| meal.date() == date)
    }

    pub fn total_on(&self, date: NaiveDate) -> u64 {
        self.on(date).map(|meal| meal.calories as u64).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Meal> {
        self.meals.iter()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        )
    }

    #[test]
    fn add_trims_name() {
        let mut log = MealLog::new();
        let meal = log.add("  Greek yogurt ", 150, at(1, 8)).unwrap();

        assert_eq!(meal.name, "Greek yogurt");
        assert_eq!(meal.calories, 150);
        assert_eq!(meal.logged_at, at(1, 8));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn add_rejects_invalid_meals() {
        let mut log = MealLog::new();

        assert_eq!(log.add("   ", 150, at(1, 8)).err(), Some(Error::MissingFields));
        assert_eq!(log.add("Toast", 0, at(1, 8)).err(), Some(Error::InvalidCalories));
        assert!(log.is_empty());
    }

    #[test]
    fn delete_removes_only_matching_meal() {
        let mut log = MealLog::new();
        let first = log.add("Toast", 120, at(1, 8)).unwrap().id;
        let second = log.add("Soup", 300, at(1, 13)).unwrap().id;

        let deleted = log.delete(first).unwrap();
        assert_eq!(deleted.name, "Toast");
        assert_eq!(log.iter().map(|meal| meal.id).collect::<Vec<_>>(), vec![second]);

        assert_eq!(log.delete(first), None);
        assert_eq!(log.delete(Uuid::new_v4()), None);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn totals_are_per_day() {
        let mut log = MealLog::new();
        log.add("Toast", 120, at(1, 8)).unwrap();
        log.add("Soup", 300, at(1, 13)).unwrap();
        log.add("Pizza", 800, at(2, 19)).unwrap();

        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(log.total_on(day), 420);
        assert_eq!(
            log.on(day).map(|meal| meal.name.as_str()).collect::<Vec<_>>(),
            vec!["Toast", "Soup"]
        );
        assert_eq!(log.total_on(NaiveDate::from_ymd_opt(2024, 5, 3).unwrap()), 0);
    }

    #[test]
    fn totals_do_not_overflow() {
        let mut log = MealLog::new();
        log.add("Feast", 3_000_000_000, at(1, 12)).unwrap();
        log.add("Feast", 3_000_000_000, at(1, 18)).unwrap();

        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(log.total_on(day), 6_000_000_000);
    }
}
