use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub calories: u32,
    pub logged_at: NaiveDateTime,
}

impl Meal {
    pub fn new(name: String, calories: u32, logged_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            calories,
            logged_at,
        }
    }

    /// Calendar day the meal is grouped under.
    pub fn date(&self) -> NaiveDate {
        self.logged_at.date()
    }

    /// Time of day in 12-hour form, e.g. `08:05 PM`.
    pub fn time_label(&self) -> String {
        self.logged_at.format("%I:%M %p").to_string()
    }
}
