pub const DEFAULT_CALORIE_GOAL: u32 = 2000;
pub const DEFAULT_STEP_GOAL: u32 = 10000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Self-reported exercise frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "little/no exercise",
            ActivityLevel::Light => "light exercise 1-3 days/week",
            ActivityLevel::Moderate => "moderate exercise 3-5 days/week",
            ActivityLevel::Active => "hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "very hard exercise, physical job",
        }
    }
}

#[cfg_attr(feature = "serde", serde_with::skip_serializing_none)]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    /// Height in centimeters.
    pub height: Option<u32>,
    /// Weight in kilograms.
    pub weight: Option<f64>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    pub daily_calorie_goal: Option<u32>,
    pub daily_step_goal: Option<u32>,
}

impl UserProfile {
    pub fn new(name: String, email: String) -> Self {
        Self {
            name,
            email,
            age: None,
            height: None,
            weight: None,
            gender: None,
            activity_level: None,
            daily_calorie_goal: None,
            daily_step_goal: None,
        }
    }

    pub fn calorie_goal(&self) -> u32 {
        self.daily_calorie_goal.unwrap_or(DEFAULT_CALORIE_GOAL)
    }

    pub fn step_goal(&self) -> u32 {
        self.daily_step_goal.unwrap_or(DEFAULT_STEP_GOAL)
    }
}
