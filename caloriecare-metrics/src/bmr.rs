use caloriecare_model::user::{ActivityLevel, Gender, UserProfile};
use log::debug;

use crate::round_half_up;

/// Daily calories assumed when the profile lacks the biometrics needed for
/// the Mifflin-St Jeor equation.
pub const FALLBACK_BMR: i32 = 1800;

pub fn activity_multiplier(activity_level: Option<ActivityLevel>) -> f64 {
    match activity_level {
        Some(ActivityLevel::Sedentary) | None => 1.2,
        Some(ActivityLevel::Light) => 1.375,
        Some(ActivityLevel::Moderate) => 1.55,
        Some(ActivityLevel::Active) => 1.725,
        Some(ActivityLevel::VeryActive) => 1.9,
    }
}

/// Recommended daily calorie intake: Mifflin-St Jeor BMR scaled by the
/// activity multiplier, rounded to whole kcal.
pub fn calculate_bmr(profile: &UserProfile) -> i32 {
    let (Some(age), Some(height), Some(weight), Some(gender)) =
        (profile.age, profile.height, profile.weight, profile.gender)
    else {
        debug!("Incomplete biometrics, using fallback BMR");
        return FALLBACK_BMR;
    };
    if age == 0 || height == 0 || weight.is_nan() || weight <= 0.0 {
        debug!("Non-positive biometrics, using fallback BMR");
        return FALLBACK_BMR;
    }

    // "other" shares the female constant
    let sex_offset = match gender {
        Gender::Male => 5.0,
        Gender::Female | Gender::Other => -161.0,
    };
    let bmr = 10.0 * weight + 6.25 * height as f64 - 5.0 * age as f64 + sex_offset;

    round_half_up(bmr * activity_multiplier(profile.activity_level)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(
        age: Option<u32>,
        height: Option<u32>,
        weight: Option<f64>,
        gender: Option<Gender>,
        activity_level: Option<ActivityLevel>,
    ) -> UserProfile {
        UserProfile {
            age,
            height,
            weight,
            gender,
            activity_level,
            ..UserProfile::new("Test".to_owned(), "test@example.com".to_owned())
        }
    }

    #[test]
    fn mifflin_st_jeor_with_activity() {
        let male = |activity_level| {
            profile(Some(25), Some(180), Some(80.0), Some(Gender::Male), activity_level)
        };
        let test_data = [
            // 800 + 1125 - 125 + 5 = 1805
            (male(Some(ActivityLevel::Sedentary)), 2166),
            (male(Some(ActivityLevel::Light)), 2482),
            (male(Some(ActivityLevel::Moderate)), 2798),
            (male(Some(ActivityLevel::Active)), 3114),
            (male(Some(ActivityLevel::VeryActive)), 3430),
            (male(None), 2166),
            // 600 + 1031.25 - 150 - 161 = 1320.25
            (
                profile(Some(30), Some(165), Some(60.0), Some(Gender::Female), Some(ActivityLevel::Moderate)),
                2046,
            ),
            (
                profile(Some(30), Some(165), Some(60.0), Some(Gender::Other), Some(ActivityLevel::Moderate)),
                2046,
            ),
        ];

        for (i, (profile, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(calculate_bmr(&profile), expected_output, "Test case #{}", i);
        }
    }

    #[test]
    fn falls_back_when_biometrics_are_missing() {
        let levels = [None, Some(ActivityLevel::VeryActive)];
        for activity_level in levels {
            let test_data = [
                profile(None, Some(180), Some(80.0), Some(Gender::Male), activity_level),
                profile(Some(25), None, Some(80.0), Some(Gender::Male), activity_level),
                profile(Some(25), Some(180), None, Some(Gender::Male), activity_level),
                profile(Some(25), Some(180), Some(80.0), None, activity_level),
                profile(Some(0), Some(180), Some(80.0), Some(Gender::Male), activity_level),
                profile(Some(25), Some(0), Some(80.0), Some(Gender::Male), activity_level),
                profile(Some(25), Some(180), Some(0.0), Some(Gender::Male), activity_level),
                profile(Some(25), Some(180), Some(-3.0), Some(Gender::Male), activity_level),
                profile(Some(25), Some(180), Some(f64::NAN), Some(Gender::Male), activity_level),
            ];

            for (i, profile) in test_data.into_iter().enumerate() {
                assert_eq!(calculate_bmr(&profile), FALLBACK_BMR, "Test case #{}", i);
            }
        }
    }

    #[test]
    fn activity_multiplier_defaults_to_sedentary() {
        assert_eq!(activity_multiplier(None), 1.2);
        assert_eq!(activity_multiplier(Some(ActivityLevel::Sedentary)), 1.2);
        assert_eq!(activity_multiplier(Some(ActivityLevel::VeryActive)), 1.9);
    }

    #[test]
    fn repeated_calls_agree() {
        let profile = profile(
            Some(41),
            Some(172),
            Some(68.5),
            Some(Gender::Female),
            Some(ActivityLevel::Light),
        );
        assert_eq!(calculate_bmr(&profile), calculate_bmr(&profile));
    }
}
