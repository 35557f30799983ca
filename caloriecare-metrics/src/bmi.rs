use caloriecare_model::{bmi::BmiCategory, user::UserProfile};

/// Body mass index rounded to one decimal place, or `None` when height or
/// weight is unknown.
pub fn calculate_bmi(height_cm: Option<u32>, weight_kg: Option<f64>) -> Option<f64> {
    let height = height_cm.filter(|h| *h > 0)? as f64;
    let weight = weight_kg.filter(|w| *w > 0.0)?;

    // Scaling before the division keeps whole-centimeter heights exact.
    let bmi = weight * 10_000.0 / (height * height);
    Some((bmi * 10.0).round() / 10.0)
}

pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

pub fn profile_bmi(profile: &UserProfile) -> Option<(f64, BmiCategory)> {
    calculate_bmi(profile.height, profile.weight).map(|bmi| (bmi, classify_bmi(bmi)))
}
