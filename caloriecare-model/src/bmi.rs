#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BmiCategory {
    Underweight,
    #[strum(to_string = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}
