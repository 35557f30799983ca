pub mod bmi;
pub mod meal;
pub mod user;
