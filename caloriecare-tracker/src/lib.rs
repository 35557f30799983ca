pub mod auth;
pub mod clock;
pub mod dashboard;
pub mod goals;
pub mod history;
pub mod meals;
pub mod onboarding;
pub mod session;
pub mod tracker;

pub use clock::{Clock, MockClock, SystemClock};
pub use session::Session;
pub use tracker::Tracker;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("required fields are missing")]
    MissingFields,
    #[error("calorie amount must be positive")]
    InvalidCalories,
    #[error("step count must be positive")]
    InvalidSteps,
    #[error("goals and weight must be positive")]
    InvalidGoal,
    #[error("a user is already signed in")]
    AlreadySignedIn,
    #[error("no user is signed in")]
    NotSignedIn,
    #[error("no account is awaiting onboarding")]
    NotOnboarding,
}

pub type Result<T> = std::result::Result<T, Error>;
