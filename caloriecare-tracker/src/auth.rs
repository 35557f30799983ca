//! Mock authentication. Credentials are checked for presence only; nothing
//! is stored and any password is accepted.

use caloriecare_model::user::{UserProfile, DEFAULT_CALORIE_GOAL, DEFAULT_STEP_GOAL};
use log::info;

use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Credentials {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        }
    }
}

/// A signed-up account that has not completed onboarding yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAccount {
    pub name: String,
    pub email: String,
}

pub fn login(credentials: &Credentials) -> Result<UserProfile> {
    if credentials.email.is_empty() || credentials.password.is_empty() {
        return Err(Error::MissingFields);
    }

    let name = if credentials.name.is_empty() {
        credentials
            .email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_owned()
    } else {
        credentials.name.clone()
    };
    info!("Signed in as {}", credentials.email);

    Ok(UserProfile {
        daily_calorie_goal: Some(DEFAULT_CALORIE_GOAL),
        daily_step_goal: Some(DEFAULT_STEP_GOAL),
        ..UserProfile::new(name, credentials.email.clone())
    })
}

pub fn signup(credentials: &Credentials) -> Result<PendingAccount> {
    if credentials.name.is_empty()
        || credentials.email.is_empty()
        || credentials.password.is_empty()
    {
        return Err(Error::MissingFields);
    }

    info!("Account {} created, awaiting onboarding", credentials.email);
    Ok(PendingAccount {
        name: credentials.name.clone(),
        email: credentials.email.clone(),
    })
}
