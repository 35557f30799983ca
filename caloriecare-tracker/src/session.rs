use std::sync::Arc;

use log::{info, warn};

use crate::{
    auth::{self, Credentials, PendingAccount},
    clock::Clock,
    goals::GoalUpdate,
    onboarding::OnboardingForm,
    tracker::Tracker,
    Error, Result,
};

enum State {
    SignedOut,
    Onboarding(PendingAccount),
    SignedIn(Tracker),
}

/// Top-level application state. Signing out discards every meal and step
/// recorded since signing in.
pub struct Session {
    state: State,
    clock: Arc<dyn Clock>,
}

impl Session {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: State::SignedOut,
            clock,
        }
    }

    pub fn login(&mut self, credentials: &Credentials) -> Result<&mut Tracker> {
        self.ensure_signed_out()?;
        let profile = auth::login(credentials)?;
        self.state = State::SignedIn(Tracker::new(profile, self.clock.clone()));
        self.tracker_mut()
    }

    pub fn signup(&mut self, credentials: &Credentials) -> Result<PendingAccount> {
        self.ensure_signed_out()?;
        let pending = auth::signup(credentials)?;
        self.state = State::Onboarding(pending.clone());
        Ok(pending)
    }

    pub fn complete_onboarding(&mut self, form: OnboardingForm) -> Result<&mut Tracker> {
        let pending = match std::mem::replace(&mut self.state, State::SignedOut) {
            State::Onboarding(pending) => pending,
            other => {
                self.state = other;
                return Err(Error::NotOnboarding);
            }
        };
        let profile = pending.complete(form);
        self.state = State::SignedIn(Tracker::new(profile, self.clock.clone()));
        self.tracker_mut()
    }

    fn ensure_signed_out(&self) -> Result<()> {
        if let State::SignedIn(tracker) = &self.state {
            warn!(
                "{} is still signed in, log out before switching accounts",
                tracker.profile().email
            );
            return Err(Error::AlreadySignedIn);
        }
        Ok(())
    }

    pub fn logout(&mut self) {
        if let State::SignedIn(tracker) = &self.state {
            info!("User {} logged out", tracker.profile().email);
        }
        self.state = State::SignedOut;
    }

    pub fn update_profile(&mut self, update: &GoalUpdate) -> Result<()> {
        self.tracker_mut()?.update_goals(update)
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.state, State::SignedIn(_))
    }

    pub fn is_onboarding(&self) -> bool {
        matches!(self.state, State::Onboarding(_))
    }

    pub fn tracker(&self) -> Result<&Tracker> {
        match &self.state {
            State::SignedIn(tracker) => Ok(tracker),
            _ => Err(Error::NotSignedIn),
        }
    }

    pub fn tracker_mut(&mut self) -> Result<&mut Tracker> {
        match &mut self.state {
            State::SignedIn(tracker) => Ok(tracker),
            _ => Err(Error::NotSignedIn),
        }
    }
}
