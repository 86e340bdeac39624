//! # Entry State Module
//!
//! State of the entry screen: the intro animation, the login form, and the
//! registration wizard together with its in-flight provider import.
//!
//! ## Provider imports
//!
//! The wizard hands out an `ImportTicket`; the fetch runs on a short-lived
//! worker thread and its result comes back over an mpsc channel that the
//! screen polls once per frame. Leaving the flow drops the receiver; a late
//! result would be ignored by the wizard anyway because the ticket is stale.

use anyhow::anyhow;
use log::{debug, info, warn};
use shared::{ProviderProfile, RegistrationOrigin, RegistrationRecord};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::backend::domain::{AppStore, ImportTicket, ProfileProvider, RegistrationWizard};
use crate::ui::state::animation_state::{EntryAnimation, StepTransition};

type ImportResult = (ImportTicket, anyhow::Result<ProviderProfile>);

/// Provider fetch running on a worker thread
#[derive(Debug)]
struct PendingImport {
    ticket: ImportTicket,
    receiver: Receiver<ImportResult>,
}

#[derive(Debug)]
pub struct EntryState {
    pub animation: EntryAnimation,
    pub step_transition: StepTransition,
    /// Registration (true) or login (false)
    pub creating_account: bool,
    pub login_email: String,
    pub login_password: String,
    pub login_error: Option<String>,
    pub wizard: RegistrationWizard,
    pending_import: Option<PendingImport>,
}

impl Default for EntryState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryState {
    pub fn new() -> Self {
        Self {
            animation: EntryAnimation::new(),
            step_transition: StepTransition::default(),
            creating_account: false,
            login_email: String::new(),
            login_password: String::new(),
            login_error: None,
            wizard: RegistrationWizard::new(),
            pending_import: None,
        }
    }

    /// Entry screen shown again after logout, without the intro animation
    pub fn after_logout() -> Self {
        Self {
            animation: EntryAnimation::finished(),
            ..Self::new()
        }
    }

    /// Switch between login and registration, abandoning any draft
    pub fn toggle_create_account(&mut self) {
        self.creating_account = !self.creating_account;
        self.login_error = None;
        self.pending_import = None;
        self.wizard.reset();
        debug!("Entry screen switched to {}", if self.creating_account { "registration" } else { "login" });
    }

    pub fn submit_login(&mut self, store: &mut AppStore) -> bool {
        self.login_error = None;
        let success = store.authenticate(&self.login_email, &self.login_password);
        if !success {
            self.login_error = Some("Credenciais invalidas. Tente novamente.".to_string());
        }
        success
    }

    /// Pick a registration origin; provider origins start a background fetch
    pub fn choose_origin(&mut self, origin: RegistrationOrigin, provider: Arc<dyn ProfileProvider>) {
        match self.wizard.select_origin(origin) {
            Ok(Some(ticket)) => {
                let (sender, receiver) = mpsc::channel();
                thread::spawn(move || {
                    let result = provider.fetch_profile(ticket.origin);
                    // receiver is gone when the user left the flow
                    let _ = sender.send((ticket, result));
                });
                self.pending_import = Some(PendingImport { ticket, receiver });
            }
            Ok(None) => {}
            Err(e) => warn!("Ignoring {} selection: {:?}", origin, e),
        }
    }

    pub fn is_importing(&self) -> bool {
        self.pending_import.is_some()
    }

    /// Deliver a finished import to the wizard; returns true while still waiting
    pub fn poll_import(&mut self) -> bool {
        let Some(pending) = self.pending_import.as_ref() else {
            return false;
        };

        let (ticket, result) = match pending.receiver.try_recv() {
            Ok(message) => message,
            Err(TryRecvError::Empty) => return true,
            Err(TryRecvError::Disconnected) => (
                pending.ticket,
                Err(anyhow!("Provider worker exited without a response")),
            ),
        };

        self.pending_import = None;
        self.wizard.finish_import(ticket, result);
        false
    }

    /// Registration accepted: back to login with the new credentials filled in
    pub fn finish_registration(&mut self, record: RegistrationRecord) {
        info!("Registration finished for {}", record.email);
        self.login_email = record.email;
        self.login_password = record.password;
        self.login_error = None;
        self.creating_account = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config::AppConfig;
    use crate::backend::domain::SimulatedProfileProvider;
    use shared::WizardMode;
    use std::time::Duration;

    fn wait_for_import(state: &mut EntryState) {
        for _ in 0..200 {
            if !state.poll_import() {
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("import did not finish");
    }

    #[test]
    fn test_login_errors() {
        let mut store = AppStore::new(&AppConfig::default());
        let mut state = EntryState::new();
        state.login_email = "demo@economic.app".to_string();
        state.login_password = "wrong".to_string();

        assert!(!state.submit_login(&mut store));
        assert_eq!(state.login_error.as_deref(), Some("Credenciais invalidas. Tente novamente."));

        state.login_password = "123456".to_string();
        assert!(state.submit_login(&mut store));
        assert!(state.login_error.is_none());
    }

    #[test]
    fn test_background_import_reaches_wizard() {
        let mut state = EntryState::new();
        state.toggle_create_account();

        state.choose_origin(RegistrationOrigin::Instagram, Arc::new(SimulatedProfileProvider::instant()));
        assert!(state.is_importing());
        assert!(state.wizard.is_busy());

        wait_for_import(&mut state);

        assert!(!state.is_importing());
        assert_eq!(state.wizard.mode(), WizardMode::Form);
        assert_eq!(state.wizard.record().first_name, "Thiago");
        // birth date is the first field Instagram leaves blank
        assert_eq!(state.wizard.current_step(), 2);
    }

    #[test]
    fn test_leaving_registration_drops_import() {
        let mut state = EntryState::new();
        state.toggle_create_account();
        state.choose_origin(RegistrationOrigin::LinkedIn, Arc::new(SimulatedProfileProvider::instant()));

        state.toggle_create_account();

        assert!(!state.creating_account);
        assert!(!state.is_importing());
        assert!(!state.wizard.is_busy());
        assert!(!state.poll_import());
    }

    #[test]
    fn test_finish_registration_prefills_login() {
        let mut state = EntryState::new();
        state.creating_account = true;
        state.finish_registration(RegistrationRecord {
            email: "ana@example.com".to_string(),
            password: "s3cret".to_string(),
            ..RegistrationRecord::default()
        });

        assert!(!state.creating_account);
        assert_eq!(state.login_email, "ana@example.com");
        assert_eq!(state.login_password, "s3cret");
    }

    #[test]
    fn test_after_logout_skips_intro() {
        assert!(EntryState::after_logout().animation.is_done());
        assert!(!EntryState::new().animation.is_done());
    }
}
