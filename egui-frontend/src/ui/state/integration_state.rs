//! # Integration State Module
//!
//! Settings-screen state of the Instagram integration. Switching it on opens a
//! credential form; the switch only turns on after the authenticator accepts
//! the credentials. The check runs on a worker thread and is polled each frame,
//! like the provider import on the entry screen.

use anyhow::anyhow;
use log::{debug, info, warn};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::backend::domain::IntegrationAuthenticator;

#[derive(Debug, Default)]
pub struct InstagramIntegration {
    pub enabled: bool,
    pub form_open: bool,
    pub username: String,
    pub password: String,
    pub error: Option<String>,
    /// Set after a successful connection, cleared with the next toggle
    pub notice: Option<String>,
    pending: Option<Receiver<anyhow::Result<()>>>,
}

impl InstagramIntegration {
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Switch flipped by the user; turning on only asks for credentials
    pub fn toggle(&mut self, next: bool) {
        self.notice = None;
        if next {
            self.form_open = true;
            self.error = None;
            return;
        }
        debug!("Instagram integration switched off");
        self.enabled = false;
        self.reset_form();
    }

    /// Dismiss the credential form, abandoning any check in flight
    pub fn close_form(&mut self) {
        self.form_open = false;
        self.reset_form();
    }

    pub fn connect(&mut self, authenticator: Arc<dyn IntegrationAuthenticator>) {
        if self.is_loading() {
            warn!("Ignoring Instagram connect while a check is running");
            return;
        }

        self.error = None;
        let username = self.username.trim().to_string();
        let password = self.password.clone();
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            // receiver is gone when the form was closed
            let _ = sender.send(authenticator.authenticate(&username, &password));
        });
        self.pending = Some(receiver);
    }

    /// Apply a finished check; returns true while still waiting
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = self.pending.as_ref() else {
            return false;
        };

        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return true,
            Err(TryRecvError::Disconnected) => Err(anyhow!("Nao foi possivel validar suas credenciais.")),
        };
        self.pending = None;

        match result {
            Ok(()) => {
                info!("Instagram integration enabled");
                self.enabled = true;
                self.form_open = false;
                self.reset_form();
                self.notice = Some("Conta conectada com sucesso.".to_string());
            }
            Err(e) => {
                debug!("Instagram credentials rejected: {}", e);
                self.enabled = false;
                self.error = Some(e.to_string());
            }
        }
        false
    }

    fn reset_form(&mut self) {
        self.username.clear();
        self.password.clear();
        self.error = None;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::SimulatedInstagramAuthenticator;
    use std::time::Duration;

    fn authenticator() -> Arc<dyn IntegrationAuthenticator> {
        Arc::new(SimulatedInstagramAuthenticator::instant())
    }

    fn wait_for_check(state: &mut InstagramIntegration) {
        for _ in 0..200 {
            if !state.poll() {
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("credential check did not finish");
    }

    fn open_form(username: &str, password: &str) -> InstagramIntegration {
        let mut state = InstagramIntegration::default();
        state.toggle(true);
        state.username = username.to_string();
        state.password = password.to_string();
        state
    }

    #[test]
    fn test_toggle_on_only_opens_form() {
        let mut state = InstagramIntegration::default();
        state.toggle(true);

        assert!(state.form_open);
        assert!(!state.enabled);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_missing_credentials_keep_switch_off() {
        let mut state = open_form("   ", "segredo1");
        state.connect(authenticator());
        assert!(state.is_loading());

        wait_for_check(&mut state);

        assert!(!state.enabled);
        assert!(state.form_open);
        assert_eq!(state.error.as_deref(), Some("Informe usuario e senha para continuar."));
    }

    #[test]
    fn test_short_password_keeps_switch_off() {
        let mut state = open_form("economia.tester", "123");
        state.connect(authenticator());
        wait_for_check(&mut state);

        assert!(!state.enabled);
        assert_eq!(state.error.as_deref(), Some("Senha invalida. Verifique e tente novamente."));
        assert_eq!(state.username, "economia.tester");
    }

    #[test]
    fn test_valid_credentials_enable_integration() {
        let mut state = open_form(" economia.tester ", "123456");
        state.connect(authenticator());
        wait_for_check(&mut state);

        assert!(state.enabled);
        assert!(!state.form_open);
        assert!(state.username.is_empty());
        assert!(state.password.is_empty());
        assert!(state.error.is_none());
        assert_eq!(state.notice.as_deref(), Some("Conta conectada com sucesso."));
    }

    #[test]
    fn test_toggle_off_disconnects() {
        let mut state = open_form("economia.tester", "123456");
        state.connect(authenticator());
        wait_for_check(&mut state);

        state.toggle(false);

        assert!(!state.enabled);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_closing_form_abandons_check() {
        let mut state = open_form("economia.tester", "123456");
        state.connect(authenticator());

        state.close_form();

        assert!(!state.form_open);
        assert!(!state.is_loading());
        assert!(!state.poll());
        assert!(!state.enabled);
    }
}
