//! Third-party account integrations offered on the settings screen.
//!
//! Connecting an account is a credential check behind the
//! `IntegrationAuthenticator` trait. `SimulatedInstagramAuthenticator` runs the
//! check locally after a short delay; there is no network client yet.

use anyhow::Result;
use log::info;
use std::time::Duration;

/// Reasons a credential check is refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrationError {
    #[error("Informe usuario e senha para continuar.")]
    MissingCredentials,
    #[error("Senha invalida. Verifique e tente novamente.")]
    InvalidPassword,
}

/// Shortest password the simulated check accepts
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validates the credentials of an external account
pub trait IntegrationAuthenticator: Send + Sync {
    fn authenticate(&self, username: &str, password: &str) -> Result<()>;
}

/// Local credential check standing in for Instagram's tester login
#[derive(Debug, Clone)]
pub struct SimulatedInstagramAuthenticator {
    delay: Duration,
}

impl SimulatedInstagramAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl IntegrationAuthenticator for SimulatedInstagramAuthenticator {
    fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        if username.is_empty() || password.is_empty() {
            return Err(IntegrationError::MissingCredentials.into());
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(IntegrationError::InvalidPassword.into());
        }

        info!("Instagram account {} connected", username);
        Ok(())
    }
}
