//! Identity-provider profile import.
//!
//! The wizard only sees the `ProfileProvider` trait. The app ships with
//! `SimulatedProfileProvider`, which answers with canned LinkedIn/Instagram
//! profiles after a short delay, until real provider clients exist.

use anyhow::{anyhow, Result};
use log::info;
use shared::{ProviderProfile, RegistrationOrigin};
use std::time::Duration;

/// Source of partial profiles for provider-based registration
pub trait ProfileProvider: Send + Sync {
    /// Fetch whatever the provider knows about the user
    fn fetch_profile(&self, origin: RegistrationOrigin) -> Result<ProviderProfile>;
}

/// Canned provider responses behind an artificial delay
#[derive(Debug, Clone)]
pub struct SimulatedProfileProvider {
    delay: Duration,
}

impl SimulatedProfileProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Provider that answers immediately (tests and previews)
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl ProfileProvider for SimulatedProfileProvider {
    fn fetch_profile(&self, origin: RegistrationOrigin) -> Result<ProviderProfile> {
        info!("Fetching simulated {} profile", origin);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        match origin {
            RegistrationOrigin::LinkedIn => Ok(ProviderProfile {
                first_name: Some("Renata".to_string()),
                last_name: Some("Souza".to_string()),
                birth_date: Some("14/08/1989".to_string()),
                phone: Some(String::new()),
                email: Some("renata.souza@linkedin.com".to_string()),
            }),
            RegistrationOrigin::Instagram => Ok(ProviderProfile {
                first_name: Some("Thiago".to_string()),
                last_name: Some("Oliveira".to_string()),
                birth_date: Some(String::new()),
                phone: Some("(11) 98888-0000".to_string()),
                email: Some(String::new()),
            }),
            RegistrationOrigin::Manual => Err(anyhow!("Manual registration has no identity provider")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linkedin_profile_has_no_phone() {
        let provider = SimulatedProfileProvider::instant();
        let profile = provider.fetch_profile(RegistrationOrigin::LinkedIn).unwrap();

        assert_eq!(profile.first_name.as_deref(), Some("Renata"));
        assert_eq!(profile.phone.as_deref(), Some(""));
    }

    #[test]
    fn test_instagram_profile_has_phone_only_contact() {
        let provider = SimulatedProfileProvider::instant();
        let profile = provider.fetch_profile(RegistrationOrigin::Instagram).unwrap();

        assert_eq!(profile.phone.as_deref(), Some("(11) 98888-0000"));
        assert_eq!(profile.email.as_deref(), Some(""));
    }

    #[test]
    fn test_manual_origin_is_rejected() {
        let provider = SimulatedProfileProvider::instant();
        assert!(provider.fetch_profile(RegistrationOrigin::Manual).is_err());
    }
}
