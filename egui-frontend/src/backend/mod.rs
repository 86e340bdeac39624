//! # Backend Module
//!
//! Synchronous domain services used directly by the egui frontend. There is
//! no storage or network layer: accounts live in memory for the lifetime of
//! the process and provider imports are simulated.

use anyhow::Result;
use log::info;
use std::sync::Arc;

pub mod config;
pub mod domain;

pub use config::AppConfig;

/// Services shared by every screen
pub struct Backend {
    pub config: AppConfig,
    pub chart_catalog: domain::ChartCatalog,
    pub profile_provider: Arc<dyn domain::ProfileProvider>,
    pub instagram_authenticator: Arc<dyn domain::IntegrationAuthenticator>,
}

impl Backend {
    /// Backend configured from the environment
    pub fn new() -> Result<Self> {
        Self::with_config(AppConfig::from_env())
    }

    pub fn with_config(config: AppConfig) -> Result<Self> {
        let chart_catalog = domain::ChartCatalog::builtin()?;
        let profile_provider: Arc<dyn domain::ProfileProvider> =
            Arc::new(domain::SimulatedProfileProvider::new(config.provider_delay));
        let instagram_authenticator: Arc<dyn domain::IntegrationAuthenticator> =
            Arc::new(domain::SimulatedInstagramAuthenticator::new(config.integration_delay));

        info!("Backend ready with {} charts", chart_catalog.charts().len());
        Ok(Self {
            config,
            chart_catalog,
            profile_provider,
            instagram_authenticator,
        })
    }

    /// Fresh store seeded with the configured demo account
    pub fn create_store(&self) -> domain::AppStore {
        domain::AppStore::new(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::RegistrationOrigin;
    use std::time::Duration;

    fn create_test_backend() -> Backend {
        let config = AppConfig {
            provider_delay: Duration::ZERO,
            integration_delay: Duration::ZERO,
            ..AppConfig::default()
        };
        Backend::with_config(config).unwrap()
    }

    #[test]
    fn test_backend_wires_services() {
        let backend = create_test_backend();
        assert_eq!(backend.chart_catalog.charts().len(), 4);

        let profile = backend.profile_provider.fetch_profile(RegistrationOrigin::LinkedIn).unwrap();
        assert_eq!(profile.last_name.as_deref(), Some("Souza"));

        assert!(backend.instagram_authenticator.authenticate("tester", "123").is_err());

        let mut store = backend.create_store();
        assert!(store.authenticate("demo@economic.app", "123456"));
    }
}
