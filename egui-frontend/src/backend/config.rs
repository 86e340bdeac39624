//! Runtime configuration.
//!
//! Defaults cover the demo setup; a handful of environment variables can
//! override them at start-up. Invalid overrides are logged and ignored.

use log::{info, warn};
use std::time::Duration;

pub const PROVIDER_DELAY_ENV: &str = "ECONOMIA_PROVIDER_DELAY_MS";
pub const INTEGRATION_DELAY_ENV: &str = "ECONOMIA_INTEGRATION_DELAY_MS";
pub const DEMO_EMAIL_ENV: &str = "ECONOMIA_DEMO_EMAIL";
pub const DEMO_PASSWORD_ENV: &str = "ECONOMIA_DEMO_PASSWORD";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Artificial latency of the simulated identity providers
    pub provider_delay: Duration,
    /// Artificial latency of the simulated account integrations
    pub integration_delay: Duration,
    /// Seeded demo account
    pub demo_email: String,
    pub demo_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider_delay: Duration::from_millis(900),
            integration_delay: Duration::from_millis(800),
            demo_email: "demo@economic.app".to_string(),
            demo_password: "123456".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each known key
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(delay) = parse_millis(&lookup, PROVIDER_DELAY_ENV) {
            config.provider_delay = delay;
        }
        if let Some(delay) = parse_millis(&lookup, INTEGRATION_DELAY_ENV) {
            config.integration_delay = delay;
        }

        if let Some(email) = lookup(DEMO_EMAIL_ENV) {
            let email = email.trim().to_lowercase();
            if email.is_empty() {
                warn!("Ignoring empty {}", DEMO_EMAIL_ENV);
            } else {
                config.demo_email = email;
            }
        }

        if let Some(password) = lookup(DEMO_PASSWORD_ENV) {
            if password.is_empty() {
                warn!("Ignoring empty {}", DEMO_PASSWORD_ENV);
            } else {
                config.demo_password = password;
            }
        }

        info!(
            "Configuration: provider delay {}ms, demo account {}",
            config.provider_delay.as_millis(),
            config.demo_email
        );
        config
    }
}

fn parse_millis<F>(lookup: &F, key: &str) -> Option<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(millis) => Some(Duration::from_millis(millis)),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.provider_delay, Duration::from_millis(900));
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (PROVIDER_DELAY_ENV, "0"),
            (INTEGRATION_DELAY_ENV, "250"),
            (DEMO_EMAIL_ENV, " Tester@Example.com "),
            (DEMO_PASSWORD_ENV, "hunter2"),
        ]));

        assert_eq!(config.provider_delay, Duration::ZERO);
        assert_eq!(config.integration_delay, Duration::from_millis(250));
        assert_eq!(config.demo_email, "tester@example.com");
        assert_eq!(config.demo_password, "hunter2");
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (PROVIDER_DELAY_ENV, "soon"),
            (INTEGRATION_DELAY_ENV, "-5"),
            (DEMO_EMAIL_ENV, "   "),
            (DEMO_PASSWORD_ENV, ""),
        ]));

        assert_eq!(config, AppConfig::default());
    }
}
