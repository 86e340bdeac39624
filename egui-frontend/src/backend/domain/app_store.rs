//! # App Store
//!
//! Session and account state shared by every screen once the user is past the
//! entry screen.
//!
//! ## Key Responsibilities
//!
//! - Keep the in-memory account table, seeded with the demo account
//! - Open and close sessions (login, registration, logout)
//! - Track the active tab, per-category data and alert preferences, and the
//!   favorited charts
//! - Derive the values screens display (profile, display name, completion)
//!
//! ## Snapshots
//!
//! Every mutation is a named operation that publishes a new `Arc<AppSnapshot>`.
//! Snapshots handed out earlier never change, so a screen can hold one for a
//! whole frame without observing a half-applied update.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use log::{info, warn};
use shared::{CategoryKey, ChartItem, RegistrationField, RegistrationOrigin, RegistrationRecord, TabKey};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::config::AppConfig;
use crate::backend::domain::input_formatting::normalize_email;
use crate::backend::domain::models::{UserProfile, UserRecord};
use crate::backend::domain::registration_wizard::RegistrationGateway;

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub user_email: String,
    pub active_tab: TabKey,
    pub started_at: DateTime<Utc>,
}

impl Session {
    fn open(user_email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_email,
            active_tab: TabKey::Home,
            started_at: Utc::now(),
        }
    }
}

fn category_state(initial: bool) -> BTreeMap<CategoryKey, bool> {
    CategoryKey::ALL.iter().map(|key| (*key, initial)).collect()
}

/// Immutable view of the application state
#[derive(Debug, Clone)]
pub struct AppSnapshot {
    users: HashMap<String, UserRecord>,
    session: Option<Session>,
    data_preferences: BTreeMap<CategoryKey, bool>,
    alert_preferences: BTreeMap<CategoryKey, bool>,
    favorite_chart_ids: BTreeSet<String>,
    demo_profile: UserProfile,
}

impl AppSnapshot {
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Active tab, or `None` when nobody is logged in
    pub fn active_tab(&self) -> Option<TabKey> {
        self.session.as_ref().map(|s| s.active_tab)
    }

    pub fn user_email(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_email.as_str())
    }

    pub fn has_account(&self, email: &str) -> bool {
        self.users.contains_key(&normalize_email(email))
    }

    /// Profile of the logged-in user, falling back to the demo profile
    pub fn active_profile(&self) -> &UserProfile {
        self.session
            .as_ref()
            .and_then(|s| self.users.get(&s.user_email))
            .map(|record| &record.profile)
            .unwrap_or(&self.demo_profile)
    }

    /// First name when known, otherwise the session e-mail
    pub fn display_name(&self) -> String {
        let profile = self.active_profile();
        if !profile.first_name.trim().is_empty() {
            return profile.first_name.clone();
        }
        self.user_email().unwrap_or(&profile.email).to_string()
    }

    pub fn profile_completion(&self) -> u8 {
        self.active_profile().completion()
    }

    pub fn data_preference(&self, key: CategoryKey) -> bool {
        self.data_preferences.get(&key).copied().unwrap_or(false)
    }

    pub fn alert_preference(&self, key: CategoryKey) -> bool {
        self.alert_preferences.get(&key).copied().unwrap_or(false)
    }

    pub fn all_data_enabled(&self) -> bool {
        CategoryKey::ALL.iter().all(|key| self.data_preference(*key))
    }

    pub fn all_alerts_enabled(&self) -> bool {
        CategoryKey::ALL.iter().all(|key| self.alert_preference(*key))
    }

    /// Categories the user follows, in display order
    pub fn selected_categories(&self) -> Vec<CategoryKey> {
        CategoryKey::ALL
            .iter()
            .copied()
            .filter(|key| self.data_preference(*key))
            .collect()
    }

    pub fn is_favorite(&self, chart_id: &str) -> bool {
        self.favorite_chart_ids.contains(chart_id)
    }

    /// Favorited charts in catalog order
    pub fn favorite_charts<'a>(&self, catalog: &'a [ChartItem]) -> Vec<&'a ChartItem> {
        catalog.iter().filter(|chart| self.is_favorite(&chart.id)).collect()
    }
}

/// Owner of the current snapshot
#[derive(Debug, Clone)]
pub struct AppStore {
    current: Arc<AppSnapshot>,
}

impl AppStore {
    pub fn new(config: &AppConfig) -> Self {
        let demo_email = normalize_email(&config.demo_email);
        let demo_profile = UserProfile::demo(&demo_email);

        let mut users = HashMap::new();
        users.insert(
            demo_email,
            UserRecord {
                password: config.demo_password.clone(),
                profile: demo_profile.clone(),
            },
        );

        Self {
            current: Arc::new(AppSnapshot {
                users,
                session: None,
                data_preferences: category_state(false),
                alert_preferences: category_state(false),
                favorite_chart_ids: BTreeSet::new(),
                demo_profile,
            }),
        }
    }

    pub fn snapshot(&self) -> Arc<AppSnapshot> {
        Arc::clone(&self.current)
    }

    /// Apply `change` to a private copy and publish it
    fn update<F>(&mut self, change: F) -> Arc<AppSnapshot>
    where
        F: FnOnce(&mut AppSnapshot),
    {
        change(Arc::make_mut(&mut self.current));
        self.snapshot()
    }

    /// Check credentials and open a session on the Home tab
    pub fn authenticate(&mut self, email: &str, password: &str) -> bool {
        let email = normalize_email(email);
        let valid = self
            .current
            .users
            .get(&email)
            .map(|record| record.password == password)
            .unwrap_or(false);

        if valid {
            info!("User {} logged in", email);
            self.update(|state| state.session = Some(Session::open(email)));
        } else {
            warn!("Rejected login for {}", email);
        }
        valid
    }

    /// Store a new account and log it in.
    ///
    /// An existing account with the same e-mail is replaced. Preferences and
    /// favorites start over for the new session.
    pub fn register(&mut self, record: &RegistrationRecord, origin: RegistrationOrigin) -> Arc<AppSnapshot> {
        let email = normalize_email(&record.email);
        let profile = UserProfile::from_registration(record, email.clone(), origin);

        if self.current.users.contains_key(&email) {
            warn!("Replacing existing account {}", email);
        }
        info!("Registered {} via {}", email, origin);

        self.update(|state| {
            state.users.insert(
                email.clone(),
                UserRecord {
                    password: record.password.clone(),
                    profile,
                },
            );
            state.data_preferences = category_state(false);
            state.alert_preferences = category_state(false);
            state.favorite_chart_ids.clear();
            state.session = Some(Session::open(email));
        })
    }

    pub fn logout(&mut self) -> Arc<AppSnapshot> {
        if let Some(email) = self.current.user_email() {
            info!("User {} logged out", email);
        }
        self.update(|state| state.session = None)
    }

    /// Switch tabs; `Logout` ends the session instead
    pub fn set_active_tab(&mut self, tab: TabKey) -> Arc<AppSnapshot> {
        if tab == TabKey::Logout {
            return self.logout();
        }
        self.update(|state| {
            if let Some(session) = state.session.as_mut() {
                session.active_tab = tab;
            }
        })
    }

    pub fn toggle_data_preference(&mut self, key: CategoryKey) -> Arc<AppSnapshot> {
        self.update(|state| {
            let entry = state.data_preferences.entry(key).or_insert(false);
            *entry = !*entry;
        })
    }

    pub fn toggle_alert_preference(&mut self, key: CategoryKey) -> Arc<AppSnapshot> {
        self.update(|state| {
            let entry = state.alert_preferences.entry(key).or_insert(false);
            *entry = !*entry;
        })
    }

    pub fn set_all_data_preferences(&mut self, enabled: bool) -> Arc<AppSnapshot> {
        self.update(|state| state.data_preferences = category_state(enabled))
    }

    pub fn set_all_alert_preferences(&mut self, enabled: bool) -> Arc<AppSnapshot> {
        self.update(|state| state.alert_preferences = category_state(enabled))
    }

    pub fn toggle_favorite_chart(&mut self, chart_id: &str) -> Arc<AppSnapshot> {
        self.update(|state| {
            if !state.favorite_chart_ids.remove(chart_id) {
                state.favorite_chart_ids.insert(chart_id.to_string());
            }
        })
    }
}

impl RegistrationGateway for AppStore {
    fn submit(&mut self, record: &RegistrationRecord, origin: RegistrationOrigin) -> Result<()> {
        if let Some(field) = RegistrationField::ALL.iter().find(|field| record.is_blank(**field)) {
            bail!("Registration record is missing {}", field);
        }
        self.register(record, origin);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::chart_catalog::ChartCatalog;

    fn create_test_store() -> AppStore {
        AppStore::new(&AppConfig::default())
    }

    fn create_test_record() -> RegistrationRecord {
        RegistrationRecord {
            first_name: "Ana".to_string(),
            last_name: "Lima".to_string(),
            birth_date: "01/02/1990".to_string(),
            phone: "(11) 99999-0000".to_string(),
            email: "ana@example.com".to_string(),
            password: "s3cret".to_string(),
        }
    }

    #[test]
    fn test_demo_login() {
        let mut store = create_test_store();
        assert!(!store.snapshot().is_authenticated());

        assert!(store.authenticate("  Demo@Economic.app ", "123456"));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.user_email(), Some("demo@economic.app"));
        assert_eq!(snapshot.active_tab(), Some(TabKey::Home));
        assert_eq!(snapshot.display_name(), "Demo");
        assert_eq!(snapshot.profile_completion(), 60);
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let mut store = create_test_store();
        assert!(!store.authenticate("demo@economic.app", "654321"));
        assert!(!store.authenticate("nobody@economic.app", "123456"));
        assert!(!store.snapshot().is_authenticated());
    }

    #[test]
    fn test_register_opens_session_and_resets_preferences() {
        let mut store = create_test_store();
        store.set_all_data_preferences(true);
        store.toggle_favorite_chart("selic-history");

        let snapshot = store.register(&create_test_record(), RegistrationOrigin::LinkedIn);

        assert_eq!(snapshot.user_email(), Some("ana@example.com"));
        assert_eq!(snapshot.active_tab(), Some(TabKey::Home));
        assert_eq!(snapshot.active_profile().provider, RegistrationOrigin::LinkedIn);
        assert_eq!(snapshot.profile_completion(), 100);
        assert!(snapshot.selected_categories().is_empty());
        assert!(!snapshot.is_favorite("selic-history"));

        store.logout();
        assert!(store.authenticate("ana@example.com", "s3cret"));
    }

    #[test]
    fn test_gateway_rejects_incomplete_record() {
        let mut store = create_test_store();
        let mut record = create_test_record();
        record.password = String::new();

        assert!(store.submit(&record, RegistrationOrigin::Manual).is_err());
        assert!(!store.snapshot().has_account("ana@example.com"));

        record.password = "s3cret".to_string();
        assert!(store.submit(&record, RegistrationOrigin::Manual).is_ok());
        assert!(store.snapshot().has_account("ana@example.com"));
    }

    #[test]
    fn test_logout_tab_ends_session() {
        let mut store = create_test_store();
        store.authenticate("demo@economic.app", "123456");

        let snapshot = store.set_active_tab(TabKey::Graph);
        assert_eq!(snapshot.active_tab(), Some(TabKey::Graph));

        let snapshot = store.set_active_tab(TabKey::Logout);
        assert!(!snapshot.is_authenticated());
        assert_eq!(snapshot.active_tab(), None);
    }

    #[test]
    fn test_earlier_snapshots_do_not_change() {
        let mut store = create_test_store();
        let before = store.snapshot();

        let after = store.toggle_data_preference(CategoryKey::Agro);

        assert!(!before.data_preference(CategoryKey::Agro));
        assert!(after.data_preference(CategoryKey::Agro));
    }

    #[test]
    fn test_preference_toggles() {
        let mut store = create_test_store();

        store.toggle_data_preference(CategoryKey::Macroeconomia);
        store.toggle_alert_preference(CategoryKey::Agro);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.selected_categories(), vec![CategoryKey::Macroeconomia]);
        assert!(snapshot.alert_preference(CategoryKey::Agro));
        assert!(!snapshot.all_data_enabled());

        let snapshot = store.set_all_data_preferences(true);
        assert!(snapshot.all_data_enabled());
        assert_eq!(snapshot.selected_categories(), CategoryKey::ALL.to_vec());

        let snapshot = store.set_all_alert_preferences(false);
        assert!(!snapshot.alert_preference(CategoryKey::Agro));
    }

    #[test]
    fn test_favorite_charts_follow_catalog_order() {
        let catalog = ChartCatalog::builtin().expect("builtin catalog");
        let mut store = create_test_store();

        store.toggle_favorite_chart("agribusiness-export");
        store.toggle_favorite_chart("selic-history");
        store.toggle_favorite_chart("ipca-monthly");
        let snapshot = store.toggle_favorite_chart("ipca-monthly");

        let ids: Vec<&str> = snapshot
            .favorite_charts(catalog.charts())
            .iter()
            .map(|chart| chart.id.as_str())
            .collect();
        assert_eq!(ids, vec!["selic-history", "agribusiness-export"]);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut store = create_test_store();
        let mut record = create_test_record();
        record.first_name = "  ".to_string();
        // the gateway would refuse this record, register does not validate
        let snapshot = store.register(&record, RegistrationOrigin::Manual);

        assert_eq!(snapshot.display_name(), "ana@example.com");
    }

    #[test]
    fn test_session_has_identity() {
        let mut store = create_test_store();
        store.authenticate("demo@economic.app", "123456");
        let first = store.snapshot().session().map(|s| s.id);

        store.logout();
        store.authenticate("demo@economic.app", "123456");
        let second = store.snapshot().session().map(|s| s.id);

        assert!(first.is_some());
        assert_ne!(first, second);
    }
}
