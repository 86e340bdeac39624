//! # Domain Module
//!
//! UI-agnostic services for the economics app. Nothing in here touches egui;
//! screens call these services and render what they return.
//!
//! ## Services
//!
//! - `registration_wizard` - multi-step account creation flow
//! - `input_formatting` - birth date and phone masks, record normalization
//! - `registration_steps` - step descriptors (copy and masking)
//! - `profile_provider` - identity-provider import seam
//! - `integrations` - external account connections (Instagram)
//! - `app_store` - accounts, session, preferences and favorites
//! - `chart_catalog` - built-in indicator charts and their filters

pub mod app_store;
pub mod chart_catalog;
pub mod input_formatting;
pub mod integrations;
pub mod models;
pub mod profile_provider;
pub mod registration_steps;
pub mod registration_wizard;

pub use app_store::{AppSnapshot, AppStore, Session};
pub use chart_catalog::{card_summary, CardSummary, CategoryFilter, ChartCatalog, Trend, ValueTypeFilter};
pub use integrations::{IntegrationAuthenticator, IntegrationError, SimulatedInstagramAuthenticator};
pub use profile_provider::{ProfileProvider, SimulatedProfileProvider};
pub use registration_steps::{WizardStep, REGISTRATION_STEPS, STEP_COUNT};
pub use registration_wizard::{
    AdvanceOutcome, ImportTicket, RegistrationError, RegistrationGateway, RegistrationWizard, WizardSnapshot,
};
