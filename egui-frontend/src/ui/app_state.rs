//! # App State Module
//!
//! This module defines the central application struct of the economics app.
//!
//! ## Key Types:
//! - `EconomiaApp` - Main application state struct
//!
//! ## State Management:
//! Account, session and preference data live in the `AppStore`; screens read
//! its current snapshot each frame and call named store operations for every
//! change. Screen-local state (entry forms, wizard, graph filters, the
//! Instagram integration) lives next to it.

use log::info;

use crate::backend::domain::AppStore;
use crate::backend::Backend;
use crate::ui::components::theme::setup_app_style;
use crate::ui::state::{EntryState, GraphsState, InstagramIntegration};

/// Main application struct for the egui frontend
pub struct EconomiaApp {
    pub backend: Backend,
    pub store: AppStore,

    pub entry: EntryState,
    pub graphs: GraphsState,
    pub instagram: InstagramIntegration,
}

impl EconomiaApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        info!("Initializing EconomiaApp");
        setup_app_style(&cc.egui_ctx);
        Ok(Self::with_backend(Backend::new()?))
    }

    pub fn with_backend(backend: Backend) -> Self {
        let store = backend.create_store();
        Self {
            backend,
            store,
            entry: EntryState::new(),
            graphs: GraphsState::default(),
            instagram: InstagramIntegration::default(),
        }
    }

    /// Back to the entry screen after the session ended
    pub fn return_to_entry(&mut self) {
        info!("Session closed, showing entry screen");
        self.entry = EntryState::after_logout();
        self.graphs = GraphsState::default();
        self.instagram = InstagramIntegration::default();
    }
}
