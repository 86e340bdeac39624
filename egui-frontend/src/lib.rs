//! Economics companion app: registration wizard, indicator charts and the
//! in-memory session store, rendered with egui.

pub mod backend;
pub mod ui;
