//! # UI State Module
//!
//! Screen-local state that does not belong in the app store.
//!
//! ## Modules:
//! - `animation_state` - Entry intro and wizard step transitions
//! - `entry_state` - Login form, registration wizard, provider import polling
//! - `graphs_state` - Chart filters and the expanded chart
//! - `integration_state` - Instagram connection on the settings screen

pub mod animation_state;
pub mod entry_state;
pub mod graphs_state;
pub mod integration_state;

pub use animation_state::{EntryAnimation, EntryPhase, StepTransition};
pub use entry_state::EntryState;
pub use graphs_state::GraphsState;
pub use integration_state::InstagramIntegration;
