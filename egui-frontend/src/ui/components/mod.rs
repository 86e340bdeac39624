//! # UI Components Module
//!
//! Screens and reusable widgets of the economics app.
//!
//! ## Module Organization:
//! - `entry_screen` - Animated logo, login form and registration wizard
//! - `home_screen` - Greeting, favorite charts and followed categories
//! - `graphs_screen` - Filterable indicator list and the detail window
//! - `settings_screen` - Profile summary and category preferences
//! - `tab_bar` - Bottom navigation
//! - `chart_card` - Indicator card with sparkline
//! - `chart_detail` - Chart geometry projection and line chart painting
//! - `header` - Shared screen header
//! - `theme` - Colors and widget style

pub mod chart_card;
pub mod chart_detail;
pub mod entry_screen;
pub mod graphs_screen;
pub mod header;
pub mod home_screen;
pub mod settings_screen;
pub mod tab_bar;
pub mod theme;

pub use theme::*;
