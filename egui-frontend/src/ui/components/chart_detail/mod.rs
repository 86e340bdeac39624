//! # Chart Detail Module
//!
//! Expanded line chart of a single indicator.
//!
//! ## Key Components:
//! - `geometry.rs` - Projection of a series into drawing coordinates
//! - `renderer.rs` - egui painting of the projected chart

pub mod geometry;
pub mod renderer;

pub use geometry::{project_series, sparkline_bar_heights, ChartGeometry, ChartSize, CHART_MIN_HEIGHT, CHART_PADDING};
pub use renderer::render_chart_detail;
