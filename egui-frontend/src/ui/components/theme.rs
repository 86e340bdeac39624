//! # Theme Configuration
//!
//! Centralized colors and widget style for the economics app. All visual
//! styling should use these constants so the palette stays consistent.
//!
//! ## Usage
//! ```rust,ignore
//! use crate::ui::components::theme::colors;
//!
//! let accent = colors::PRIMARY;
//! ```

use eframe::egui::{self, Color32};

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    pub brand: BrandColors,
    pub layout: LayoutColors,
    pub typography: TypographyColors,
    pub chart: ChartColors,
}

/// Brand palette
#[derive(Debug, Clone)]
pub struct BrandColors {
    /// Orange accent used by primary buttons and active tabs
    pub primary: Color32,
    pub night_blue: Color32,
    pub deep_blue: Color32,
    pub teal: Color32,
    pub impact_orange: Color32,
}

#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub background: Color32,
    pub surface: Color32,
    pub border: Color32,
    pub card_shadow: Color32,
}

#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub tertiary: Color32,
    pub error: Color32,
    pub on_primary: Color32,
}

/// Chart-specific colors
#[derive(Debug, Clone)]
pub struct ChartColors {
    pub positive: Color32,
    pub negative: Color32,
    pub line: Color32,
    pub axis: Color32,
    pub favorite: Color32,
}

pub const CURRENT_THEME: Theme = Theme {
    brand: BrandColors {
        primary: Color32::from_rgb(242, 105, 56),
        night_blue: Color32::from_rgb(1, 13, 38),
        deep_blue: Color32::from_rgb(3, 34, 94),
        teal: Color32::from_rgb(0, 210, 182),
        impact_orange: Color32::from_rgb(242, 82, 46),
    },
    layout: LayoutColors {
        background: Color32::WHITE,
        surface: Color32::from_rgb(241, 241, 241),
        border: Color32::from_rgb(230, 226, 226),
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 18),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(1, 13, 38),
        secondary: Color32::from_rgb(154, 157, 177),
        tertiary: Color32::from_rgb(153, 153, 153),
        error: Color32::from_rgb(220, 38, 38),
        on_primary: Color32::WHITE,
    },
    chart: ChartColors {
        positive: Color32::from_rgb(34, 197, 94),
        negative: Color32::from_rgb(239, 68, 68),
        line: Color32::from_rgb(242, 105, 56),
        axis: Color32::from_rgb(230, 226, 226),
        favorite: Color32::from_rgb(245, 158, 11),
    },
};

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const PRIMARY: Color32 = CURRENT_THEME.brand.primary;
    pub const NIGHT_BLUE: Color32 = CURRENT_THEME.brand.night_blue;
    pub const DEEP_BLUE: Color32 = CURRENT_THEME.brand.deep_blue;
    pub const TEAL: Color32 = CURRENT_THEME.brand.teal;

    pub const BACKGROUND: Color32 = CURRENT_THEME.layout.background;
    pub const SURFACE: Color32 = CURRENT_THEME.layout.surface;
    pub const BORDER: Color32 = CURRENT_THEME.layout.border;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_TERTIARY: Color32 = CURRENT_THEME.typography.tertiary;
    pub const TEXT_ERROR: Color32 = CURRENT_THEME.typography.error;
    pub const TEXT_ON_PRIMARY: Color32 = CURRENT_THEME.typography.on_primary;

    pub const TREND_UP: Color32 = CURRENT_THEME.chart.positive;
    pub const TREND_DOWN: Color32 = CURRENT_THEME.chart.negative;
    pub const CHART_LINE: Color32 = CURRENT_THEME.chart.line;
    pub const CHART_AXIS: Color32 = CURRENT_THEME.chart.axis;
    pub const FAVORITE: Color32 = CURRENT_THEME.chart.favorite;
}

/// Color of a `#RRGGBB` tag, or the secondary text color when unparseable
pub fn tag_color(hex: &str) -> Color32 {
    Color32::from_hex(hex).unwrap_or(colors::TEXT_SECONDARY)
}

/// Apply the app-wide widget style
pub fn setup_app_style(ctx: &egui::Context) {
    ctx.style_mut(|style| {
        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = colors::BACKGROUND;
        style.visuals.window_fill = colors::BACKGROUND;
        style.visuals.extreme_bg_color = colors::SURFACE;
        style.visuals.selection.bg_fill = colors::PRIMARY;
        style.visuals.hyperlink_color = colors::PRIMARY;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(14.0, 10.0);
        style.spacing.item_spacing = egui::vec2(8.0, 10.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
    });
}

/// Filled orange button used for the main action of a form
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_owned()).color(colors::TEXT_ON_PRIMARY).strong())
        .fill(colors::PRIMARY)
        .rounding(egui::Rounding::same(8.0))
        .min_size(egui::vec2(220.0, 40.0))
}

/// Outlined button for secondary actions
pub fn secondary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_owned()).color(colors::TEXT_PRIMARY))
        .fill(colors::BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::BORDER))
        .rounding(egui::Rounding::same(8.0))
        .min_size(egui::vec2(220.0, 40.0))
}
