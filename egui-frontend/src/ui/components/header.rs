//! # Header Module
//!
//! Screen header shared by the authenticated screens: app name and screen
//! title on a dark band, followed by the greeting and an optional subtitle.

use eframe::egui;

use crate::ui::components::theme::colors;

pub fn render_screen_header(ui: &mut egui::Ui, title: &str, greeting: &str, subtitle: Option<&str>) {
    egui::Frame::none()
        .fill(colors::NIGHT_BLUE)
        .inner_margin(egui::Margin::symmetric(20.0, 14.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Economia").size(20.0).strong().color(colors::PRIMARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(title).size(16.0).color(colors::TEXT_ON_PRIMARY));
                });
            });
        });

    ui.add_space(16.0);
    ui.label(egui::RichText::new(greeting).size(22.0).strong().color(colors::TEXT_PRIMARY));
    if let Some(subtitle) = subtitle {
        ui.label(egui::RichText::new(subtitle).color(colors::TEXT_SECONDARY));
    }
    ui.add_space(12.0);
}

/// Bold section heading inside a screen
pub fn section_title(ui: &mut egui::Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(text).size(18.0).strong().color(colors::TEXT_PRIMARY));
    ui.add_space(4.0);
}
