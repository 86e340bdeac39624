//! # App Coordinator Module
//!
//! The main update loop of the application.
//!
//! ## Application Flow:
//! 1. Read the current store snapshot
//! 2. No session: advance the entry animations, poll any provider import and
//!    render the entry screen
//! 3. Session: poll the integration check, render the bottom tab bar, the
//!    active tab's screen and the chart detail and credential windows
//! 4. Request another frame while something is animating or loading

use eframe::egui;
use shared::TabKey;

use crate::ui::app_state::EconomiaApp;

/// Upper bound on the frame delta fed to animations (after stalls)
const MAX_FRAME_DT: f32 = 0.1;

impl eframe::App for EconomiaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt).min(MAX_FRAME_DT);
        let snapshot = self.store.snapshot();

        let Some(active_tab) = snapshot.active_tab() else {
            let waiting = self.entry.poll_import();
            self.entry.animation.advance(dt);
            self.entry.step_transition.advance(dt);

            egui::CentralPanel::default().show(ctx, |ui| {
                self.render_entry_screen(ui);
            });

            if waiting || !self.entry.animation.is_done() || self.entry.step_transition.is_running() {
                ctx.request_repaint();
            }
            return;
        };

        let checking_credentials = self.instagram.poll();

        egui::TopBottomPanel::bottom("tab_bar").show(ctx, |ui| {
            self.render_tab_bar(ui, active_tab);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| match active_tab {
                TabKey::Home => self.render_home_screen(ui, &snapshot),
                TabKey::Graph => self.render_graphs_screen(ui, &snapshot),
                TabKey::Settings => self.render_settings_screen(ui, &snapshot),
                TabKey::Logout => {}
            });
        });

        self.render_chart_detail_window(ctx);
        self.render_instagram_form_window(ctx);

        if checking_credentials {
            ctx.request_repaint();
        }

        if !self.store.snapshot().is_authenticated() {
            self.return_to_entry();
            ctx.request_repaint();
        }
    }
}
