//! # Tab Bar Module
//!
//! Bottom navigation between the authenticated screens.
//!
//! ## Tab Flow:
//! - Home, Meu espaco, Graficos switch the active tab in the store
//! - Sair goes through the same store operation, which ends the session

use eframe::egui;
use log::debug;
use shared::TabKey;

use crate::ui::app_state::EconomiaApp;
use crate::ui::components::theme::colors;

impl EconomiaApp {
    pub fn render_tab_bar(&mut self, ui: &mut egui::Ui, active_tab: TabKey) {
        ui.add_space(6.0);
        ui.columns(TabKey::ALL.len(), |columns| {
            for (column, tab) in columns.iter_mut().zip(TabKey::ALL) {
                column.vertical_centered(|ui| {
                    let color = if tab == active_tab { colors::PRIMARY } else { colors::TEXT_SECONDARY };
                    let text = egui::RichText::new(tab.label()).color(color);
                    let text = if tab == active_tab { text.strong() } else { text };

                    if ui.add(egui::Button::new(text).frame(false)).clicked() && tab != active_tab {
                        debug!("Tab selected: {:?}", tab);
                        self.store.set_active_tab(tab);
                    }
                });
            }
        });
        ui.add_space(6.0);
    }
}
