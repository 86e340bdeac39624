//! # Home Screen
//!
//! Greeting with profile completion, the favorited charts and the categories
//! the user follows.

use eframe::egui;
use shared::CategoryKey;

use crate::backend::domain::AppSnapshot;
use crate::ui::app_state::EconomiaApp;
use crate::ui::components::chart_card::{render_chart_card, ChartCardAction};
use crate::ui::components::header::{render_screen_header, section_title};
use crate::ui::components::theme::colors;

/// Subtitle under the greeting
pub fn completion_subtitle(completion: u8) -> String {
    if completion >= 100 {
        "Cadastro completo!".to_string()
    } else {
        format!("Cadastro {}% completo", completion)
    }
}

impl EconomiaApp {
    pub fn render_home_screen(&mut self, ui: &mut egui::Ui, snapshot: &AppSnapshot) {
        let greeting = format!("Ola {},", snapshot.display_name());
        let subtitle = completion_subtitle(snapshot.profile_completion());
        render_screen_header(ui, "Home", &greeting, Some(&subtitle));

        section_title(ui, "Graficos favoritos");
        let favorites = snapshot.favorite_charts(self.backend.chart_catalog.charts());
        if favorites.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("☆").size(24.0).color(colors::TEXT_SECONDARY));
                ui.label(egui::RichText::new("Nenhum favorito por aqui ainda").strong());
                ui.label(
                    egui::RichText::new(
                        "Visite a aba Graficos, encontre indicadores do seu interesse e toque na estrela para acompanhar tudo por aqui.",
                    )
                    .color(colors::TEXT_SECONDARY),
                );
            });
        }

        let mut toggled = None;
        for chart in favorites {
            if let Some(ChartCardAction::ToggleFavorite) = render_chart_card(ui, chart, true, Some(colors::PRIMARY)) {
                toggled = Some(chart.id.clone());
            }
            ui.add_space(8.0);
        }
        if let Some(chart_id) = toggled {
            self.store.toggle_favorite_chart(&chart_id);
        }

        let selected = snapshot.selected_categories();
        if !selected.is_empty() {
            section_title(ui, "Categorias selecionadas");
            ui.horizontal_wrapped(|ui| {
                for key in selected {
                    category_chip(ui, key);
                }
            });
        }
    }
}

fn category_chip(ui: &mut egui::Ui, key: CategoryKey) {
    egui::Frame::none()
        .fill(colors::SURFACE)
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(key.label()).color(colors::PRIMARY).strong());
        });
}
