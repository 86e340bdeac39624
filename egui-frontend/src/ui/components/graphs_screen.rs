//! # Graphs Screen
//!
//! Indicator list with category and value-type filter chips. Cards can be
//! favorited or expanded into the chart detail window.

use eframe::egui;

use crate::backend::domain::{AppSnapshot, CategoryFilter, ValueTypeFilter};
use crate::ui::app_state::EconomiaApp;
use crate::ui::components::chart_card::{render_chart_card, ChartCardAction};
use crate::ui::components::chart_detail::render_chart_detail;
use crate::ui::components::header::{render_screen_header, section_title};
use crate::ui::components::theme::colors;

fn filter_chip(ui: &mut egui::Ui, label: &str, active: bool) -> bool {
    let (fill, text_color) = if active {
        (colors::PRIMARY, colors::TEXT_ON_PRIMARY)
    } else {
        (colors::SURFACE, colors::TEXT_PRIMARY)
    };
    ui.add(
        egui::Button::new(egui::RichText::new(label).color(text_color))
            .fill(fill)
            .rounding(egui::Rounding::same(16.0)),
    )
    .clicked()
}

impl EconomiaApp {
    pub fn render_graphs_screen(&mut self, ui: &mut egui::Ui, snapshot: &AppSnapshot) {
        let greeting = format!("Ola {},", snapshot.user_email().unwrap_or_default());
        render_screen_header(ui, "Graficos", &greeting, None);

        section_title(ui, "Categorias");
        ui.horizontal_wrapped(|ui| {
            for option in CategoryFilter::options() {
                if filter_chip(ui, option.label(), self.graphs.category_filter == option) {
                    self.graphs.category_filter = option;
                }
            }
        });

        section_title(ui, "Tipo de metrica");
        ui.horizontal_wrapped(|ui| {
            for option in ValueTypeFilter::OPTIONS {
                if filter_chip(ui, option.label(), self.graphs.value_type_filter == option) {
                    self.graphs.value_type_filter = option;
                }
            }
        });
        ui.add_space(12.0);

        let charts = self
            .backend
            .chart_catalog
            .filtered(self.graphs.category_filter, self.graphs.value_type_filter);

        if charts.is_empty() {
            ui.label(
                egui::RichText::new("Nenhum grafico encontrado com os filtros selecionados.")
                    .color(colors::TEXT_SECONDARY),
            );
            return;
        }

        let mut clicked = None;
        for chart in charts {
            if let Some(action) = render_chart_card(ui, chart, snapshot.is_favorite(&chart.id), None) {
                clicked = Some((chart.id.clone(), action));
            }
            ui.add_space(8.0);
        }

        match clicked {
            Some((chart_id, ChartCardAction::ToggleFavorite)) => {
                self.store.toggle_favorite_chart(&chart_id);
            }
            Some((chart_id, ChartCardAction::Expand)) => self.graphs.expand(&chart_id),
            None => {}
        }
    }

    /// Detail window of the expanded chart, if any
    pub fn render_chart_detail_window(&mut self, ctx: &egui::Context) {
        let Some(chart_id) = self.graphs.expanded_chart.clone() else {
            return;
        };
        let Some(chart) = self.backend.chart_catalog.find(&chart_id) else {
            self.graphs.close_detail();
            return;
        };

        let mut open = true;
        egui::Window::new(chart.name.as_str())
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_width(520.0)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| render_chart_detail(ui, chart));

        if !open {
            self.graphs.close_detail();
        }
    }
}
