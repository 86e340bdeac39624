//! # Chart Card
//!
//! Compact card for one indicator: latest value, update date, source tag,
//! trend and a bar sparkline, with favorite and expand buttons.

use eframe::egui;
use shared::ChartItem;

use crate::backend::domain::{card_summary, Trend};
use crate::ui::components::chart_detail::sparkline_bar_heights;
use crate::ui::components::theme::{colors, tag_color};

const SPARKLINE_BAR_WIDTH: f32 = 6.0;
const SPARKLINE_BAR_GAP: f32 = 4.0;
const SPARKLINE_HEIGHT: f32 = 36.0;

/// What the user clicked on a card this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartCardAction {
    ToggleFavorite,
    Expand,
}

/// Draw a chart card; `highlight` paints a colored left edge (home favorites)
pub fn render_chart_card(
    ui: &mut egui::Ui,
    chart: &ChartItem,
    is_favorite: bool,
    highlight: Option<egui::Color32>,
) -> Option<ChartCardAction> {
    let summary = card_summary(chart);
    let trend_color = match summary.trend {
        Trend::Up => colors::TREND_UP,
        Trend::Down => colors::TREND_DOWN,
    };
    let mut action = None;

    let frame = egui::Frame::none()
        .fill(colors::BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::BORDER))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(14.0));

    let response = frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&chart.name).strong().color(colors::TEXT_PRIMARY));
                ui.label(egui::RichText::new(&summary.value_label).size(22.0).strong().color(colors::TEXT_PRIMARY));
                ui.label(
                    egui::RichText::new(format!("Atualizado em {}", chart.last_updated_label()))
                        .size(12.0)
                        .color(colors::TEXT_SECONDARY),
                );
                ui.label(egui::RichText::new(&chart.source).size(12.0).color(tag_color(&chart.source_color)));
                let arrow = match summary.trend {
                    Trend::Up => "▲",
                    Trend::Down => "▼",
                };
                ui.label(egui::RichText::new(format!("{} {}", arrow, summary.trend.label())).color(trend_color));
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                let star = if is_favorite { "★" } else { "☆" };
                let star_color = if is_favorite { colors::FAVORITE } else { colors::TEXT_SECONDARY };
                let hint = if is_favorite { "Remover dos favoritos" } else { "Adicionar aos favoritos" };
                if ui
                    .add(egui::Button::new(egui::RichText::new(star).size(20.0).color(star_color)).frame(false))
                    .on_hover_text(hint)
                    .clicked()
                {
                    action = Some(ChartCardAction::ToggleFavorite);
                }
                paint_sparkline(ui, &chart.series);
            });
        });

        ui.vertical_centered(|ui| {
            if ui
                .add(egui::Button::new(egui::RichText::new("⌄ Expandir").color(colors::TEXT_SECONDARY)).frame(false))
                .clicked()
            {
                action = Some(ChartCardAction::Expand);
            }
        });
    });

    if let Some(color) = highlight {
        let rect = response.response.rect;
        ui.painter().rect_filled(
            egui::Rect::from_min_size(rect.min, egui::vec2(4.0, rect.height())),
            egui::Rounding::same(2.0),
            color,
        );
    }

    action
}

fn paint_sparkline(ui: &mut egui::Ui, series: &[f64]) {
    let heights = sparkline_bar_heights(series);
    let width = heights.len() as f32 * (SPARKLINE_BAR_WIDTH + SPARKLINE_BAR_GAP);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, SPARKLINE_HEIGHT), egui::Sense::hover());

    for (index, height) in heights.iter().enumerate() {
        let x = rect.min.x + index as f32 * (SPARKLINE_BAR_WIDTH + SPARKLINE_BAR_GAP);
        let bar = egui::Rect::from_min_max(
            egui::pos2(x, rect.max.y - *height as f32),
            egui::pos2(x + SPARKLINE_BAR_WIDTH, rect.max.y),
        );
        ui.painter().rect_filled(bar, egui::Rounding::same(2.0), colors::PRIMARY);
    }
}
