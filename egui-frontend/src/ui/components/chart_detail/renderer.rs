//! # Chart Detail Renderer
//!
//! Paints the expanded view of an indicator: y-axis labels on the left, the
//! line chart in the measured area, and the x-axis labels underneath. All
//! positions come from `geometry::project_series`.

use eframe::egui;
use shared::ChartItem;

use super::geometry::{project_series, ChartGeometry, ChartSize, CHART_MIN_HEIGHT, CHART_PADDING};
use crate::ui::components::theme::{colors, tag_color};

const Y_AXIS_WIDTH: f32 = 64.0;
const X_AXIS_LABEL_HEIGHT: f32 = 18.0;
const POINT_RADIUS: f32 = 4.0;

/// Draw the detail chart for `chart` using the width available in `ui`
pub fn render_chart_detail(ui: &mut egui::Ui, chart: &ChartItem) {
    ui.label(
        egui::RichText::new(format!("Atualizado em {}", chart.last_updated_label()))
            .size(12.0)
            .color(colors::TEXT_SECONDARY),
    );
    ui.add_space(8.0);

    let format = chart.series_format();
    let points = chart.detail_points();

    ui.horizontal(|ui| {
        let chart_width = (ui.available_width() - Y_AXIS_WIDTH).max(0.0);
        let chart_height = CHART_MIN_HEIGHT as f32;

        let (y_axis_rect, _) = ui.allocate_exact_size(egui::vec2(Y_AXIS_WIDTH, chart_height), egui::Sense::hover());
        let (chart_rect, _) = ui.allocate_exact_size(
            egui::vec2(chart_width, chart_height + X_AXIS_LABEL_HEIGHT),
            egui::Sense::hover(),
        );

        let plot_rect = egui::Rect::from_min_size(chart_rect.min, egui::vec2(chart_width, chart_height));
        let size = ChartSize::new(plot_rect.width() as f64, plot_rect.height() as f64);
        let geometry = project_series(&points, size, CHART_PADDING, &format);

        if geometry.is_empty() {
            ui.painter().text(
                plot_rect.center(),
                egui::Align2::CENTER_CENTER,
                "Sem dados para exibir",
                egui::FontId::proportional(13.0),
                colors::TEXT_SECONDARY,
            );
            return;
        }

        paint_y_axis_labels(ui.painter(), y_axis_rect, &geometry);
        paint_axes(ui.painter(), plot_rect);
        paint_series(ui.painter(), plot_rect, &geometry);
        paint_x_axis_labels(ui.painter(), plot_rect, &geometry);
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Fonte:").size(12.0).color(colors::TEXT_SECONDARY));
        ui.label(
            egui::RichText::new(&chart.source)
                .size(12.0)
                .color(tag_color(&chart.source_color))
                .strong(),
        );
    });
}

fn to_screen(rect: egui::Rect, x: f64, y: f64) -> egui::Pos2 {
    egui::pos2(rect.min.x + x as f32, rect.min.y + y as f32)
}

fn paint_y_axis_labels(painter: &egui::Painter, rect: egui::Rect, geometry: &ChartGeometry) {
    let padding = CHART_PADDING as f32;
    let count = geometry.y_axis_labels.len();
    let usable = rect.height() - padding * 2.0;

    for (index, label) in geometry.y_axis_labels.iter().enumerate() {
        // a single label sits on the baseline with the flat series
        let y = if count > 1 {
            rect.min.y + padding + usable * index as f32 / (count - 1) as f32
        } else {
            rect.max.y - padding
        };
        painter.text(
            egui::pos2(rect.max.x - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            label,
            egui::FontId::proportional(11.0),
            colors::TEXT_SECONDARY,
        );
    }
}

fn paint_axes(painter: &egui::Painter, rect: egui::Rect) {
    let padding = CHART_PADDING as f32;
    let stroke = egui::Stroke::new(1.0, colors::CHART_AXIS);
    let origin = egui::pos2(rect.min.x + padding, rect.max.y - padding);

    painter.line_segment([egui::pos2(origin.x, rect.min.y + padding), origin], stroke);
    painter.line_segment([origin, egui::pos2(rect.max.x - padding, origin.y)], stroke);
}

fn paint_series(painter: &egui::Painter, rect: egui::Rect, geometry: &ChartGeometry) {
    let stroke = egui::Stroke::new(2.0, colors::CHART_LINE);

    for segment in &geometry.segments {
        let (end_x, end_y) = segment.end();
        painter.line_segment(
            [to_screen(rect, segment.start_x, segment.start_y), to_screen(rect, end_x, end_y)],
            stroke,
        );
    }

    for point in &geometry.points {
        let center = to_screen(rect, point.x, point.y);
        painter.circle_filled(center, POINT_RADIUS, colors::BACKGROUND);
        painter.circle_stroke(center, POINT_RADIUS, stroke);
    }
}

fn paint_x_axis_labels(painter: &egui::Painter, rect: egui::Rect, geometry: &ChartGeometry) {
    for label in &geometry.x_axis_labels {
        painter.text(
            egui::pos2(rect.min.x + label.x as f32, rect.max.y + 2.0),
            egui::Align2::CENTER_TOP,
            &label.label,
            egui::FontId::proportional(11.0),
            colors::TEXT_SECONDARY,
        );
    }
}
