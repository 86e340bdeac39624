//! # Chart Geometry
//!
//! Pure projection of a labelled series into drawing coordinates inside a
//! measured rectangle. The renderer only paints what this module returns.
//!
//! ## Business Rules
//!
//! - Values are scaled between the series minimum and maximum; a flat series
//!   uses a range of 1 so every point sits on the bottom line
//! - X positions spread evenly from the left padding to the right padding; a
//!   single point sits on the left padding
//! - Y grows downward (screen coordinates), so the maximum lands at the top
//! - Nothing is projected when the series is empty or the rectangle is not
//!   larger than twice the padding in both directions

use log::debug;
use shared::{ChartDetailPoint, SeriesFormat};

/// Padding around the plot area of the detail chart
pub const CHART_PADDING: f64 = 24.0;
/// Minimum height of the detail chart area
pub const CHART_MIN_HEIGHT: f64 = 220.0;
/// Tallest sparkline bar on a chart card
pub const SPARKLINE_MAX_BAR_HEIGHT: f64 = 36.0;
/// Shortest sparkline bar, so the lowest value stays visible
pub const SPARKLINE_MIN_BAR_HEIGHT: f64 = 4.0;

/// Measured drawing area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSize {
    pub width: f64,
    pub height: f64,
}

impl ChartSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A series point placed in the drawing area
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPoint {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Label under the x axis, anchored on a projected point
#[derive(Debug, Clone, PartialEq)]
pub struct XAxisLabel {
    pub label: String,
    pub x: f64,
    pub index: usize,
}

/// Straight line between two consecutive points, as origin + length + angle
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub start_x: f64,
    pub start_y: f64,
    pub length: f64,
    /// Radians, `atan2(dy, dx)`
    pub angle: f64,
}

impl LineSegment {
    /// End point recovered from length and angle
    pub fn end(&self) -> (f64, f64) {
        (
            self.start_x + self.length * self.angle.cos(),
            self.start_y + self.length * self.angle.sin(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartGeometry {
    pub points: Vec<ProjectedPoint>,
    /// Top to bottom
    pub y_axis_labels: Vec<String>,
    pub x_axis_labels: Vec<XAxisLabel>,
    pub segments: Vec<LineSegment>,
}

impl ChartGeometry {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Minimum and maximum of the values; `None` for an empty slice
fn value_bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |bounds, value| match bounds {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}

fn value_range(min: f64, max: f64) -> f64 {
    let range = max - min;
    if range == 0.0 {
        1.0
    } else {
        range
    }
}

/// Project a series into `size`, keeping `padding` free on every side
pub fn project_series(points: &[ChartDetailPoint], size: ChartSize, padding: f64, format: &SeriesFormat) -> ChartGeometry {
    if size.width <= padding * 2.0 || size.height <= padding * 2.0 {
        debug!("Chart area {}x{} too small for padding {}", size.width, size.height, padding);
        return ChartGeometry::default();
    }
    let Some((min, max)) = value_bounds(points.iter().map(|p| p.value)) else {
        return ChartGeometry::default();
    };

    let range = value_range(min, max);
    let usable_width = size.width - padding * 2.0;
    let usable_height = size.height - padding * 2.0;
    let last_index = points.len() - 1;

    let projected: Vec<ProjectedPoint> = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let normalized_x = if last_index > 0 {
                index as f64 / last_index as f64
            } else {
                0.0
            };
            let normalized_y = (point.value - min) / range;
            ProjectedPoint {
                label: point.label.clone(),
                value: point.value,
                x: padding + normalized_x * usable_width,
                y: size.height - padding - normalized_y * usable_height,
            }
        })
        .collect();

    let y_axis_labels = y_axis_labels(min, max, format);
    let x_axis_labels = x_axis_labels(&projected);
    let segments = line_segments(&projected);

    debug!(
        "Projected {} points into {}x{} ({} segments)",
        projected.len(),
        size.width,
        size.height,
        segments.len()
    );

    ChartGeometry {
        points: projected,
        y_axis_labels,
        x_axis_labels,
        segments,
    }
}

fn y_axis_labels(min: f64, max: f64, format: &SeriesFormat) -> Vec<String> {
    if max == min {
        return vec![format.format_value(min)];
    }
    let mid = (max + min) / 2.0;
    vec![format.format_value(max), format.format_value(mid), format.format_value(min)]
}

/// Every point for short series, otherwise first, middle and last
fn x_axis_labels(points: &[ProjectedPoint]) -> Vec<XAxisLabel> {
    let label_at = |index: usize| XAxisLabel {
        label: points[index].label.clone(),
        x: points[index].x,
        index,
    };

    if points.len() <= 3 {
        return (0..points.len()).map(label_at).collect();
    }
    let last_index = points.len() - 1;
    vec![label_at(0), label_at(last_index / 2), label_at(last_index)]
}

fn line_segments(points: &[ProjectedPoint]) -> Vec<LineSegment> {
    points
        .windows(2)
        .map(|pair| {
            let dx = pair[1].x - pair[0].x;
            let dy = pair[1].y - pair[0].y;
            LineSegment {
                start_x: pair[0].x,
                start_y: pair[0].y,
                length: (dx * dx + dy * dy).sqrt(),
                angle: dy.atan2(dx),
            }
        })
        .collect()
}

/// Bar heights of a card sparkline.
///
/// An empty series is drawn as a single zero bar.
pub fn sparkline_bar_heights(series: &[f64]) -> Vec<f64> {
    let zero = [0.0];
    let series = if series.is_empty() { &zero[..] } else { series };
    let (min, max) = value_bounds(series.iter().copied()).unwrap_or((0.0, 0.0));
    let range = value_range(min, max);

    series
        .iter()
        .map(|value| {
            let normalized = (value - min) / range;
            (normalized * SPARKLINE_MAX_BAR_HEIGHT).max(SPARKLINE_MIN_BAR_HEIGHT)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn create_test_points(values: &[f64]) -> Vec<ChartDetailPoint> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| ChartDetailPoint {
                label: format!("P{}", index + 1),
                value: *value,
            })
            .collect()
    }

    fn percent_format() -> SeriesFormat {
        SeriesFormat {
            prefix: String::new(),
            suffix: "%".to_string(),
            decimals: 2,
        }
    }

    #[test]
    fn test_three_point_projection() {
        let points = create_test_points(&[10.0, 20.0, 10.0]);
        let geometry = project_series(&points, ChartSize::new(100.0, 100.0), 10.0, &SeriesFormat::default());

        let xs: Vec<f64> = geometry.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![10.0, 50.0, 90.0]);

        assert_eq!(geometry.points[0].y, 90.0);
        assert_eq!(geometry.points[1].y, 10.0);
        assert_eq!(geometry.points[2].y, 90.0);

        assert_eq!(geometry.y_axis_labels, vec!["20.0", "15.0", "10.0"]);
        assert_eq!(geometry.x_axis_labels.len(), 3);
        assert_eq!(geometry.segments.len(), 2);
    }

    #[test]
    fn test_points_stay_inside_padding() {
        let points = create_test_points(&[13.75, 13.25, 12.75, 11.25, 10.75, 10.5]);
        let size = ChartSize::new(320.0, CHART_MIN_HEIGHT);
        let geometry = project_series(&points, size, CHART_PADDING, &percent_format());

        for point in &geometry.points {
            assert!(point.x >= CHART_PADDING - EPSILON && point.x <= size.width - CHART_PADDING + EPSILON);
            assert!(point.y >= CHART_PADDING - EPSILON && point.y <= size.height - CHART_PADDING + EPSILON);
        }
        assert_eq!(geometry.points[0].x, CHART_PADDING);
        assert_eq!(geometry.points[5].x, size.width - CHART_PADDING);
        assert_eq!(geometry.y_axis_labels.len(), 3);
        assert_eq!(geometry.y_axis_labels[0], "13.75%");
        // (13.75 + 10.5) / 2 is an exact binary tie
        assert_eq!(geometry.y_axis_labels[1], "12.13%");
        assert_eq!(geometry.y_axis_labels[2], "10.50%");
    }

    #[test]
    fn test_empty_inputs_project_nothing() {
        let format = SeriesFormat::default();

        assert!(project_series(&[], ChartSize::new(100.0, 100.0), 10.0, &format).is_empty());

        let points = create_test_points(&[1.0, 2.0]);
        let geometry = project_series(&points, ChartSize::new(20.0, 100.0), 10.0, &format);
        assert_eq!(geometry, ChartGeometry::default());

        assert!(project_series(&points, ChartSize::new(100.0, 20.0), 10.0, &format).is_empty());
        assert!(project_series(&points, ChartSize::new(0.0, 0.0), CHART_PADDING, &format).is_empty());
    }

    #[test]
    fn test_flat_series() {
        let points = create_test_points(&[5.0, 5.0, 5.0]);
        let geometry = project_series(&points, ChartSize::new(100.0, 100.0), 10.0, &SeriesFormat::default());

        assert_eq!(geometry.y_axis_labels, vec!["5.0"]);
        assert!(geometry.points.iter().all(|p| p.y == 90.0));
        assert!(geometry.segments.iter().all(|s| s.angle == 0.0));
    }

    #[test]
    fn test_single_point_sits_on_left_padding() {
        let points = create_test_points(&[42.0]);
        let geometry = project_series(&points, ChartSize::new(100.0, 100.0), 10.0, &SeriesFormat::default());

        assert_eq!(geometry.points.len(), 1);
        assert_eq!(geometry.points[0].x, 10.0);
        assert_eq!(geometry.points[0].y, 90.0);
        assert!(geometry.segments.is_empty());
        assert_eq!(geometry.x_axis_labels.len(), 1);
    }

    #[test]
    fn test_long_series_x_labels() {
        let points = create_test_points(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let geometry = project_series(&points, ChartSize::new(200.0, 100.0), 10.0, &SeriesFormat::default());

        let indices: Vec<usize> = geometry.x_axis_labels.iter().map(|l| l.index).collect();
        assert_eq!(indices, vec![0, 3, 7]);
        assert_eq!(geometry.x_axis_labels[1].label, "P4");
        assert_eq!(geometry.x_axis_labels[1].x, geometry.points[3].x);

        let twelve = create_test_points(&[0.0; 12]);
        let geometry = project_series(&twelve, ChartSize::new(200.0, 100.0), 10.0, &SeriesFormat::default());
        let indices: Vec<usize> = geometry.x_axis_labels.iter().map(|l| l.index).collect();
        assert_eq!(indices, vec![0, 5, 11]);
    }

    #[test]
    fn test_segments_connect_points() {
        let points = create_test_points(&[0.21, 0.12, 0.36, -0.08, 0.47, 0.52]);
        let geometry = project_series(&points, ChartSize::new(300.0, CHART_MIN_HEIGHT), CHART_PADDING, &percent_format());

        assert_eq!(geometry.segments.len(), geometry.points.len() - 1);
        for (segment, pair) in geometry.segments.iter().zip(geometry.points.windows(2)) {
            assert_eq!(segment.start_x, pair[0].x);
            assert_eq!(segment.start_y, pair[0].y);
            let (end_x, end_y) = segment.end();
            assert!((end_x - pair[1].x).abs() < 1e-6);
            assert!((end_y - pair[1].y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_projection_is_deterministic() {
        let points = create_test_points(&[2.1, 1.8, 2.4, 2.9, 3.2, 3.4]);
        let size = ChartSize::new(280.0, CHART_MIN_HEIGHT);
        let first = project_series(&points, size, CHART_PADDING, &SeriesFormat::default());
        let second = project_series(&points, size, CHART_PADDING, &SeriesFormat::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_sparkline_bar_heights() {
        assert_eq!(sparkline_bar_heights(&[0.0, 5.0, 10.0]), vec![4.0, 18.0, 36.0]);
        assert_eq!(sparkline_bar_heights(&[3.0, 3.0]), vec![4.0, 4.0]);
        assert_eq!(sparkline_bar_heights(&[]), vec![4.0]);
    }
}
