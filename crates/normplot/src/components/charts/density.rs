//! Density curve chart.
//!
//! Renders the sampled normal density as a connected line inside a titled
//! block, with labeled axes and a background grid. The grid is drawn as a
//! dark scatter dataset beneath the curve because `ratatui`'s chart widget
//! has no native gridline support.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::components::{Component, EventResult};
use crate::state::AppState;

/// Vertical gridlines sit at each whole unit of the domain
const GRID_X_STEP: f64 = 1.0;
/// Horizontal gridlines sit at each 0.1 step of density
const GRID_Y_STEP: f64 = 0.1;
/// Dots drawn along each gridline
const GRID_DOTS: usize = 48;
/// The y-axis ceiling rounds the curve peak up to the next step of this size
const Y_CEILING_STEP: f64 = 0.05;

pub struct DensityChart;

impl DensityChart {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DensityChart {
    fn default() -> Self {
        Self::new()
    }
}

/// Y-axis upper bound: the peak rounded up so the line clears the top border.
fn y_ceiling(max_density: f64) -> f64 {
    (max_density / Y_CEILING_STEP).ceil() * Y_CEILING_STEP
}

/// Background grid as explicit points: vertical lines at each whole unit of
/// the domain, horizontal lines at each [`GRID_Y_STEP`] of density. The x
/// axis itself (y = 0) is left to the chart border.
fn gridline_points(x_min: f64, x_max: f64, y_max: f64) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    let x_span = x_max - x_min;

    let mut x = (x_min / GRID_X_STEP).ceil() * GRID_X_STEP;
    while x <= x_max + 1e-9 {
        for i in 0..=GRID_DOTS {
            points.push((x, y_max * i as f64 / GRID_DOTS as f64));
        }
        x += GRID_X_STEP;
    }

    let mut y = GRID_Y_STEP;
    while y < y_max - 1e-9 {
        for i in 0..=GRID_DOTS {
            points.push((x_min + x_span * i as f64 / GRID_DOTS as f64, y));
        }
        y += GRID_Y_STEP;
    }

    points
}

impl Component for DensityChart {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let curve = &state.curve;
        let spec = curve.spec();

        let (x_min, x_max) = (spec.lower, spec.upper);
        let y_max = y_ceiling(curve.max_density());

        let grid = gridline_points(x_min, x_max, y_max);
        let points = curve.points();

        // Grid first so the curve draws on top of it
        let grid_dataset = Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::DarkGray))
            .data(&grid);

        let curve_dataset = Dataset::default()
            .name(format!("N({:.0}, {:.0})", spec.mean, spec.std_dev))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points);

        let x_labels = vec![
            Span::raw(format!("{:.0}", x_min)),
            Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
            Span::raw(format!("{:.0}", x_max)),
        ];

        let y_labels = vec![
            Span::raw("0.00"),
            Span::raw(format!("{:.2}", y_max / 2.0)),
            Span::raw(format!("{:.2}", y_max)),
        ];

        let x_axis = Axis::default()
            .title("Value".dark_gray())
            .bounds([x_min, x_max])
            .labels(x_labels);

        let y_axis = Axis::default()
            .title("Probability Density".dark_gray())
            .bounds([0.0, y_max])
            .labels(y_labels);

        let chart = Chart::new(vec![grid_dataset, curve_dataset])
            .block(
                Block::default()
                    .title("PDF Example (Normal Distribution)")
                    .borders(Borders::ALL),
            )
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_ceiling_rounds_up() {
        // Standard normal peak lands on the 0.40 step
        assert!((y_ceiling(0.398_942_280_4) - 0.40).abs() < 1e-12);
        assert!((y_ceiling(0.41) - 0.45).abs() < 1e-12);
        assert!((y_ceiling(0.05) - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_gridlines_stay_inside_bounds() {
        let points = gridline_points(-4.0, 4.0, 0.40);
        assert!(!points.is_empty());
        for &(x, y) in &points {
            assert!((-4.0..=4.0).contains(&x), "x {x} out of bounds");
            assert!((0.0..=0.40 + 1e-9).contains(&y), "y {y} out of bounds");
        }
    }

    #[test]
    fn test_gridlines_cover_whole_units_and_density_steps() {
        let points = gridline_points(-4.0, 4.0, 0.40);

        // Vertical lines at -4..=4: 9 lines of GRID_DOTS + 1 points each
        let on_integer_x = points
            .iter()
            .filter(|(x, _)| (x - x.round()).abs() < 1e-9)
            .count();
        assert!(on_integer_x >= 9 * (GRID_DOTS + 1));

        // Horizontal lines at 0.1, 0.2, 0.3 (0.4 is the axis ceiling)
        for step in [0.1, 0.2, 0.3] {
            assert!(
                points.iter().any(|&(_, y)| (y - step).abs() < 1e-9),
                "no gridline at density {step}"
            );
        }
        assert!(
            !points
                .iter()
                .any(|&(x, y)| (y - 0.4).abs() < 1e-9 && (x - x.round()).abs() > 1e-9),
            "top bound must not get a horizontal gridline"
        );
    }
}
