// File: crates/livechart-core/src/chart.rs
// Summary: Chart renderer; draws grid, series polylines and markers, and answers hover hit-tests.

use crate::geometry::PlotRect;
use crate::grid;
use crate::scale::{IndexScale, ValueScale};
use crate::surface::{Surface, TextAlign};
use crate::theme::Theme;
use crate::types::Color;
use crate::view::{compute_bounds, ViewState};
use crate::window::SampleWindow;

pub struct RenderOptions {
    /// Number of horizontal grid bands; `grid_intervals + 1` rules drawn.
    pub grid_intervals: usize,
    pub marker_radius: f32,
    pub stroke_width: f32,
    pub label_size: f32,
    /// Grid value labels; turn off for pixel-deterministic snapshots.
    pub draw_labels: bool,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            grid_intervals: 4,
            marker_radius: 3.0,
            stroke_width: 2.5,
            label_size: 12.0,
            draw_labels: true,
            theme: Theme::light(),
        }
    }
}

/// Result of a hover hit-test: the nearest sample index with its label and
/// the value of each visible series there.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverInfo {
    pub index: usize,
    pub label: String,
    pub a: Option<f64>,
    pub b: Option<f64>,
}

pub struct Chart {
    pub options: RenderOptions,
}

impl Chart {
    pub fn new() -> Self {
        Self { options: RenderOptions::default() }
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Clear the surface and draw the current window. Stateless with
    /// respect to history: everything derives from `window` and `view`.
    /// With no visible data the surface is left cleared.
    pub fn draw(&self, surface: &mut dyn Surface, window: &SampleWindow, view: &ViewState) {
        surface.clear(self.options.theme.background);
        let Some(bounds) = compute_bounds(window, view) else {
            return;
        };
        let plot = PlotRect::new(view.width, view.height, &view.insets);
        let xs = IndexScale::new(plot.width, window.len());
        let ys = ValueScale::new(plot.height, bounds.min, bounds.max);

        self.draw_grid(surface, &plot, &ys);
        if view.show_a {
            self.draw_series(surface, &plot, &xs, &ys, window.iter_a(), self.options.theme.series_a);
        }
        if view.show_b {
            self.draw_series(surface, &plot, &xs, &ys, window.iter_b(), self.options.theme.series_b);
        }
    }

    /// Nearest sample for a surface pixel, by inverting the x mapping and
    /// clamping to the window. `None` when the window is empty or both
    /// series are hidden.
    pub fn hit_test(
        &self,
        px: f32,
        py: f32,
        window: &SampleWindow,
        view: &ViewState,
    ) -> Option<HoverInfo> {
        if window.is_empty() || (!view.show_a && !view.show_b) {
            return None;
        }
        let plot = PlotRect::new(view.width, view.height, &view.insets);
        let xs = IndexScale::new(plot.width, window.len());
        let (lx, _ly) = plot.to_plot((px, py));
        let index = xs.nearest_index(lx)?;
        Some(HoverInfo {
            index,
            label: window.label(index).unwrap_or_default().to_string(),
            a: if view.show_a { window.value_a(index) } else { None },
            b: if view.show_b { window.value_b(index) } else { None },
        })
    }

    fn draw_grid(&self, surface: &mut dyn Surface, plot: &PlotRect, ys: &ValueScale) {
        let theme = &self.options.theme;
        for y in grid::rules(plot.height, self.options.grid_intervals) {
            let (x0, sy) = plot.to_surface((0.0, y));
            let x1 = plot.left + plot.width;
            surface.line((x0, sy), (x1, sy), theme.grid, 1.0);
            if self.options.draw_labels {
                let value = ys.from_px(y);
                surface.text(
                    &format!("{value:.2}"),
                    (x0 - 8.0, sy + 4.0),
                    self.options.label_size,
                    theme.axis_label,
                    TextAlign::Right,
                );
            }
        }
    }

    fn draw_series(
        &self,
        surface: &mut dyn Surface,
        plot: &PlotRect,
        xs: &IndexScale,
        ys: &ValueScale,
        values: impl Iterator<Item = f64>,
        color: Color,
    ) {
        let points: Vec<(f32, f32)> = values
            .enumerate()
            .map(|(i, v)| plot.to_surface((xs.to_px(i), ys.to_px(v))))
            .collect();
        if points.len() >= 2 {
            surface.polyline(&points, color, self.options.stroke_width);
        }
        for &p in &points {
            surface.fill_circle(p, self.options.marker_radius, color);
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}
