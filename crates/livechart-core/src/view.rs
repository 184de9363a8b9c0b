// File: crates/livechart-core/src/view.rs
// Summary: Caller-owned view state and auto-scale bounds over the visible series.

use crate::types::Insets;
use crate::window::SampleWindow;

/// Per-draw view parameters. Owned by the widget host and passed in; the
/// core never persists it.
#[derive(Clone, Copy, Debug)]
pub struct ViewState {
    pub show_a: bool,
    pub show_b: bool,
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl ViewState {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            show_a: true,
            show_b: true,
            width,
            height,
            insets: Insets::default(),
        }
    }
}

/// Auto-scaled value range for the Y axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

/// Span below which the relative margins are considered collapsed.
pub const FLAT_EPS: f64 = 1e-9;
/// Absolute padding applied when the span collapses (flat data at zero
/// would otherwise produce a zero-width range).
pub const FLAT_PAD: f64 = 0.5;

/// Min/max over the visible series with 2% relative margins so points never
/// touch the plot edge. `None` when no visible series holds data; the
/// caller skips drawing.
pub fn compute_bounds(window: &SampleWindow, view: &ViewState) -> Option<Bounds> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    if view.show_a {
        for v in window.iter_a() {
            min = min.min(v);
            max = max.max(v);
            any = true;
        }
    }
    if view.show_b {
        for v in window.iter_b() {
            min = min.min(v);
            max = max.max(v);
            any = true;
        }
    }
    if !any {
        return None;
    }
    let mut lo = min * 0.98;
    let mut hi = max * 1.02;
    if hi - lo < FLAT_EPS {
        lo -= FLAT_PAD;
        hi += FLAT_PAD;
    }
    Some(Bounds { min: lo, max: hi })
}
