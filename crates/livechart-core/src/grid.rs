// File: crates/livechart-core/src/grid.rs
// Summary: Grid rule layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Plot-local y positions of the horizontal grid rules: `intervals` evenly
/// sized bands give `intervals + 1` rules, topmost first.
pub fn rules(height: f32, intervals: usize) -> Vec<f32> {
    linspace(0.0, height as f64, intervals.max(1) + 1)
        .into_iter()
        .map(|y| y as f32)
        .collect()
}
