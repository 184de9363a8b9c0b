// File: crates/livechart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::types::Color;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_label: Color,
    pub series_a: Color,
    pub series_b: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 255, 255, 255),
            grid: Color::from_argb(255, 230, 238, 251),
            axis_label: Color::from_argb(255, 100, 116, 139),
            series_a: Color::from_argb(255, 37, 99, 235),
            series_b: Color::from_argb(255, 239, 68, 68),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            grid: Color::from_argb(255, 40, 40, 45),
            axis_label: Color::from_argb(255, 210, 210, 220),
            series_a: Color::from_argb(255, 96, 165, 250),
            series_b: Color::from_argb(255, 248, 113, 113),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
