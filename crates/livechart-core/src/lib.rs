// File: crates/livechart-core/src/lib.rs
// Summary: Core library entry point; exports public API for the live chart widget.

pub mod window;
pub mod profile;
pub mod playback;
pub mod chart;
pub mod scale;
pub mod view;
pub mod surface;
pub mod theme;
pub mod grid;
pub mod geometry;
pub mod types;
pub mod export;
pub mod error;

pub use window::{SampleWindow, SnapshotRow};
pub use profile::Profile;
pub use playback::Playback;
pub use chart::{Chart, HoverInfo, RenderOptions};
pub use view::{compute_bounds, Bounds, ViewState};
pub use surface::{Surface, TextAlign};
pub use theme::Theme;
pub use types::{Color, Insets};
pub use error::ConfigError;
