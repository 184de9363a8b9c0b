// File: crates/livechart-core/src/profile.rs
// Summary: Dataset profiles selecting base values and volatility constants for the random walk.

/// Named simulation profile. Selects the starting level of both series and
/// how far a single step may move them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Stocks,
    Weather,
}

impl Profile {
    pub fn name(&self) -> &'static str {
        match self {
            Profile::Stocks => "stocks",
            Profile::Weather => "weather",
        }
    }

    /// Starting level for (series A, series B).
    pub fn base(&self) -> (f64, f64) {
        match self {
            Profile::Stocks => (200.0, 75.0),
            Profile::Weather => (18.0, 12.0),
        }
    }

    /// Step scale per series used while synthesizing seed history.
    /// Steps are `(u - SEED_BIAS) * scale` with u uniform in [0, 1).
    pub fn seed_step(&self) -> (f64, f64) {
        (4.0, 2.0)
    }

    /// Per-tick volatility per series; live steps are centered
    /// (`u - 0.5`) and additionally scaled by the playback speed.
    pub fn tick_volatility(&self) -> (f64, f64) {
        match self {
            Profile::Stocks => (2.2, 1.6),
            Profile::Weather => (1.4, 1.0),
        }
    }
}

/// Slight upward drift in seed steps: uniform steps are biased by this
/// offset instead of being centered at 0.5.
pub const SEED_BIAS: f64 = 0.48;

/// Return the list of built-in profiles.
pub fn presets() -> Vec<Profile> {
    vec![Profile::Stocks, Profile::Weather]
}

/// Find a profile by its `name`, falling back to stocks.
pub fn find(name: &str) -> Profile {
    for p in presets() {
        if p.name().eq_ignore_ascii_case(name) {
            return p;
        }
    }
    Profile::Stocks
}
