// File: crates/livechart-core/src/error.rs
// Summary: Typed configuration errors rejected at the public setters.

use thiserror::Error;

/// Invalid configuration input. Rejected before any state is mutated; the
/// previous valid value stays in effect.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("window capacity must be at least 1 (got {0})")]
    InvalidCapacity(usize),
    #[error("playback speed must be finite and positive (got {0})")]
    InvalidSpeed(f64),
}
