// File: crates/livechart-core/src/window.rs
// Summary: Bounded sliding window of two sample series plus index-aligned timestamp labels.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Local};
use rand::Rng;

use crate::error::ConfigError;
use crate::profile::{Profile, SEED_BIAS};
use crate::types::SEED_LEN;

/// One exported row: label plus the value of each series at that index.
/// A `None` value marks an index where that series holds no sample.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotRow {
    pub label: String,
    pub a: Option<f64>,
    pub b: Option<f64>,
}

/// Chronologically ordered buffer of the two series and their labels.
///
/// Invariant: after any mutation,
/// `series_a.len() == series_b.len() == labels.len() <= capacity`,
/// with index 0 holding the oldest retained sample.
#[derive(Clone, Debug)]
pub struct SampleWindow {
    series_a: VecDeque<f64>,
    series_b: VecDeque<f64>,
    labels: VecDeque<String>,
    capacity: usize,
}

impl SampleWindow {
    /// Create an empty window bounded at `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::InvalidCapacity(capacity));
        }
        Ok(Self {
            series_a: VecDeque::with_capacity(capacity),
            series_b: VecDeque::with_capacity(capacity),
            labels: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize { self.capacity }
    pub fn len(&self) -> usize { self.labels.len() }
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    pub fn value_a(&self, index: usize) -> Option<f64> { self.series_a.get(index).copied() }
    pub fn value_b(&self, index: usize) -> Option<f64> { self.series_b.get(index).copied() }
    pub fn label(&self, index: usize) -> Option<&str> { self.labels.get(index).map(|s| s.as_str()) }

    pub fn iter_a(&self) -> impl Iterator<Item = f64> + '_ { self.series_a.iter().copied() }
    pub fn iter_b(&self) -> impl Iterator<Item = f64> + '_ { self.series_b.iter().copied() }

    pub fn latest_a(&self) -> Option<f64> { self.series_a.back().copied() }
    pub fn latest_b(&self) -> Option<f64> { self.series_b.back().copied() }

    /// Replace all contents with a synthetic random-walk history ending at
    /// `now`, one sample per second. Synthesizes `SEED_LEN` points, or
    /// `capacity` when that is smaller.
    pub fn seed<R: Rng>(&mut self, profile: Profile, now: DateTime<Local>, rng: &mut R) {
        self.series_a.clear();
        self.series_b.clear();
        self.labels.clear();

        let (mut a, mut b) = profile.base();
        let (step_a, step_b) = profile.seed_step();
        let n = SEED_LEN.min(self.capacity);
        for i in 0..n {
            a += (rng.random::<f64>() - SEED_BIAS) * step_a;
            b += (rng.random::<f64>() - SEED_BIAS) * step_b;
            let at = now - Duration::seconds((n - 1 - i) as i64);
            self.push_sample(at.format("%H:%M:%S").to_string(), round2(a), round2(b));
        }
    }

    /// Advance the walk by one step: each series moves from its last value
    /// (or the profile base when empty) by a centered uniform step scaled by
    /// the profile volatility and the playback speed. Evicts the oldest
    /// sample when the window is full.
    pub fn append<R: Rng>(
        &mut self,
        profile: Profile,
        speed: f64,
        now: DateTime<Local>,
        rng: &mut R,
    ) {
        let (base_a, base_b) = profile.base();
        let (vol_a, vol_b) = profile.tick_volatility();
        let last_a = self.latest_a().unwrap_or(base_a);
        let last_b = self.latest_b().unwrap_or(base_b);
        let next_a = round2(last_a + (rng.random::<f64>() - 0.5) * vol_a * speed);
        let next_b = round2(last_b + (rng.random::<f64>() - 0.5) * vol_b * speed);
        self.push_sample(now.format("%H:%M:%S").to_string(), next_a, next_b);
    }

    /// Append one sample to all three sequences, dropping the oldest when
    /// over capacity. Values are stored as given (no rounding).
    pub fn push_sample(&mut self, label: String, a: f64, b: f64) {
        self.series_a.push_back(a);
        self.series_b.push_back(b);
        self.labels.push_back(label);
        while self.labels.len() > self.capacity {
            self.series_a.pop_front();
            self.series_b.pop_front();
            self.labels.pop_front();
        }
    }

    /// Row-major join of the three sequences by index. Indices where one
    /// sequence is shorter yield a blank label / `None` value; with the
    /// length invariant intact this never happens.
    pub fn snapshot_rows(&self) -> Vec<SnapshotRow> {
        let n = self
            .labels
            .len()
            .max(self.series_a.len())
            .max(self.series_b.len());
        (0..n)
            .map(|i| SnapshotRow {
                label: self.labels.get(i).cloned().unwrap_or_default(),
                a: self.series_a.get(i).copied(),
                b: self.series_b.get(i).copied(),
            })
            .collect()
    }
}

/// Round to 2 decimal places, matching the stored sample precision.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
