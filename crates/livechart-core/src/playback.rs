// File: crates/livechart-core/src/playback.rs
// Summary: Playback controller; run/stop state, tick scheduling and cadence reconciliation.

use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Local;
use rand::Rng;

use crate::error::ConfigError;
use crate::profile::Profile;
use crate::window::SampleWindow;

/// Interval at which the active tick period is re-checked against the
/// configured speed. Avoids tearing the schedule down on every slider
/// event while still converging within one period.
pub const RECONCILE_PERIOD: Duration = Duration::from_millis(500);

/// Two-state controller (Stopped/Running) driven by a host loop that calls
/// [`Playback::pump`] with a monotonic `Instant`.
///
/// Invariant: a scheduled next-tick deadline exists iff running.
pub struct Playback {
    running: bool,
    speed: f64,
    profile: Profile,
    active_period: Duration,
    next_tick: Option<Instant>,
    next_reconcile: Option<Instant>,
}

impl Playback {
    pub fn new(profile: Profile) -> Self {
        Self {
            running: false,
            speed: 1.0,
            profile,
            active_period: Duration::from_secs(1),
            next_tick: None,
            next_reconcile: None,
        }
    }

    pub fn is_running(&self) -> bool { self.running }
    pub fn speed(&self) -> f64 { self.speed }
    pub fn profile(&self) -> Profile { self.profile }

    fn configured_period(&self) -> Duration {
        // floor keeps the schedule advancing at absurd speed values
        Duration::from_secs_f64(1.0 / self.speed).max(Duration::from_millis(1))
    }

    /// Stopped -> Running; first tick due one period from `now`. No-op when
    /// already running.
    pub fn start(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.active_period = self.configured_period();
        self.next_tick = Some(now + self.active_period);
        self.next_reconcile = Some(now + RECONCILE_PERIOD);
    }

    /// Running -> Stopped; the pending tick is cancelled and no tick fires
    /// after this returns. No-op when already stopped.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.next_tick = None;
        self.next_reconcile = None;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.running {
            self.stop();
        } else {
            self.start(now);
        }
    }

    /// Update the cadence/volatility multiplier. The active tick period is
    /// not rescheduled here; it converges at the next reconciliation.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), ConfigError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    /// Switch dataset profile and reseed the window. Running state is
    /// unchanged.
    pub fn set_profile<R: Rng>(
        &mut self,
        profile: Profile,
        window: &mut SampleWindow,
        rng: &mut R,
    ) {
        self.profile = profile;
        window.seed(profile, Local::now(), rng);
    }

    /// Reseed the window with the current profile. Running state is
    /// unchanged.
    pub fn reset<R: Rng>(&mut self, window: &mut SampleWindow, rng: &mut R) {
        window.seed(self.profile, Local::now(), rng);
    }

    /// Fire every tick due at `now`: each appends one sample and invokes
    /// `on_tick` (the redraw hook). Returns how many ticks fired.
    ///
    /// A failing callback is contained here: the error is logged and the
    /// controller stops rather than ticking on through repeated failures.
    pub fn pump<R, F>(
        &mut self,
        now: Instant,
        window: &mut SampleWindow,
        rng: &mut R,
        mut on_tick: F,
    ) -> usize
    where
        R: Rng,
        F: FnMut(&SampleWindow) -> Result<()>,
    {
        if !self.running {
            return 0;
        }
        self.reconcile(now);
        let mut fired = 0;
        while let Some(deadline) = self.next_tick {
            if deadline > now {
                break;
            }
            window.append(self.profile, self.speed, Local::now(), rng);
            self.next_tick = Some(deadline + self.active_period);
            fired += 1;
            if let Err(err) = on_tick(window) {
                log::error!("tick callback failed, stopping playback: {err:#}");
                self.stop();
                break;
            }
        }
        fired
    }

    /// Adopt the configured period when it has drifted from the active one.
    /// Idempotent when cadence already matches; the rescheduled deadline
    /// restarts from `now` (phase continuity is not promised).
    fn reconcile(&mut self, now: Instant) {
        let Some(due) = self.next_reconcile else {
            return;
        };
        if due > now {
            return;
        }
        self.next_reconcile = Some(now + RECONCILE_PERIOD);
        let configured = self.configured_period();
        if configured != self.active_period {
            self.active_period = configured;
            self.next_tick = Some(now + configured);
        }
    }
}
