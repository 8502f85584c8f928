//! Interpolation between authoritative position updates.
//!
//! Remote players report their position rarely (every second or so). The
//! [`Engine`] fills the gaps: while the player is playing it moves the
//! displayed position forward at the real playback rate, measured from the
//! wall-clock instant the last truth arrived.
//!
//! The displayed value is always derived from `truth + elapsed / duration`
//! rather than from summed per-frame increments, so frame jitter and long
//! sessions never accumulate rounding error. It is capped at
//! `truth + slack` so a stalled remote cannot make the bar run away.
//!
//! ```rust
//! use bubbletea_playhead::interpolation::Engine;
//! use bubbletea_playhead::truth::Truth;
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut engine = Engine::new(Truth::new(50.0, true, 200_000), start);
//!
//! // 1s of a 200s track is half a percent.
//! engine.advance(start + Duration::from_secs(1));
//! assert!((engine.displayed() - 50.5).abs() < 1e-9);
//!
//! // Never more than one point ahead of the last truth.
//! engine.advance(start + Duration::from_secs(10));
//! assert_eq!(engine.displayed(), 51.0);
//! ```

use crate::truth::{clamp_percent, Truth};
use std::time::Instant;

/// How far, in percentage points, the displayed value may run ahead of truth.
pub const DEFAULT_SLACK: f64 = 1.0;

/// The continuously advancing display position.
#[derive(Debug, Clone)]
pub struct Engine {
    truth: Truth,
    baseline: Instant,
    displayed: f64,
    slack: f64,
}

impl Engine {
    /// Creates an engine showing `truth`, with the advancing baseline at `now`.
    pub fn new(truth: Truth, now: Instant) -> Self {
        Self {
            truth,
            baseline: now,
            displayed: truth.progress,
            slack: DEFAULT_SLACK,
        }
    }

    /// Sets the forward-drift bound. Negative or non-finite values fall back
    /// to zero, which pins the display to truth.
    pub fn set_slack(&mut self, slack: f64) {
        self.slack = if slack.is_finite() { slack.max(0.0) } else { 0.0 };
        self.displayed = self.displayed.min(self.ceiling());
    }

    /// The forward-drift bound in percentage points.
    pub fn slack(&self) -> f64 {
        self.slack
    }

    /// The truth the engine is currently interpolating from.
    pub fn truth(&self) -> Truth {
        self.truth
    }

    /// The current display position in `[0, 100]`.
    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    /// Whether frames would move the display at all.
    pub fn advances(&self) -> bool {
        self.truth.advances()
    }

    /// Applies a new truth: the display jumps to it and the baseline restarts
    /// at `now`, discarding any drift.
    pub fn reset(&mut self, truth: Truth, now: Instant) {
        self.truth = truth;
        self.rebase(now);
    }

    /// Restarts interpolation from the current truth at `now`.
    pub fn rebase(&mut self, now: Instant) {
        self.baseline = now;
        self.displayed = self.truth.progress;
    }

    /// Records a truth without touching the display or the baseline.
    ///
    /// Used while something else owns the display; the next [`rebase`]
    /// picks the stored value up.
    ///
    /// [`rebase`]: Engine::rebase
    pub fn store(&mut self, truth: Truth) {
        self.truth = truth;
    }

    /// Moves the display to where playback should be at `now` and returns it.
    ///
    /// Without playback or a known duration the display holds at truth.
    pub fn advance(&mut self, now: Instant) -> f64 {
        if !self.truth.advances() {
            self.displayed = self.truth.progress;
            return self.displayed;
        }

        let elapsed_ms = now.saturating_duration_since(self.baseline).as_secs_f64() * 1000.0;
        let increment = elapsed_ms / self.truth.duration_ms as f64 * 100.0;
        let position = (self.truth.progress + increment).min(self.ceiling());
        self.displayed = clamp_percent(position);
        self.displayed
    }

    fn ceiling(&self) -> f64 {
        (self.truth.progress + self.slack).min(100.0)
    }
}
