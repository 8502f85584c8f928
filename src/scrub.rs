//! The scrubbing state machine.
//!
//! A [`Controller`] is either [`Mode::Idle`] or [`Mode::Scrubbing`]. Only
//! explicit user actions move it between the two: [`Controller::begin`] on a
//! press of the track, [`Controller::commit`] or [`Controller::cancel`] to
//! leave. While scrubbing, each relative-motion event moves the offset by a
//! fixed step, clamped to `[0, 100]`.
//!
//! The offset only exists inside a [`Session`], so an offset can never be set
//! while idle.
//!
//! ```rust
//! use bubbletea_playhead::scrub::{Controller, Direction};
//!
//! let mut scrub = Controller::default();
//! assert!(scrub.begin(50.0, None));
//! for _ in 0..3 {
//!     scrub.nudge(Direction::Forward);
//! }
//! assert_eq!(scrub.position(), Some(51.5));
//!
//! let committed = scrub.commit().unwrap();
//! assert_eq!(committed.offset, Some(51.5));
//! assert!(!scrub.is_scrubbing());
//! ```

use crate::grab::GrabGuard;

/// Percentage points moved per relative-motion event.
pub const DEFAULT_STEP: f64 = 0.5;

/// Direction of a relative-motion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the start of the track.
    Backward,
    /// Towards the end of the track.
    Forward,
}

impl Direction {
    /// Maps a wheel delta to a direction. Zero and NaN carry no direction.
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Direction::Forward)
        } else if delta < 0.0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    fn sign(self) -> f64 {
        match self {
            Direction::Backward => -1.0,
            Direction::Forward => 1.0,
        }
    }
}

/// State of one scrub session.
#[derive(Debug)]
pub struct Session {
    baseline: f64,
    offset: Option<f64>,
    _grab: Option<GrabGuard>,
}

impl Session {
    /// The displayed value captured when the session started.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// The user's chosen position, if any motion happened yet.
    pub fn offset(&self) -> Option<f64> {
        self.offset
    }

    /// The position the session currently shows.
    pub fn position(&self) -> f64 {
        self.offset.unwrap_or(self.baseline)
    }
}

/// Interaction mode of the widget.
#[derive(Debug, Default)]
pub enum Mode {
    /// The interpolation engine owns the display.
    #[default]
    Idle,
    /// The user owns the display.
    Scrubbing(Session),
}

/// Result of committing a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Committed {
    /// The final offset, or `None` if the user never moved it.
    pub offset: Option<f64>,
}

/// Drives [`Mode`] transitions.
#[derive(Debug)]
pub struct Controller {
    mode: Mode,
    step: f64,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl Controller {
    /// Creates an idle controller moving `step` points per event.
    ///
    /// Non-finite or non-positive steps fall back to [`DEFAULT_STEP`].
    pub fn new(step: f64) -> Self {
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            DEFAULT_STEP
        };
        Self {
            mode: Mode::Idle,
            step,
        }
    }

    /// Points moved per relative-motion event.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The current mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Whether a session is active.
    pub fn is_scrubbing(&self) -> bool {
        matches!(self.mode, Mode::Scrubbing(_))
    }

    /// The position shown by the active session.
    pub fn position(&self) -> Option<f64> {
        match &self.mode {
            Mode::Idle => None,
            Mode::Scrubbing(session) => Some(session.position()),
        }
    }

    /// Starts a session at `baseline`, holding `grab` until it ends.
    ///
    /// Returns `false`, dropping `grab`, when a session is already active.
    pub fn begin(&mut self, baseline: f64, grab: Option<GrabGuard>) -> bool {
        if self.is_scrubbing() {
            return false;
        }
        self.mode = Mode::Scrubbing(Session {
            baseline: baseline.clamp(0.0, 100.0),
            offset: None,
            _grab: grab,
        });
        tracing::debug!(baseline, "Scrubbing started");
        true
    }

    /// Moves the offset one step and returns the new offset.
    ///
    /// Returns `None` and does nothing while idle.
    pub fn nudge(&mut self, direction: Direction) -> Option<f64> {
        let step = self.step;
        match &mut self.mode {
            Mode::Idle => None,
            Mode::Scrubbing(session) => {
                let next = (session.position() + direction.sign() * step).clamp(0.0, 100.0);
                session.offset = Some(next);
                Some(next)
            }
        }
    }

    /// Ends the session, keeping its offset.
    ///
    /// Returns `None` while idle.
    pub fn commit(&mut self) -> Option<Committed> {
        match std::mem::take(&mut self.mode) {
            Mode::Idle => None,
            Mode::Scrubbing(session) => {
                tracing::debug!(offset = ?session.offset, "Scrubbing committed");
                Some(Committed {
                    offset: session.offset,
                })
            }
        }
    }

    /// Ends the session, discarding its offset.
    ///
    /// Returns `false` while idle.
    pub fn cancel(&mut self) -> bool {
        match std::mem::take(&mut self.mode) {
            Mode::Idle => false,
            Mode::Scrubbing(_) => {
                tracing::debug!("Scrubbing cancelled");
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grab::testing::counting;

    #[test]
    fn test_starts_idle() {
        let scrub = Controller::default();
        assert!(!scrub.is_scrubbing());
        assert!(matches!(scrub.mode(), Mode::Idle));
        assert_eq!(scrub.position(), None);
        assert_eq!(scrub.step(), DEFAULT_STEP);
    }

    #[test]
    fn test_invalid_step_falls_back() {
        assert_eq!(Controller::new(0.0).step(), DEFAULT_STEP);
        assert_eq!(Controller::new(-1.0).step(), DEFAULT_STEP);
        assert_eq!(Controller::new(f64::NAN).step(), DEFAULT_STEP);
        assert_eq!(Controller::new(2.0).step(), 2.0);
    }

    #[test]
    fn test_baseline_until_first_motion() {
        let mut scrub = Controller::default();
        scrub.begin(42.0, None);
        match scrub.mode() {
            Mode::Scrubbing(session) => {
                assert_eq!(session.baseline(), 42.0);
                assert_eq!(session.offset(), None);
                assert_eq!(session.position(), 42.0);
            }
            Mode::Idle => panic!("expected scrubbing"),
        }
    }

    #[test]
    fn test_begin_twice_is_noop() {
        let counter = counting();
        let mut scrub = Controller::default();
        assert!(scrub.begin(10.0, Some(GrabGuard::acquire(counter.clone()))));
        scrub.nudge(Direction::Forward);
        assert!(!scrub.begin(90.0, Some(GrabGuard::acquire(counter.clone()))));

        assert_eq!(scrub.position(), Some(10.5));
        let counter = counter.lock().unwrap();
        assert_eq!(counter.acquired, 2);
        assert_eq!(counter.released, 1);
    }

    #[test]
    fn test_nudge_while_idle() {
        let mut scrub = Controller::default();
        assert_eq!(scrub.nudge(Direction::Forward), None);
        assert!(!scrub.is_scrubbing());
    }

    #[test]
    fn test_nudge_clamps() {
        let mut scrub = Controller::default();
        scrub.begin(99.8, None);
        assert_eq!(scrub.nudge(Direction::Forward), Some(100.0));
        assert_eq!(scrub.nudge(Direction::Forward), Some(100.0));
        assert_eq!(scrub.nudge(Direction::Backward), Some(99.5));

        let mut scrub = Controller::default();
        scrub.begin(0.2, None);
        for _ in 0..10 {
            let offset = scrub.nudge(Direction::Backward).unwrap();
            assert!((0.0..=100.0).contains(&offset));
        }
        assert_eq!(scrub.position(), Some(0.0));
    }

    #[test]
    fn test_long_sequences_stay_in_range() {
        let mut scrub = Controller::new(7.5);
        scrub.begin(50.0, None);
        for i in 0..500 {
            let direction = if (i / 37) % 2 == 0 {
                Direction::Forward
            } else {
                Direction::Backward
            };
            let offset = scrub.nudge(direction).unwrap();
            assert!((0.0..=100.0).contains(&offset));
        }
    }

    #[test]
    fn test_commit_returns_offset_once() {
        let mut scrub = Controller::default();
        scrub.begin(50.0, None);
        scrub.nudge(Direction::Forward);
        scrub.nudge(Direction::Forward);
        scrub.nudge(Direction::Forward);

        assert_eq!(scrub.commit(), Some(Committed { offset: Some(51.5) }));
        assert_eq!(scrub.commit(), None);
        assert!(!scrub.cancel());
    }

    #[test]
    fn test_commit_without_motion() {
        let mut scrub = Controller::default();
        scrub.begin(50.0, None);
        assert_eq!(scrub.commit(), Some(Committed { offset: None }));
    }

    #[test]
    fn test_cancel_once() {
        let mut scrub = Controller::default();
        scrub.begin(50.0, None);
        scrub.nudge(Direction::Backward);
        assert!(scrub.cancel());
        assert!(!scrub.cancel());
        assert_eq!(scrub.commit(), None);
        assert_eq!(scrub.position(), None);
    }

    #[test]
    fn test_grab_released_on_every_exit() {
        let counter = counting();
        let mut scrub = Controller::default();

        scrub.begin(1.0, Some(GrabGuard::acquire(counter.clone())));
        scrub.commit();
        assert!(!counter.lock().unwrap().held());

        scrub.begin(1.0, Some(GrabGuard::acquire(counter.clone())));
        scrub.cancel();
        assert!(!counter.lock().unwrap().held());

        scrub.begin(1.0, Some(GrabGuard::acquire(counter.clone())));
        drop(scrub);
        let counter = counter.lock().unwrap();
        assert_eq!(counter.acquired, 3);
        assert_eq!(counter.released, 3);
    }

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(Direction::from_delta(3.0), Some(Direction::Forward));
        assert_eq!(Direction::from_delta(-0.1), Some(Direction::Backward));
        assert_eq!(Direction::from_delta(0.0), None);
        assert_eq!(Direction::from_delta(f64::NAN), None);
    }
}
