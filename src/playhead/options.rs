//! Construction options for the playhead widget.

use super::keymap::KeyMap;
use super::model::Model;
use crate::grab::SharedGrab;

/// Configuration applied by [`new`](super::new).
///
/// ```rust
/// use bubbletea_playhead::playhead::{new, with_scrub_step, with_slack, with_width};
/// use bubbletea_playhead::truth::Truth;
///
/// let playhead = new(
///     Truth::new(10.0, true, 180_000),
///     &[with_width(60), with_slack(2.0), with_scrub_step(1.0)],
/// );
/// assert_eq!(playhead.width, 60);
/// ```
pub enum PlayheadOption {
    /// Total width of the bar in cells.
    WithWidth(i32),
    /// Color of the filled portion.
    WithSolidFill(String),
    /// Color of the empty portion.
    WithEmptyColor(String),
    /// Color of the time label shown while scrubbing.
    WithLabelColor(String),
    /// Characters for filled and empty cells.
    WithFillCharacters(char, char),
    /// Frames per second of the interpolation loop.
    WithFps(u32),
    /// How far the display may run ahead of truth, in percentage points.
    WithSlack(f64),
    /// Percentage points moved per scrub event.
    WithScrubStep(f64),
    /// Below this position the time label is drawn after the fill.
    WithLabelThreshold(f64),
    /// Replaces the key bindings.
    WithKeyMap(KeyMap),
    /// Host input capture held while scrubbing.
    WithInputGrab(SharedGrab),
}

impl PlayheadOption {
    pub(super) fn apply(&self, m: &mut Model) {
        match self {
            PlayheadOption::WithWidth(width) => m.width = (*width).max(0),
            PlayheadOption::WithSolidFill(color) => m.full_color = color.clone(),
            PlayheadOption::WithEmptyColor(color) => m.empty_color = color.clone(),
            PlayheadOption::WithLabelColor(color) => m.label_color = color.clone(),
            PlayheadOption::WithFillCharacters(full, empty) => {
                m.full = *full;
                m.empty = *empty;
            }
            PlayheadOption::WithFps(fps) => m.set_fps(*fps),
            PlayheadOption::WithSlack(slack) => m.set_slack(*slack),
            PlayheadOption::WithScrubStep(step) => m.set_scrub_step(*step),
            PlayheadOption::WithLabelThreshold(threshold) => m.label_threshold = *threshold,
            PlayheadOption::WithKeyMap(keymap) => m.keymap = keymap.clone(),
            PlayheadOption::WithInputGrab(grab) => m.set_input_grab(grab.clone()),
        }
    }
}

/// Sets the total bar width in cells.
pub fn with_width(w: i32) -> PlayheadOption {
    PlayheadOption::WithWidth(w)
}

/// Sets the color of the filled portion.
pub fn with_solid_fill(color: impl Into<String>) -> PlayheadOption {
    PlayheadOption::WithSolidFill(color.into())
}

/// Sets the color of the empty portion.
pub fn with_empty_color(color: impl Into<String>) -> PlayheadOption {
    PlayheadOption::WithEmptyColor(color.into())
}

/// Sets the color of the scrub time label.
pub fn with_label_color(color: impl Into<String>) -> PlayheadOption {
    PlayheadOption::WithLabelColor(color.into())
}

/// Sets the characters used for filled and empty cells.
pub fn with_fill_characters(full: char, empty: char) -> PlayheadOption {
    PlayheadOption::WithFillCharacters(full, empty)
}

/// Sets the interpolation frame rate. Zero falls back to the default.
pub fn with_fps(fps: u32) -> PlayheadOption {
    PlayheadOption::WithFps(fps)
}

/// Sets how far the display may run ahead of the last reported position.
pub fn with_slack(slack: f64) -> PlayheadOption {
    PlayheadOption::WithSlack(slack)
}

/// Sets the scrub step in percentage points.
pub fn with_scrub_step(step: f64) -> PlayheadOption {
    PlayheadOption::WithScrubStep(step)
}

/// Sets the position below which the time label is drawn outside the fill.
pub fn with_label_threshold(threshold: f64) -> PlayheadOption {
    PlayheadOption::WithLabelThreshold(threshold)
}

/// Replaces the default key bindings.
pub fn with_key_map(keymap: KeyMap) -> PlayheadOption {
    PlayheadOption::WithKeyMap(keymap)
}

/// Installs a host input grab, held for the duration of every scrub.
pub fn with_input_grab(grab: SharedGrab) -> PlayheadOption {
    PlayheadOption::WithInputGrab(grab)
}
