//! Messages and hook types for the playhead widget.

use crate::truth::Truth;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Called with the seek target in milliseconds when a scrub is committed.
pub type SeekFunc = Box<dyn FnMut(u64) + Send>;

/// Called with `true` when scrubbing starts and `false` when it ends.
pub type ScrubbingFunc = Box<dyn FnMut(bool) + Send>;

/// Called when the user asks to toggle playback.
pub type PlayPauseFunc = Box<dyn FnMut() + Send>;

/// Message that advances the interpolation by one display frame.
///
/// Frames are scheduled by the widget itself; applications only need to
/// forward them to [`Model::update`](super::Model::update).
#[derive(Debug, Clone)]
pub struct FrameMsg {
    /// Identifies the widget that scheduled the frame.
    pub(super) id: i64,
    /// Identifies the frame loop; frames from a cancelled loop are ignored.
    pub(super) tag: i64,
}

/// Message carrying a new authoritative playback state.
///
/// An `id` of `0` targets every playhead.
#[derive(Debug, Clone)]
pub struct TruthMsg {
    /// Target widget, or `0` for any.
    pub id: i64,
    /// The reported state.
    pub truth: Truth,
}

/// Message reporting a press on the progress track.
///
/// Hit-testing is up to the host; send this when the pointer goes down on
/// the area where the widget is drawn. An `id` of `0` targets every playhead.
#[derive(Debug, Clone)]
pub struct PressMsg {
    /// Target widget, or `0` for any.
    pub id: i64,
}

/// A relative-motion (wheel) event.
///
/// Only the horizontal axis moves a scrub; `delta_y` is carried so hosts can
/// forward raw events unchanged.
///
/// [`Model::update`](super::Model::update) returns no command for a wheel
/// message, so its return value does not say whether the event was used.
/// While [`Model::is_scrubbing`](super::Model::is_scrubbing) is true the
/// widget owns wheel input: the host should forward the event to the
/// playhead and skip its own scrolling for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelMsg {
    /// Horizontal delta; positive moves forward.
    pub delta_x: f64,
    /// Vertical delta; ignored.
    pub delta_y: f64,
}

impl WheelMsg {
    /// Converts a terminal mouse event into a wheel message.
    ///
    /// Terminals report horizontal scrolling either as `ScrollLeft` /
    /// `ScrollRight` or as vertical scrolling with shift held. Anything that
    /// is not a scroll yields `None`.
    ///
    /// ```rust
    /// use bubbletea_playhead::playhead::WheelMsg;
    /// use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
    ///
    /// let event = MouseEvent {
    ///     kind: MouseEventKind::ScrollRight,
    ///     column: 0,
    ///     row: 0,
    ///     modifiers: KeyModifiers::NONE,
    /// };
    /// let wheel = WheelMsg::from_mouse(&event).unwrap();
    /// assert_eq!(wheel.delta_x, 1.0);
    /// ```
    pub fn from_mouse(event: &MouseEvent) -> Option<Self> {
        let shifted = event.modifiers.contains(KeyModifiers::SHIFT);
        let (delta_x, delta_y) = match event.kind {
            MouseEventKind::ScrollLeft => (-1.0, 0.0),
            MouseEventKind::ScrollRight => (1.0, 0.0),
            MouseEventKind::ScrollUp if shifted => (-1.0, 0.0),
            MouseEventKind::ScrollDown if shifted => (1.0, 0.0),
            MouseEventKind::ScrollUp => (0.0, -1.0),
            MouseEventKind::ScrollDown => (0.0, 1.0),
            _ => return None,
        };
        Some(Self { delta_x, delta_y })
    }
}

/// Whether `event` is a primary-button press, the gesture that starts a scrub.
pub fn is_press(event: &MouseEvent) -> bool {
    matches!(event.kind, MouseEventKind::Down(MouseButton::Left))
}

/// Output hooks of the widget.
#[derive(Default)]
pub(super) struct Hooks {
    pub(super) on_seek: Option<SeekFunc>,
    pub(super) on_scrubbing_change: Option<ScrubbingFunc>,
    pub(super) on_play_pause: Option<PlayPauseFunc>,
}

impl Hooks {
    pub(super) fn seek(&mut self, ms: u64) {
        if let Some(f) = self.on_seek.as_mut() {
            f(ms);
        }
    }

    pub(super) fn scrubbing_changed(&mut self, active: bool) {
        if let Some(f) = self.on_scrubbing_change.as_mut() {
            f(active);
        }
    }

    pub(super) fn play_pause(&mut self) {
        if let Some(f) = self.on_play_pause.as_mut() {
            f();
        }
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("on_seek", &self.on_seek.is_some())
            .field("on_scrubbing_change", &self.on_scrubbing_change.is_some())
            .field("on_play_pause", &self.on_play_pause.is_some())
            .finish()
    }
}
